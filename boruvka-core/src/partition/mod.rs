//! Component membership tracking.
//!
//! [`Partition`] keeps every registered vertex in exactly one component. A
//! [`ComponentId`] is the dense index of the component's representative
//! vertex, so an identifier obtained before an unrelated merge still names
//! the same component afterwards. Identifiers of absorbed components remain
//! resolvable: passing one to [`Partition::union`] acts on the component that
//! absorbed it.

mod union_find;

use std::fmt;
use std::hash::Hash;

use crate::{
    VertexSet,
    error::{BoruvkaError, Result, render},
};

use self::union_find::DisjointSet;

/// Stable identifier of a component within a [`Partition`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentId(usize);

impl ComponentId {
    /// Returns the dense index of the representative vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }

    /// Orders two identifiers into an unordered-pair key.
    pub(crate) fn pair(self, other: Self) -> (Self, Self) {
        if self <= other {
            (self, other)
        } else {
            (other, self)
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The current partition of a vertex set into components.
///
/// # Examples
/// ```
/// use boruvka_core::{Partition, VertexSet};
///
/// let vertices = VertexSet::new(["A", "B", "C"]);
/// let mut partition = Partition::new(&vertices);
/// let a = partition.find(&"A")?;
/// let b = partition.find(&"B")?;
/// let merged = partition.union(a, b).expect("distinct components merge");
/// assert_eq!(partition.find(&"B")?, merged);
/// assert_eq!(partition.component_count(), 2);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Partition<'a, V> {
    vertices: &'a VertexSet<V>,
    sets: DisjointSet,
}

impl<'a, V> Partition<'a, V> {
    /// Starts with every vertex in its own singleton component.
    #[must_use]
    pub fn new(vertices: &'a VertexSet<V>) -> Self {
        Self {
            vertices,
            sets: DisjointSet::new(vertices.len()),
        }
    }

    /// Returns the number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sets.components()
    }

    /// Returns the number of vertices tracked by the partition.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.sets.len()
    }

    /// Returns the number of vertices in the component named by `id`, or
    /// `None` when `id` does not belong to this partition.
    #[must_use]
    pub fn component_size(&mut self, id: ComponentId) -> Option<usize> {
        self.sets
            .contains(id.0)
            .then(|| self.sets.size_of(id.0))
    }

    /// Merges the components named by `left` and `right`.
    ///
    /// Returns the surviving identifier, or `None` when nothing was merged:
    /// both identifiers resolve to the same component, or either one does
    /// not belong to this partition.
    pub fn union(&mut self, left: ComponentId, right: ComponentId) -> Option<ComponentId> {
        if !self.sets.contains(left.0) || !self.sets.contains(right.0) {
            return None;
        }
        self.sets.union(left.0, right.0).map(ComponentId)
    }

    /// Returns the component containing the vertex at dense `index`.
    pub(crate) fn find_index(&mut self, index: usize) -> ComponentId {
        ComponentId(self.sets.find(index))
    }

    /// Captures the component of every vertex, indexed by vertex position.
    pub(crate) fn snapshot(&mut self) -> Vec<ComponentId> {
        (0..self.sets.len())
            .map(|index| self.find_index(index))
            .collect()
    }

    /// Returns the representative vertex of a component.
    pub(crate) fn representative(&self, id: ComponentId) -> Option<&'a V> {
        if !self.sets.contains(id.0) {
            return None;
        }
        self.vertices.get(self.sets.root_of(id.0))
    }
}

impl<'a, V> Partition<'a, V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Returns the component currently containing `vertex`.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::UnregisteredVertex`] when `vertex` is not part
    /// of the vertex set.
    pub fn find(&mut self, vertex: &V) -> Result<ComponentId> {
        let index = self
            .vertices
            .index_of(vertex)
            .ok_or_else(|| BoruvkaError::UnregisteredVertex {
                vertex: render(vertex),
            })?;
        Ok(self.find_index(index))
    }

    /// Returns `true` when both vertices belong to the same component.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::UnregisteredVertex`] when either vertex is not
    /// part of the vertex set.
    pub fn connected(&mut self, left: &V, right: &V) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Lists the vertex sets of all components.
    ///
    /// Components are ordered by their earliest registered member and list
    /// their members in registration order.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<V>> {
        let mut slots: Vec<Option<usize>> = vec![None; self.sets.len()];
        let mut groups: Vec<Vec<V>> = Vec::with_capacity(self.sets.components());
        for (index, vertex) in self.vertices.as_slice().iter().enumerate() {
            let root = self.sets.root_of(index);
            let slot = *slots[root].get_or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(vertex.clone());
        }
        groups
    }
}
