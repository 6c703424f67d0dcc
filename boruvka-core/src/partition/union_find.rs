//! Index-based disjoint set with path compression and union by size.
//!
//! Roots double as component identifiers. When two components of equal size
//! merge, the lower index survives so runs are reproducible.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.parent.len()
    }

    pub(super) fn components(&self) -> usize {
        self.components
    }

    pub(super) fn contains(&self, node: usize) -> bool {
        node < self.parent.len()
    }

    pub(super) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Read-only root lookup that leaves the parent pointers untouched.
    pub(super) fn root_of(&self, mut node: usize) -> usize {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    pub(super) fn size_of(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns the surviving root, or `None` when both already share a root.
    pub(super) fn union(&mut self, left: usize, right: usize) -> Option<usize> {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return None;
        }

        let (survivor, absorbed) = choose_survivor(left, right, self.size[left], self.size[right]);
        self.parent[absorbed] = survivor;
        self.size[survivor] = self.size[survivor].saturating_add(self.size[absorbed]);
        self.components = self.components.saturating_sub(1);
        Some(survivor)
    }
}

fn choose_survivor(
    left: usize,
    right: usize,
    left_size: usize,
    right_size: usize,
) -> (usize, usize) {
    if left_size > right_size {
        return (left, right);
    }
    if right_size > left_size {
        return (right, left);
    }

    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}
