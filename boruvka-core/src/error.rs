//! Error types for the Borůvka core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while validating input or configuring a solver.
///
/// Vertices are rendered with their `Debug` representation so the error type
/// stays independent of the caller's vertex type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BoruvkaError {
    /// The vertex set was empty.
    #[error("cannot compute a spanning forest for an empty vertex set")]
    EmptyGraph,
    /// An edge referenced a vertex that is not part of the vertex set.
    #[error("edge {edge} references vertex {vertex}, which is not part of the vertex set")]
    UnknownVertex {
        /// Debug rendering of the offending vertex.
        vertex: Arc<str>,
        /// Input position of the offending edge.
        edge: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Debug rendering of the looping vertex.
        vertex: Arc<str>,
        /// Input position of the offending edge.
        edge: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Debug rendering of the rejected weight.
        weight: Arc<str>,
        /// Input position of the offending edge.
        edge: usize,
    },
    /// A partition lookup named a vertex that was never registered.
    #[error("vertex {vertex} is not registered in the partition")]
    UnregisteredVertex {
        /// Debug rendering of the missing vertex.
        vertex: Arc<str>,
    },
    /// Adding an edge to the forest total overflowed the weight type.
    #[error("adding edge {edge} overflows the forest weight {total}")]
    WeightOverflow {
        /// Debug rendering of the total accumulated before the edge.
        total: Arc<str>,
        /// Input position of the edge whose weight could not be added.
        edge: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`BoruvkaError`] variants.
    enum BoruvkaErrorCode for BoruvkaError {
        /// The vertex set was empty.
        EmptyGraph => EmptyGraph => "BORUVKA_EMPTY_GRAPH",
        /// An edge referenced a vertex outside the vertex set.
        UnknownVertex => UnknownVertex { .. } => "BORUVKA_UNKNOWN_VERTEX",
        /// An edge connected a vertex to itself.
        SelfLoop => SelfLoop { .. } => "BORUVKA_SELF_LOOP",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "BORUVKA_NON_FINITE_WEIGHT",
        /// A partition lookup named an unregistered vertex.
        UnregisteredVertex => UnregisteredVertex { .. } => "BORUVKA_UNREGISTERED_VERTEX",
        /// The forest total does not fit the weight type.
        WeightOverflow => WeightOverflow { .. } => "BORUVKA_WEIGHT_OVERFLOW",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "BORUVKA_BACKEND_UNAVAILABLE",
    }
}

impl BoruvkaError {
    /// Returns `true` for errors raised while validating the input graph.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::BoruvkaError;
    ///
    /// assert!(BoruvkaError::EmptyGraph.is_input_error());
    /// ```
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyGraph
                | Self::UnknownVertex { .. }
                | Self::SelfLoop { .. }
                | Self::NonFiniteWeight { .. }
        )
    }
}

pub(crate) fn render<T: fmt::Debug + ?Sized>(value: &T) -> Arc<str> {
    Arc::from(format!("{value:?}"))
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BoruvkaError>;
