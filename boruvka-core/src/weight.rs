//! Numeric edge weights.
//!
//! Borůvka only needs a total order and a way to accumulate the forest
//! weight, so the trait is implemented for every primitive integer and for
//! `f32`/`f64`. Floating-point weights must be finite; [`crate::Graph`]
//! rejects NaN and infinities before any round runs. Forest totals are
//! accumulated with overflow checks, so a total that does not fit `W` is
//! reported as [`crate::BoruvkaError::WeightOverflow`] instead of being
//! clamped.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A totally ordered numeric edge weight.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use boruvka_core::Weight;
///
/// assert_eq!((-3_i32).cmp_weight(&2), Ordering::Less);
/// assert_eq!(1.5_f64.accumulate(2.0), Some(3.5));
/// assert_eq!(100_i8.accumulate(100), None);
/// assert!(!f32::NAN.is_finite_weight());
/// ```
pub trait Weight: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// The additive identity used to start forest totals.
    const ZERO: Self;

    /// Compares two weights under a total order.
    fn cmp_weight(&self, other: &Self) -> Ordering;

    /// Adds `rhs` to `self` when accumulating a forest total.
    ///
    /// Returns `None` when the sum overflows an integer type or leaves the
    /// finite range of a float type.
    #[must_use]
    fn accumulate(self, rhs: Self) -> Option<Self>;

    /// Returns `true` when the weight can take part in the ordering.
    fn is_finite_weight(&self) -> bool;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn accumulate(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn is_finite_weight(&self) -> bool {
                    true
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                #[inline]
                fn accumulate(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }

                #[inline]
                fn is_finite_weight(&self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);
