//! The numeric capability set shared by every algorithm in the crate.
//!
//! ## Purpose
//!
//! Algorithms are written once against [`Numeric`] and never against concrete
//! number types. The trait bundles the two capabilities the engine needs:
//! a total ordering for extrema, sorting and searching, and a lossy
//! conversion to `f64` for averaging.
//!
//! ## Design notes
//!
//! * **Ordering**: Built on `PartialOrd`; NaN is the only value without an
//!   ordering and is rejected up front by the validator.
//! * **Conversion**: Delegates to `num_traits::ToPrimitive`.
//! * **Coverage**: Implemented for all primitive integer and float types, and
//!   for `rust_decimal::Decimal` behind the `decimal` feature.

// External dependencies
use core::cmp::Ordering;
use core::fmt::Debug;
use num_traits::ToPrimitive;

// ============================================================================
// Capability Trait
// ============================================================================

/// A numeric value that is totally ordered and convertible to `f64`.
pub trait Numeric: Copy + PartialOrd + ToPrimitive + Debug {
    /// Whether the value takes part in the ordering (false only for NaN).
    fn is_comparable(&self) -> bool;

    /// Compare two values, treating unorderable pairs as equal.
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Convert to `f64`, losing precision for wide integers.
    #[inline]
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_numeric_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_comparable(&self) -> bool {
                    true
                }

                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_comparable(&self) -> bool {
                    !self.is_nan()
                }
            }
        )*
    };
}

impl_numeric_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

#[cfg(feature = "decimal")]
impl_numeric_ord!(rust_decimal::Decimal);
