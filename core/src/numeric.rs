//! Numeric element kinds.
//!
//! [`Numeric`] is the per-kind seam used by `sum`, `sum_by` and `average`.
//! It fixes the zero value and the width a sum accumulates in:
//!
//! | Element            | Sum     |
//! |--------------------|---------|
//! | `i8`, `i16`, `i32` | `i32`   |
//! | `i64`              | `i64`   |
//! | `u8`, `u16`, `u32` | `u32`   |
//! | `u64`              | `u64`   |
//! | `isize` / `usize`  | itself  |
//! | `f32` / `f64`      | itself  |
//!
//! Integer sums wrap on overflow instead of panicking.

use core::fmt::Debug;

/// A primitive numeric element kind.
pub trait Numeric: Copy {
    /// The type a sum of this kind accumulates in.
    type Sum: Copy + PartialEq + Debug;

    /// Identity of the sum.
    const ZERO: Self::Sum;

    /// Adds `value` to a running sum.
    fn accumulate(sum: Self::Sum, value: Self) -> Self::Sum;

    /// Lossy conversion used by `average`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_integer_numeric {
    ($($ty:ty => $sum:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                type Sum = $sum;

                const ZERO: $sum = 0;

                #[inline]
                fn accumulate(sum: $sum, value: Self) -> $sum {
                    sum.wrapping_add(value as $sum)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                type Sum = $ty;

                const ZERO: $ty = 0.0;

                #[inline]
                fn accumulate(sum: $ty, value: Self) -> $ty {
                    sum + value
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_numeric!(
    i8 => i32,
    i16 => i32,
    i32 => i32,
    i64 => i64,
    isize => isize,
    u8 => u32,
    u16 => u32,
    u32 => u32,
    u64 => u64,
    usize => usize,
);

impl_float_numeric!(f32, f64);
