//! This module contains the storage integers that hold the `num` of a [`Fixed`](crate::Fixed).
//! They are hidden from the end-user, which only sees the sealed [`Int`] trait, implemented for
//! the machine integers `i8` … `i128`, `u8` … `u128`, and for the arbitrary-precision [`Big`]
//! and [`UBig`], which take over when a shape needs more than 128 bits.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use malachite::Integer;

/// Machine integers.
mod primitive;

/// Arbitrary-precision backing store.
mod big;

pub use big::{Big, UBig};

/// The trait for the integer types that can hold the `num` of a [`Fixed`](crate::Fixed) (only
/// satisfied by `i8` … `i128`, `u8` … `u128`, [`Big`], and [`UBig`]).
///
/// This is a *sealed* type.
pub trait Int: Sealed {}

/// The signed storage integers: `i8`, `i16`, `i32`, `i64`, `i128`, and [`Big`].
pub trait SignedInt: Int + Neg<Output = Self> {}

/// The unsigned storage integers: `u8`, `u16`, `u32`, `u64`, `u128`, and [`UBig`].
pub trait UnsignedInt: Int {}

/// Actual operations implemented here.
///
/// Arithmetic operators follow the machine semantics of the type: division truncates toward
/// zero and divides by zero with a panic, and shifting right is arithmetic (floor).
pub trait Sealed:
  Clone +
  Eq + Ord + Hash + Default +
  Debug + Display +
  Add<Self, Output=Self> + AddAssign<Self> +
  Sub<Self, Output=Self> +
  Mul<Self, Output=Self> +
  Div<Self, Output=Self>
{
  /// Width of the machine type, or [`BIG`] for the arbitrary-precision stores.
  const BITS: u32;

  /// Whether the type can hold negative numbers.
  const SIGNED: bool;

  fn one() -> Self;

  fn is_zero(&self) -> bool;
  fn is_negative(&self) -> bool;

  /// Absolute value. Identity on unsigned types.
  fn abs(self) -> Self;

  /// Negate if `negative`. Unsigned types have no sign, so `negative` is ignored.
  fn apply_sign(self, negative: bool) -> Self;

  /// `self << n`, where shifting by `Self::BITS` or more gives 0.
  fn shl(self, n: u32) -> Self;

  /// `self >> n` (floor), where shifting by `Self::BITS` or more gives 0 or -1.
  fn shr(self, n: u32) -> Self;

  /// Wrapping conversion (same as `x as Self` on machine types).
  fn of_u64(x: u64) -> Self;

  /// Wrapping conversion (same as `x as Self` on machine types).
  fn of_i128(x: i128) -> Self;

  /// Wrapping conversion (same as `self as i128` on machine types).
  fn to_i128(&self) -> i128;

  /// Wrapping conversion from an arbitrary-precision integer: machine types keep the lowest
  /// `Self::BITS` bits in two's complement.
  fn of_integer(x: &Integer) -> Self;

  /// Exact conversion to an arbitrary-precision integer.
  fn to_integer(&self) -> Integer;

  /// Nearest `f64`.
  fn to_f64(&self) -> f64;

  /// Nearest `f32`.
  fn to_f32(&self) -> f32;

  /// Shift left by `sh` if `sh` is positive, right by `-sh` otherwise.
  #[inline]
  fn shift(self, sh: i64) -> Self {
    if sh >= 0 {
      self.shl(u32::try_from(sh).unwrap_or(u32::MAX))
    } else {
      self.shr(u32::try_from(sh.unsigned_abs()).unwrap_or(u32::MAX))
    }
  }

  /// `2^n`.
  #[inline]
  fn pow2(n: u32) -> Self {
    Self::one().shl(n)
  }
}

/// The [`Sealed::BITS`] of the arbitrary-precision stores.
pub const BIG: u32 = u32::MAX;

/// A type-generic version of the keyword `as`, for converting between [`Int`]s, with the same
/// wrapping semantics on machine types. Conversions between two machine types go through
/// `i128`; anything involving a [`Big`] or [`UBig`] goes through [`Integer`].
///
/// ```ignore
/// assert_eq!(cast::<i16, i32>(&1234i16), 1234i16 as i32);
/// assert_eq!(cast::<i128, i8>(&-0x1ff), -0x1ff as i8);
/// ```
#[inline]
pub fn cast<T: Int, U: Int>(x: &T) -> U {
  if const { T::BITS <= 128 && U::BITS <= 128 } {
    U::of_i128(x.to_i128())
  } else {
    U::of_integer(&x.to_integer())
  }
}
