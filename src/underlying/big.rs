//! The arbitrary-precision backing store. [`Big`] and [`UBig`] wrap [`malachite`] integers and
//! implement the same [`Int`] interface as the machine integers, so that shapes wider than 128
//! bits work with no changes anywhere else.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use malachite::{Integer, Natural};
use malachite::base::num::arithmetic::traits::Abs;
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::conversion::traits::{RoundingFrom, WrappingFrom};
use malachite::base::rounding_modes::RoundingMode;

use super::{Int, Sealed, SignedInt, UnsignedInt};

/// Signed storage for shapes with 128 or more bits of precision.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Big(Integer);

/// Unsigned storage for shapes with more than 128 bits of precision.
///
/// Subtracting a larger number from a smaller one panics, like it does on `u128` in debug builds.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct UBig(Natural);

/// Build an [`Integer`] out of the two 64-bit halves of `x`.
pub(crate) fn integer_of_i128(x: i128) -> Integer {
  let hi = Integer::from((x >> 64) as i64);
  let lo = Integer::from(x as u64);
  (hi << 64u32) + lo
}

/// Build an [`Integer`] out of the two 64-bit halves of `x`.
pub(crate) fn integer_of_u128(x: u128) -> Integer {
  Integer::from(natural_of_u128(x))
}

/// Build a [`Natural`] out of the two 64-bit halves of `x`.
pub(crate) fn natural_of_u128(x: u128) -> Natural {
  let hi = Natural::from((x >> 64) as u64);
  let lo = Natural::from(x as u64);
  (hi << 64u32) + lo
}

impl Big {
  /// The lowest 64 bits, in two's complement.
  pub fn wrapping_to_i64(&self) -> i64 {
    i64::wrapping_from(&self.0)
  }

  /// Nearest `f64` (infinite if out of range).
  pub fn to_f64(&self) -> f64 {
    f64::rounding_from(&self.0, RoundingMode::Nearest).0
  }
}

impl UBig {
  /// The lowest 64 bits.
  pub fn wrapping_to_u64(&self) -> u64 {
    u64::wrapping_from(&self.0)
  }

  /// Nearest `f64` (infinite if out of range).
  pub fn to_f64(&self) -> f64 {
    f64::rounding_from(&self.0, RoundingMode::Nearest).0
  }
}

impl From<i128> for Big {
  fn from(x: i128) -> Self { Big(integer_of_i128(x)) }
}

impl From<u128> for UBig {
  fn from(x: u128) -> Self { UBig(natural_of_u128(x)) }
}

impl From<Integer> for Big {
  fn from(x: Integer) -> Self { Big(x) }
}

impl From<Big> for Integer {
  fn from(x: Big) -> Self { x.0 }
}

impl From<Natural> for UBig {
  fn from(x: Natural) -> Self { UBig(x) }
}

impl From<UBig> for Natural {
  fn from(x: UBig) -> Self { x.0 }
}

impl Default for Big {
  fn default() -> Self { Big(Integer::ZERO) }
}

impl Default for UBig {
  fn default() -> Self { UBig(Natural::ZERO) }
}

impl fmt::Display for Big {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

impl fmt::Display for UBig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

/// Forward the arithmetic operators to the wrapped type.
macro_rules! forward_ops {
  ($t:ident) => {
    impl Add for $t {
      type Output = $t;
      #[inline]
      fn add(self, rhs: $t) -> $t { $t(self.0 + rhs.0) }
    }

    impl AddAssign for $t {
      #[inline]
      fn add_assign(&mut self, rhs: $t) { self.0 += rhs.0 }
    }

    impl Sub for $t {
      type Output = $t;
      #[inline]
      fn sub(self, rhs: $t) -> $t { $t(self.0 - rhs.0) }
    }

    impl Mul for $t {
      type Output = $t;
      #[inline]
      fn mul(self, rhs: $t) -> $t { $t(self.0 * rhs.0) }
    }

    impl Div for $t {
      type Output = $t;
      #[inline]
      fn div(self, rhs: $t) -> $t { $t(self.0 / rhs.0) }
    }
  }
}

forward_ops!{Big}
forward_ops!{UBig}

impl Neg for Big {
  type Output = Big;
  #[inline]
  fn neg(self) -> Big { Big(-self.0) }
}

impl Int for Big {}
impl SignedInt for Big {}
impl Sealed for Big {
  const BITS: u32 = super::BIG;
  const SIGNED: bool = true;

  fn one() -> Self { Big(Integer::ONE) }

  fn is_zero(&self) -> bool { self.0 == Integer::ZERO }

  fn is_negative(&self) -> bool { self.0 < Integer::ZERO }

  fn abs(self) -> Self { Big(self.0.abs()) }

  fn apply_sign(self, negative: bool) -> Self {
    if negative { -self } else { self }
  }

  fn shl(self, n: u32) -> Self { Big(self.0 << n) }

  fn shr(self, n: u32) -> Self { Big(self.0 >> n) }

  fn of_u64(x: u64) -> Self { Big(Integer::from(x)) }

  fn of_i128(x: i128) -> Self { Big(integer_of_i128(x)) }

  fn to_i128(&self) -> i128 {
    let lo = u64::wrapping_from(&self.0);
    let hi = i64::wrapping_from(&(&self.0 >> 64u32));
    (i128::from(hi) << 64) | i128::from(lo)
  }

  fn of_integer(x: &Integer) -> Self { Big(x.clone()) }

  fn to_integer(&self) -> Integer { self.0.clone() }

  fn to_f64(&self) -> f64 { Big::to_f64(self) }

  fn to_f32(&self) -> f32 { f32::rounding_from(&self.0, RoundingMode::Nearest).0 }
}

impl Int for UBig {}
impl UnsignedInt for UBig {}
impl Sealed for UBig {
  const BITS: u32 = super::BIG;
  const SIGNED: bool = false;

  fn one() -> Self { UBig(Natural::ONE) }

  fn is_zero(&self) -> bool { self.0 == Natural::ZERO }

  fn is_negative(&self) -> bool { false }

  fn abs(self) -> Self { self }

  fn apply_sign(self, _negative: bool) -> Self { self }

  fn shl(self, n: u32) -> Self { UBig(self.0 << n) }

  fn shr(self, n: u32) -> Self { UBig(self.0 >> n) }

  fn of_u64(x: u64) -> Self { UBig(Natural::from(x)) }

  fn of_i128(x: i128) -> Self { UBig(natural_of_u128(x as u128)) }

  fn to_i128(&self) -> i128 {
    let lo = u64::wrapping_from(&self.0);
    let hi = u64::wrapping_from(&(&self.0 >> 64u32));
    ((u128::from(hi) << 64) | u128::from(lo)) as i128
  }

  /// An unbounded unsigned store cannot wrap, so a negative `x` keeps its magnitude.
  fn of_integer(x: &Integer) -> Self { UBig(x.unsigned_abs_ref().clone()) }

  fn to_integer(&self) -> Integer { Integer::from(self.0.clone()) }

  fn to_f64(&self) -> f64 { UBig::to_f64(self) }

  fn to_f32(&self) -> f32 { f32::rounding_from(&self.0, RoundingMode::Nearest).0 }
}
