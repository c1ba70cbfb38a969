use malachite::Integer;
use malachite::base::num::conversion::traits::WrappingFrom;

use super::{Int, Sealed, SignedInt, UnsignedInt};
use super::big::{integer_of_i128, integer_of_u128};

/// Implementation of the functions that don't depend on signedness.
macro_rules! impl_common {
  ($int:ty) => {
    const BITS: u32 = <$int>::BITS;

    #[inline]
    fn one() -> Self { 1 }

    #[inline]
    fn is_zero(&self) -> bool { *self == 0 }

    #[inline]
    fn shl(self, n: u32) -> Self {
      if n >= Self::BITS { 0 } else { self << n }
    }

    #[inline]
    fn of_u64(x: u64) -> Self { x as $int }

    #[inline]
    fn of_i128(x: i128) -> Self { x as $int }

    #[inline]
    fn to_i128(&self) -> i128 { *self as i128 }

    fn of_integer(x: &Integer) -> Self {
      let lo = u64::wrapping_from(x);
      let hi = u64::wrapping_from(&(x >> 64u32));
      ((u128::from(hi) << 64) | u128::from(lo)) as $int
    }

    #[inline]
    fn to_f64(&self) -> f64 { *self as f64 }

    #[inline]
    fn to_f32(&self) -> f32 { *self as f32 }
  }
}

macro_rules! impl_signed {
  ($($int:ty),*) => {$(
    impl Int for $int {}
    impl SignedInt for $int {}
    impl Sealed for $int {
      impl_common!{$int}

      const SIGNED: bool = true;

      #[inline]
      fn is_negative(&self) -> bool { *self < 0 }

      #[inline]
      fn abs(self) -> Self { self.wrapping_abs() }

      #[inline]
      fn apply_sign(self, negative: bool) -> Self {
        if negative { self.wrapping_neg() } else { self }
      }

      #[inline]
      fn shr(self, n: u32) -> Self {
        self >> n.min(Self::BITS - 1)
      }

      fn to_integer(&self) -> Integer { integer_of_i128(*self as i128) }
    }
  )*}
}

macro_rules! impl_unsigned {
  ($($int:ty),*) => {$(
    impl Int for $int {}
    impl UnsignedInt for $int {}
    impl Sealed for $int {
      impl_common!{$int}

      const SIGNED: bool = false;

      #[inline]
      fn is_negative(&self) -> bool { false }

      #[inline]
      fn abs(self) -> Self { self }

      #[inline]
      fn apply_sign(self, _negative: bool) -> Self { self }

      #[inline]
      fn shr(self, n: u32) -> Self {
        if n >= Self::BITS { 0 } else { self >> n }
      }

      fn to_integer(&self) -> Integer { integer_of_u128(*self as u128) }
    }
  )*}
}

impl_signed!{i8, i16, i32, i64, i128}
impl_unsigned!{u8, u16, u32, u64, u128}
