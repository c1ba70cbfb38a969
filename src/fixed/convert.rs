use super::*;

use crate::Big;
use crate::error::{Result, raise};
use crate::underlying::cast;

/// Conversions from native integers.
mod int;

/// Conversions from and to IEEE 754 floats.
mod float;

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// Convert a value of any shape into `Self`, shifting `num` by `E2 - E` (left if positive).
  ///
  /// This is unchecked: if `x` is out of the range of `Self`, its most significant bits are
  /// lost. Bits below `2^E` are always dropped (rounding toward negative infinity). See
  /// [`Self::try_from_fixed`] for a checked version, and [`Self::assign`] for one that is
  /// checked at compile time.
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<9, -8, i16>::from(1);
  /// assert_eq!(Fixed::<7, -8, i8>::from_fixed(&a), Fixed::<7, -8, i8>::zero());
  /// let b = Fixed::<5, -2, i8>::from_num(-7);  // -1.75
  /// assert_eq!(Fixed::<5, 0, i8>::from_fixed(&b).to_f64(), -2.);
  /// ```
  pub fn from_fixed<const B2: u32, const E2: i32, N2: crate::Int>(x: &Fixed<B2, E2, N2>) -> Self {
    let _ = Self::SHAPE;
    Self(rescale(&x.0, E2 as i64 - E as i64))
  }

  /// As [`Self::from_fixed`], but in checked mode raises an
  /// [`ErrorKind::Sign`](crate::ErrorKind) if `x` is negative and `Self` is unsigned, and an
  /// [`ErrorKind::Overflow`](crate::ErrorKind) if the result does not fit in `Self`.
  #[track_caller]
  pub fn try_from_fixed<const B2: u32, const E2: i32, N2: crate::Int>(x: &Fixed<B2, E2, N2>) -> Result<Self> {
    if crate::CHECKED {
      if !N::SIGNED && x.is_negative() {
        return Err(raise!(Sign, "cannot convert {x:?} to {}", Self::SHAPE))
      }
      let num: Big = rescale(&x.0, E2 as i64 - E as i64);
      if !Self::SHAPE.contains(&num.into()) {
        return Err(raise!(Overflow, "{x:?} does not fit in {}", Self::SHAPE))
      }
    }
    Ok(Self::from_fixed(x))
  }

  /// Assign a value of another shape to `self`. Only compiles if the range of `Self` encloses
  /// the range of the source, i.e. if `B + E >= B2 + E2` (and `Self` is signed if the source
  /// is).
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let mut a = Fixed::<3, 1, i8>::zero();
  /// a.assign(&Fixed::<3, 0, i8>::from(3));
  /// assert_eq!(a.to_f64(), 2.);
  /// ```
  ///
  /// ```compile_fail
  /// # use static_float::Fixed;
  /// let mut a = Fixed::<7, -8, i8>::zero();
  /// a.assign(&Fixed::<9, -8, i16>::from(1));
  /// ```
  pub fn assign<const B2: u32, const E2: i32, N2: crate::Int>(&mut self, src: &Fixed<B2, E2, N2>) {
    const {
      assert!(
        Self::SHAPE.encloses(Fixed::<B2, E2, N2>::SHAPE),
        "Cannot assign: the destination shape does not enclose the range of the source",
      )
    }
    *self = Self::from_fixed(src)
  }

  /// Convert `self` into a shape that encloses its range. As [`Self::assign`], this only
  /// compiles if `B2 + E2 >= B + E`.
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<3, 0, i8>::from(-5);
  /// let b: Fixed<20, -10, i32> = a.widen();
  /// assert_eq!(b.to_f64(), -5.);
  /// ```
  pub fn widen<const B2: u32, const E2: i32, N2: crate::Int>(&self) -> Fixed<B2, E2, N2> {
    let mut r = Fixed::zero();
    r.assign(self);
    r
  }
}

/// Convert `x` into another storage, shifting it left by `sh` (right if negative). Shifting
/// left happens in the destination storage and shifting right in the source, so that no bits
/// are lost that would fit in the result.
pub(crate) fn rescale<T: crate::Int, U: crate::Int>(x: &T, sh: i64) -> U {
  if sh >= 0 {
    cast::<T, U>(x).shift(sh)
  } else {
    cast::<T, U>(&x.clone().shift(sh))
  }
}

impl<const B: u32, const E: i32, N: crate::Int>
From<Fixed<B, E, N>> for f64 {
  #[inline]
  fn from(x: Fixed<B, E, N>) -> f64 {
    x.to_f64()
  }
}

impl<const B: u32, const E: i32, N: crate::Int>
From<Fixed<B, E, N>> for f32 {
  #[inline]
  fn from(x: Fixed<B, E, N>) -> f32 {
    x.to_f32()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ErrorKind, Shape};

  #[test]
  fn from_fixed_drops_high_bits() {
    // 1 in (9, -8) is num 256, which has 9 bits; (7, -8) keeps the lowest 8 of its i8.
    let a = Fixed::<9, -8, i16>::from(1);
    assert_eq!(*Fixed::<7, -8, i8>::from_fixed(&a).num(), 0);
  }

  #[test]
  fn from_fixed_rescales() {
    let a = Fixed::<3, 0, i8>::from(3);
    assert_eq!(*Fixed::<3, 1, i8>::from_fixed(&a).num(), 1);
    assert_eq!(*Fixed::<6, -3, i8>::from_fixed(&a).num(), 24);
    let b = Fixed::<6, -3, i8>::from_num(-20);  // -2.5
    assert_eq!(*Fixed::<3, 0, i8>::from_fixed(&b).num(), -3);
  }

  #[test]
  fn from_fixed_big() {
    let a = Fixed::<200, -150, Big>::from(3);
    let b = Fixed::<7, 0, i8>::from_fixed(&a);
    assert_eq!(*b.num(), 3);
    let c = Fixed::<130, -128, Big>::from_fixed(&b);
    assert_eq!(c.to_f64(), 3.);
  }

  #[test]
  fn try_from_fixed() {
    let a = Fixed::<9, -8, i16>::from(1);
    let r = Fixed::<7, -8, i8>::try_from_fixed(&a);
    if crate::CHECKED {
      assert_eq!(r.unwrap_err().kind(), ErrorKind::Overflow);
    }
    let b = Fixed::<9, -8, i16>::from_num(100);
    assert_eq!(*Fixed::<7, -8, i8>::try_from_fixed(&b).unwrap().num(), 100);
    let c = Fixed::<4, 0, i8>::from(-3);
    if crate::CHECKED {
      assert_eq!(Fixed::<4, 0, u8>::try_from_fixed(&c).unwrap_err().kind(), ErrorKind::Sign);
    }
  }

  #[test]
  fn try_from_fixed_sign() {
    let tiny = Fixed::<4, -2, i8>::from_num(-1);
    let huge = Fixed::<20, 0, i32>::from(-100_000);
    let pos = Fixed::<4, 0, i8>::from(5);
    if crate::CHECKED {
      assert_eq!(Fixed::<4, 0, u8>::try_from_fixed(&tiny).unwrap_err().kind(), ErrorKind::Sign);
      assert_eq!(Fixed::<4, 0, u8>::try_from_fixed(&huge).unwrap_err().kind(), ErrorKind::Sign);
      assert_eq!(Fixed::<3, 0, u8>::try_from_fixed(&pos).unwrap_err().kind(), ErrorKind::Overflow);
    }
    assert_eq!(Fixed::<4, 0, u8>::try_from_fixed(&pos).unwrap().to_f64(), 5.);
    assert_eq!(Fixed::<4, 0, i8>::try_from_fixed(&tiny).unwrap().to_f64(), -1.);
  }

  #[test]
  fn assign() {
    let mut a = Fixed::<3, 1, i8>::zero();
    a.assign(&Fixed::<3, 0, i8>::from(3));
    assert_eq!(*a.num(), 1);
    assert_eq!(Fixed::<3, 1, i8>::SHAPE, Shape::new(3, 1, true));
    let mut b = Fixed::<8, 0, i16>::zero();
    b.assign(&Fixed::<8, 0, u8>::from(255));
    assert_eq!(b.to_f64(), 255.);
  }

  #[test]
  fn into_float() {
    let a = Fixed::<6, -3, i8>::from_num(-20);
    assert_eq!(f64::from(a), -2.5);
    assert_eq!(f32::from(a), -2.5);
  }
}

mod tests_compile_fail {
  /// ```compile_fail
  /// use static_float::Fixed;
  /// let mut a = Fixed::<8, 0, u8>::zero();
  /// a.assign(&Fixed::<3, 0, i8>::from(1));
  /// ```
  #[allow(dead_code)]
  fn assign_fail_signed_to_unsigned() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// let mut a = Fixed::<3, 0, i8>::zero();
  /// a.assign(&Fixed::<2, 2, i8>::from(4));
  /// ```
  #[allow(dead_code)]
  fn assign_fail_range() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// let a = Fixed::<10, 0, i16>::from(4);
  /// let b: Fixed<12, -3, i16> = a.widen();
  /// ```
  #[allow(dead_code)]
  fn widen_fail_range() {}
}
