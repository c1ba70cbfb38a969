use super::*;

use crate::error::{Result, raise};
use crate::underlying::{SignedInt, UnsignedInt, cast};
use crate::Shape;

impl<const B: u32, const E: i32, N: SignedInt>
core::ops::Neg for Fixed<B, E, N> {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self {
    Self(-self.0)
  }
}

impl<const B: u32, const E: i32, N: SignedInt>
core::ops::Neg for &Fixed<B, E, N> {
  type Output = Fixed<B, E, N>;

  #[inline]
  fn neg(self) -> Self::Output {
    Fixed(-self.0.clone())
  }
}

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// The same value in the unsigned shape `(B, E)`, whose storage is `U`.
  ///
  /// Raises an [`ErrorKind::Sign`](crate::ErrorKind) if `self` is negative (in checked mode).
  ///
  /// ```
  /// # use static_float::{Fixed, ErrorKind};
  /// let a = Fixed::<7, -2, i8>::from(5);
  /// let b: Fixed<7, -2, u8> = a.unsign().unwrap();
  /// assert_eq!(b.to_f64(), 5.);
  /// assert_eq!((-a).unsign::<u8>().unwrap_err().kind(), ErrorKind::Sign);
  /// ```
  #[track_caller]
  pub fn unsign<U: UnsignedInt>(&self) -> Result<Fixed<B, E, U>> {
    if crate::CHECKED && self.is_negative() {
      return Err(raise!(Sign, "cannot make {self:?} unsigned"))
    }
    Ok(self.unsign_unchecked())
  }

  /// As [`Self::unsign`], without the sign check. A negative `self` gives a meaningless value.
  #[inline]
  pub fn unsign_unchecked<U: UnsignedInt>(&self) -> Fixed<B, E, U> {
    check_unsigned::<B, E, N, U>();
    Fixed(cast::<N, U>(&self.0))
  }

  /// `|self|`, in the unsigned shape `(B, E)`.
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<7, -2, i8>::from_num(-100);
  /// let b: Fixed<7, -2, u8> = a.abs();
  /// assert_eq!(*b.num(), 100);
  /// ```
  #[inline]
  pub fn abs<U: UnsignedInt>(&self) -> Fixed<B, E, U> {
    check_unsigned::<B, E, N, U>();
    Fixed(cast::<N, U>(&self.0.clone().abs()))
  }

  /// `self * self`, exactly, in the unsigned shape `(2B, 2E)` ([`Shape::square`]). Squares are
  /// never negative, so unlike `unsign(self * self)` this cannot fail.
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<3, 1, i8>::from(-6);
  /// let b: Fixed<6, 2, u8> = a.sq();
  /// assert_eq!(b.to_f64(), 36.);
  /// ```
  pub fn sq<const B2: u32, const E2: i32, U: UnsignedInt>(&self) -> Fixed<B2, E2, U> {
    const {
      assert!(
        Shape::square(Self::SHAPE).same_as(Fixed::<B2, E2, U>::SHAPE),
        "The result of a square must have the shape given by Shape::square",
      )
    }
    let abs = cast::<N, U>(&self.0.clone().abs());
    Fixed(abs.clone() * abs)
  }
}

/// Compile-time check that `U` is the unsigned storage for `(B, E)`.
#[inline]
fn check_unsigned<const B: u32, const E: i32, N: crate::Int, U: crate::Int>() {
  const {
    assert!(
      Shape::unsigned(Fixed::<B, E, N>::SHAPE).same_as(Fixed::<B, E, U>::SHAPE),
      "The unsigned counterpart must have the same precision and exponent",
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Big, ErrorKind, UBig};
  use proptest::prelude::*;

  #[test]
  fn neg() {
    let a = Fixed::<5, -1, i8>::from_num(-13);
    assert_eq!(*(-a).num(), 13);
    assert_eq!(*(-&a).num(), 13);
    let b = Fixed::<200, 0, Big>::max_value();
    assert_eq!(-&b, Fixed::<200, 0, Big>::min_value());
  }

  #[test]
  fn unsign() {
    let a = Fixed::<7, 0, i8>::from(100);
    assert_eq!(*a.unsign::<u8>().unwrap().num(), 100);
    assert_eq!(*Fixed::<7, 0, i8>::zero().unsign::<u8>().unwrap().num(), 0);
    if crate::CHECKED {
      let e = Fixed::<7, 0, i8>::from(-1).unsign::<u8>().unwrap_err();
      assert_eq!(e.kind(), ErrorKind::Sign);
    }
  }

  #[test]
  fn unsign_wide() {
    let a = Fixed::<127, -100, i128>::max_value();
    let b = a.unsign::<u128>().unwrap();
    assert_eq!(*b.num(), i128::MAX as u128);
    let c = Fixed::<140, 0, Big>::max_value();
    assert_eq!(c.unsign::<UBig>().unwrap().to_f64(), 2f64.powi(140));
    if crate::CHECKED {
      let e = Fixed::<140, 0, Big>::min_value().unsign::<UBig>().unwrap_err();
      assert_eq!(e.kind(), ErrorKind::Sign);
    }
  }

  #[test]
  fn abs() {
    let a: Fixed<15, 3, u16> = Fixed::<15, 3, i16>::min_value().abs();
    assert_eq!(a, Fixed::<15, 3, u16>::from_num(0x7fff));
    let b: Fixed<15, 3, u16> = Fixed::<15, 3, i16>::from(80).abs();
    assert_eq!(b.to_f64(), 80.);
  }

  #[test]
  fn sq_extremes() {
    let a: Fixed<14, 0, u16> = Fixed::<7, 0, i8>::min_value().sq();
    assert_eq!(*a.num(), 127 * 127);
    let b: Fixed<254, -2, UBig> = Fixed::<127, -1, i128>::min_value().sq();
    assert_eq!(cast::<UBig, Big>(b.num()), cast::<i128, Big>(&i128::MAX) * cast::<i128, Big>(&i128::MAX));
  }

  #[test]
  fn sq_is_unsign_of_product_exhaustive() {
    for x in Fixed::<5, -2, i8>::cases_exhaustive() {
      let p: Fixed<10, -4, i16> = x.mul(&x);
      let s: Fixed<10, -4, u16> = x.sq();
      assert_eq!(s, p.unsign::<u16>().unwrap(), "{x:?}");
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn sq_is_unsign_of_product(x in Fixed::<40, -20, i64>::cases_proptest()) {
      let p: Fixed<80, -40, i128> = x.mul(&x);
      let s: Fixed<80, -40, u128> = x.sq();
      prop_assert_eq!(s, p.unsign::<u128>().unwrap());
    }

    #[test]
    fn unsign_keeps_value(x in Fixed::<20, 5, i32>::cases_proptest()) {
      if !x.is_negative() {
        prop_assert_eq!(x.unsign::<u32>().unwrap(), x);
      } else if crate::CHECKED {
        prop_assert_eq!(x.unsign::<u32>().unwrap_err().kind(), ErrorKind::Sign);
      }
    }
  }
}

mod tests_compile_fail {
  /// ```compile_fail
  /// use static_float::Fixed;
  /// let a = Fixed::<3, 1, u8>::from(6);
  /// let b = -a;
  /// ```
  #[allow(dead_code)]
  fn neg_fail_unsigned() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// let a = Fixed::<3, 1, i8>::from(-6);
  /// let b: Fixed<6, 1, u8> = a.sq();
  /// ```
  #[allow(dead_code)]
  fn sq_fail_shape() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// let a = Fixed::<8, 0, i16>::from(6);
  /// let b = a.unsign::<u16>();
  /// ```
  #[allow(dead_code)]
  fn unsign_fail_storage() {}
}
