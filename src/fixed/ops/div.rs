use super::*;

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// `self / rhs`, truncated toward zero. The result has shape [`Shape::div`] of the operands'
  /// shapes: `B + B2` bits, exponent `E - E2 - B2`.
  ///
  /// Panics if `rhs` is zero, like integer division. See [`Self::checked_div`].
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<4, 0, i8>::from(10);
  /// let b = Fixed::<2, 1, i8>::from(2);
  /// let c: Fixed<6, -3, i8> = a.div(&b);
  /// assert_eq!(c.to_f64(), 5.);
  /// ```
  pub fn div<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Fixed<B2, E2, N2>) -> Fixed<B3, E3, N3> {
    check_shape!(
      div(Self, Fixed<B2, E2, N2>) == Fixed<B3, E3, N3>,
      "The result of a division must have the shape given by Shape::div",
    );
    // The dividend `num` is below 2^B, so shifted by B2 it still fits in B + B2 bits.
    Fixed(cast::<N, N3>(&self.0).shl(B2) / cast::<N2, N3>(&rhs.0))
  }

  /// As [`Self::div`], but returns `None` instead of panicking if `rhs` is zero.
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<4, 0, i8>::from(10);
  /// let z = Fixed::<2, 1, i8>::zero();
  /// assert_eq!(a.checked_div::<2, 1, i8, 6, -3, i8>(&z), None);
  /// ```
  pub fn checked_div<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Fixed<B2, E2, N2>) -> Option<Fixed<B3, E3, N3>> {
    if rhs.is_zero() {
      None
    } else {
      Some(self.div(rhs))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Big, UBig};
  use malachite::base::num::arithmetic::traits::PowerOf2;
  use malachite::base::num::basic::traits::Zero;
  use malachite::rational::Rational;

  /// The quotient is truncated: less than one epsilon of the result away from the exact one,
  /// toward zero.
  fn truncated_quotient(a: Rational, b: Rational, r: Rational, shape: Shape) -> bool {
    let exact = a / b;
    let err = if exact >= Rational::ZERO { &exact - &r } else { &r - &exact };
    err >= Rational::ZERO && err < Rational::power_of_2(i64::from(shape.exp))
  }

  #[test]
  fn scenarios() {
    let a = Fixed::<4, 0, i8>::from(10);
    let two = Fixed::<2, 1, i8>::from(2);
    let c: Fixed<6, -3, i8> = a.div(&two);
    assert_eq!(c.to_f64(), 5.);
    let d: Fixed<8, -2, i16> = c.mul(&two);
    assert_eq!(d.to_f64(), 10.);

    let x = Fixed::<5, 1, i8>::from(24);
    let y: Fixed<8, -3, i16> = x.div(&Fixed::<3, 1, i8>::from(10));
    assert!((y.to_f64() - 2.4).abs() < 0.125);
    let z: Fixed<8, -4, i16> = x.div(&Fixed::<3, 2, i8>::from(12));
    assert_eq!(z.to_f64(), 2.);

    let w: Fixed<4, 0, i8> = Fixed::<3, 2, i8>::from(12).div(&Fixed::<1, 1, i8>::from(2));
    assert_eq!(w.to_f64(), 6.);
  }

  #[test]
  fn truncates_toward_zero() {
    let a = Fixed::<3, 0, i8>::from(7);
    let b = Fixed::<2, 0, i8>::from(-3);
    // -7/3 = -2.333…, in steps of 1/4
    let c: Fixed<5, -2, i8> = a.div(&b);
    assert_eq!(c.to_f64(), -2.25);
    let d: Fixed<5, -2, i8> = (-a).div(&b);
    assert_eq!(d.to_f64(), 2.25);
  }

  #[test]
  #[should_panic]
  fn by_zero() {
    let _: Fixed<6, -3, i8> = Fixed::<4, 0, i8>::from(1).div(&Fixed::<2, 1, i8>::zero());
  }

  mk_tests!{|a, b| a.checked_div(b), truncated_quotient}

  test_exhaustive!{s_3_2_by_s_3_1, Fixed<3, 2, i8>, Fixed<3, 1, i8>, Fixed<6, -2, i8>}
  test_exhaustive!{s_4_0_by_u_3_0, Fixed<4, 0, i8>, Fixed<3, 0, u8>, Fixed<7, -3, i8>}
  test_exhaustive!{u_5_m2_by_u_3_1, Fixed<5, -2, u8>, Fixed<3, 1, u8>, Fixed<8, -6, u8>}
  test_exhaustive!{s_5_1_by_s_5_m1, Fixed<5, 1, i8>, Fixed<5, -1, i8>, Fixed<10, -3, i16>}
  test_proptest!{s_20_0_by_s_20_m5, Fixed<20, 0, i32>, Fixed<20, -5, i32>, Fixed<40, -15, i64>}
  test_proptest!{s_60_0_by_s_60_0, Fixed<60, 0, i64>, Fixed<60, 0, i64>, Fixed<120, -60, i128>}
  test_proptest!{s_100_0_by_s_40_0, Fixed<100, 0, i128>, Fixed<40, 0, i64>, Fixed<140, -40, Big>}
  test_proptest!{u_100_0_by_u_30_0, Fixed<100, 0, u128>, Fixed<30, 0, u32>, Fixed<130, -30, UBig>}
}
