use super::*;

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// `self * rhs`, exactly. The result has shape [`Shape::mul`] of the operands' shapes: the
  /// precisions and the exponents add up.
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<3, 2, i8>::from(12);
  /// let b = Fixed::<3, 1, i8>::from(10);
  /// let c: Fixed<6, 3, i8> = a.mul(&b);
  /// assert_eq!(c.to_f64(), 120.);
  /// ```
  ///
  /// ```compile_fail
  /// # use static_float::Fixed;
  /// let a = Fixed::<3, 2, i8>::from(12);
  /// let b = Fixed::<3, 1, i8>::from(10);
  /// let c: Fixed<6, 2, i8> = a.mul(&b);
  /// ```
  pub fn mul<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Fixed<B2, E2, N2>) -> Fixed<B3, E3, N3> {
    check_shape!(
      mul(Self, Fixed<B2, E2, N2>) == Fixed<B3, E3, N3>,
      "The result of a multiplication must have the shape given by Shape::mul",
    );
    Fixed(cast::<N, N3>(&self.0) * cast::<N2, N3>(&rhs.0))
  }
}
