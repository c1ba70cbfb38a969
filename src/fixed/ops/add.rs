use super::*;

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// `self + rhs`, exactly. Both operands are shifted to the smaller exponent and added in the
  /// storage of the result, whose shape is [`Shape::add_sub`] of the operands' shapes (any
  /// other result type is a compile error).
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<3, 2, i8>::from(12);
  /// let b = Fixed::<5, 1, i8>::from(24);
  /// let c: Fixed<6, 1, i8> = a.add(&b);
  /// assert_eq!(c.to_f64(), 36.);
  /// ```
  ///
  /// ```compile_fail
  /// # use static_float::Fixed;
  /// let a = Fixed::<3, 2, i8>::from(12);
  /// let b = Fixed::<5, 1, i8>::from(24);
  /// let c: Fixed<5, 1, i8> = a.add(&b);
  /// ```
  pub fn add<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Fixed<B2, E2, N2>) -> Fixed<B3, E3, N3> {
    check_shape!(
      add_sub(Self, Fixed<B2, E2, N2>) == Fixed<B3, E3, N3>,
      "The result of an addition must have the shape given by Shape::add_sub",
    );
    let (a, b) = Self::aligned::<B2, E2, N2, N3>(&self.0, &rhs.0);
    Fixed(a + b)
  }

  /// `self - rhs`, exactly. As [`Self::add`].
  ///
  /// If both operands are unsigned, so is the result, and `self` must not be less than `rhs`.
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let a = Fixed::<3, 2, i8>::from(12);
  /// let b = Fixed::<3, 1, i8>::from(10);
  /// let c: Fixed<5, 1, i8> = b.sub(&a);
  /// assert_eq!(c.to_f64(), -2.);
  /// ```
  pub fn sub<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Fixed<B2, E2, N2>) -> Fixed<B3, E3, N3> {
    check_shape!(
      add_sub(Self, Fixed<B2, E2, N2>) == Fixed<B3, E3, N3>,
      "The result of a subtraction must have the shape given by Shape::add_sub",
    );
    let (a, b) = Self::aligned::<B2, E2, N2, N3>(&self.0, &rhs.0);
    Fixed(a - b)
  }

  /// Both `num`s in the calculation width `N3`, shifted to the same exponent.
  #[inline]
  fn aligned<const B2: u32, const E2: i32, N2: crate::Int, N3: crate::Int>(
    a: &N,
    b: &N2,
  ) -> (N3, N3) {
    let (sh1, sh2) = Shape::align(Self::SHAPE, Fixed::<B2, E2, N2>::SHAPE);
    (cast::<N, N3>(a).shl(sh1), cast::<N2, N3>(b).shl(sh2))
  }
}
