use super::*;

use crate::Shape;

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// The [`Shape`] of this type.
  ///
  /// Evaluating it checks the type parameters at compile time: `B` must be at least 1, and `N`
  /// must be the storage [`Shape::storage_bits`] picks for `B`.
  pub const SHAPE: Shape = {
    assert!(B >= 1, "A fixed-point number needs at least 1 bit of precision");
    let shape = Shape::new(B, E, N::SIGNED);
    assert!(
      shape.storage_bits() == N::BITS,
      "The storage type has to be the smallest one holding B bits: i8/i16/i32/i64/i128 (B < 8, \
      16, 32, 64, 128) or Big if signed, u8/u16/u32/u64/u128 (B <= 8, 16, 32, 64, 128) or UBig \
      if unsigned.",
    );
    shape
  };

  /// Construct a value from its `num`, i.e. `num * 2^E`.
  ///
  /// `num` has to be in range (`|num| < 2^B`); this is only checked in debug builds.
  #[inline]
  pub fn from_num(num: N) -> Self {
    let _ = Self::SHAPE;
    debug_assert!(
      Self::SHAPE.contains(&num.to_integer()),
      "{num} is out of range for {}", Self::SHAPE,
    );
    Self(num)
  }

  /// The integer payload: `self` is `num * 2^E`.
  #[inline]
  pub fn num(&self) -> &N {
    &self.0
  }

  /// As [`Self::num`], by value.
  #[inline]
  pub fn into_num(self) -> N {
    self.0
  }

  /// `0`.
  #[inline]
  pub fn zero() -> Self {
    let _ = Self::SHAPE;
    Self(N::default())
  }

  /// The smallest positive value, `2^E`.
  #[inline]
  pub fn epsilon() -> Self {
    let _ = Self::SHAPE;
    Self(N::one())
  }

  /// The largest value, `(2^B - 1) * 2^E`.
  #[inline]
  pub fn max_value() -> Self {
    let half = N::pow2(Self::SHAPE.bits - 1);
    Self(half.clone() - N::one() + half)
  }

  /// The smallest value: `0` if unsigned, `-(2^B - 1) * 2^E` if signed.
  #[inline]
  pub fn min_value() -> Self {
    Self::max_value().neg_if_signed()
  }

  #[inline]
  pub fn is_zero(&self) -> bool {
    self.0.is_zero()
  }

  #[inline]
  pub fn is_negative(&self) -> bool {
    self.0.is_negative()
  }

  /// Negate if signed; zero if unsigned.
  fn neg_if_signed(self) -> Self {
    if N::SIGNED { Self(self.0.apply_sign(true)) } else { Self::zero() }
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use static_float::Fixed;
  /// pub fn foo() -> static_float::Shape { Fixed::<0, 0, i8>::SHAPE }
  /// ```
  #[allow(dead_code)]
  fn shape_fail_no_bits() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// pub fn foo() -> static_float::Shape { Fixed::<8, 0, i8>::SHAPE }
  /// ```
  #[allow(dead_code)]
  fn shape_fail_i8_many() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// pub fn foo() -> static_float::Shape { Fixed::<7, 0, i16>::SHAPE }
  /// ```
  #[allow(dead_code)]
  fn shape_fail_i16_few() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// pub fn foo() -> static_float::Shape { Fixed::<9, 0, u8>::SHAPE }
  /// ```
  #[allow(dead_code)]
  fn shape_fail_u8_many() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// pub fn foo() -> static_float::Shape { Fixed::<127, 0, static_float::Big>::SHAPE }
  /// ```
  #[allow(dead_code)]
  fn shape_fail_big_few() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// pub fn foo() -> static_float::Shape { Fixed::<128, 0, i128>::SHAPE }
  /// ```
  #[allow(dead_code)]
  fn shape_fail_i128_many() {}

  /// ```compile_fail
  /// use static_float::Fixed;
  /// let _ = Fixed::<16, 0, i16>::zero();
  /// ```
  #[allow(dead_code)]
  fn zero_fail_i16_many() {}
}
