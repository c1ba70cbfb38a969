use super::*;

use crate::underlying::UnsignedInt;

/// Bits of the widest intermediate of [`inverse_sqrt_kernel`] for an input of shape `x`: the
/// product of the estimate and the Newton correction.
pub(crate) const fn inverse_sqrt_width(x: Shape) -> u32 {
  let bb = Shape::inverse_sqrt_bb(x);
  let bbh = Shape::inverse_sqrt_bbh(x);
  4 * bb + 3 * bbh + 1
}

/// `1/√x`, rounded down, of shape [`Shape::inverse_sqrt`]. Zero maps to the largest value of
/// that shape.
///
/// Let `BB` and `BBH` be [`Shape::inverse_sqrt_bb`] and [`Shape::inverse_sqrt_bbh`]. Reading
/// `x.num` at exponent `-BB` gives `x' = x * 2^-(BB+E)` in `[2^-BB, 1)`, and since `BB + E` is
/// even,
///
///   1/√x = 1/√x' * 2^-((BB+E)/2)
///
/// so it is enough to find `y = 1/√x'`, which is in `(1, 2^(BB/2)]`, at exponent `-BB`: the
/// output is the same `num` at exponent `-BB - (BB+E)/2`. The estimate lives in shape
/// `(BBH+BB, -BB)` and starts at `1`. Each Newton step
///
///   y ← y * (3/2 - x'/2 * y²)
///
/// is computed exactly, with `x'/2` as `x.num` read at exponent `-BB-1`, and only the final
/// product is truncated back to exponent `-BB`. Starting below `1/√x'`, the estimate grows
/// until truncation stops it, within an ulp or two of the answer. A last pass then moves it to
/// the exact floor, i.e. the largest `y` with `y² * x.num <= 2^(3BB)`.
pub(crate) fn inverse_sqrt_kernel<W: SignedInt>(x: &Raw<W>) -> Raw<W> {
  let out = Shape::inverse_sqrt(x.shape);
  let max = W::pow2(out.bits - 1) - W::one() + W::pow2(out.bits - 1);
  if x.is_zero() {
    return Raw::new(out, max)
  }

  let bb = Shape::inverse_sqrt_bb(x.shape);
  let bbh = Shape::inverse_sqrt_bbh(x.shape);
  let exp = -(bb as i32);
  let work = Shape::new(bbh + bb, exp, false);

  let x_half = x.clone().reinterpret(Shape::new(bb, exp - 1, false));
  let three_halves = Raw::new(work, W::of_u64(3).shl(bb - 1));
  let mut y = Raw::new(work, W::pow2(bb));
  let mut iterations = 0_u32;
  loop {
    let t = x_half.mul(&y).mul(&y);
    let next = y.mul(&three_halves.sub(&t)).rescale(work);
    iterations += 1;
    if next.num <= y.num {
      break
    }
    y = next;
  }

  let one = W::pow2(3 * bb);
  let fits = |y: &W| y.clone() * y.clone() * x.num.clone() <= one;
  while !fits(&y.num) {
    y.num = y.num - W::one();
  }
  while y.num < max && fits(&(y.num.clone() + W::one())) {
    y.num += W::one();
  }

  tracing::trace!(shape = %x.shape, iterations, "inverse square root converged");
  y.reinterpret(out)
}

impl<
  const B: u32,
  const E: i32,
  N: UnsignedInt,
> Fixed<B, E, N> {
  /// `1/√self`, rounded down, so within one epsilon of the exact value. The result has shape
  /// [`Shape::inverse_sqrt`]: about one and a half times the precision of `self`, and an
  /// exponent to match.
  ///
  /// The inverse square root of zero is undefined; it returns the largest value of the result
  /// type.
  ///
  /// ```
  /// # use static_float::Fixed;
  /// let x = Fixed::<4, -4, u8>::from_f64(0.25).unwrap();
  /// let y: Fixed<6, -4, u8> = x.inverse_sqrt();
  /// assert_eq!(y.to_f64(), 2.);
  ///
  /// let x = Fixed::<5, -4, u8>::from_f64(0.5).unwrap();
  /// let y: Fixed<9, -7, u16> = x.inverse_sqrt();
  /// assert!((y.to_f64() - 0.5f64.sqrt().recip()).abs() <= 2f64.powi(-7));
  /// ```
  ///
  /// ```compile_fail
  /// # use static_float::Fixed;
  /// let x = Fixed::<4, -4, u8>::from_f64(0.25).unwrap();
  /// let y: Fixed<8, -4, u8> = x.inverse_sqrt();
  /// ```
  pub fn inverse_sqrt<const B2: u32, const E2: i32, N2: UnsignedInt>(&self) -> Fixed<B2, E2, N2> {
    const {
      assert!(
        Shape::inverse_sqrt(Self::SHAPE).same_as(Fixed::<B2, E2, N2>::SHAPE),
        "The result of an inverse square root must have the shape given by Shape::inverse_sqrt",
      )
    }
    if const { inverse_sqrt_width(Self::SHAPE) <= MAX_I128_BITS } {
      inverse_sqrt_kernel(&Raw::<i128>::of(self)).into_fixed()
    } else {
      inverse_sqrt_kernel(&Raw::<Big>::of(self)).into_fixed()
    }
  }
}
