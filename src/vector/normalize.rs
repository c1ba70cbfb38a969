use super::*;

use crate::fixed::raw::Raw;
use crate::math::{MAX_I128_BITS, inverse_sqrt_kernel, inverse_sqrt_width};
use crate::underlying::SignedInt;
use crate::Big;

/// Bits of the widest intermediate of [`normalize_kernel`] for components of shape `a`:
/// `s² * |v|²`, with `s` and the components in `B + 1` bits.
pub(crate) const fn normalize_width(a: Shape) -> u32 {
  4 * a.bits + 6
}

/// Bits of the widest intermediate of [`normalize_inverse_sqrt_kernel`] for components of
/// shape `a`, which is that of the inverse square root of `|v|²`.
pub(crate) const fn normalize_inverse_sqrt_width(a: Shape) -> u32 {
  inverse_sqrt_width(sum_of_squares(a))
}

/// Shape of `x² + y² + z²`.
const fn sum_of_squares(a: Shape) -> Shape {
  let sq = Shape::square(a);
  Shape::add_sub(Shape::add_sub(sq, sq), sq)
}

/// `v / |v|` by bisection, of shape [`Shape::normalize`]. The zero vector maps to itself.
///
/// The components are read at exponent `-B` (so in `(-1, 1)`) and doubled together until one of
/// them has magnitude at least `1/2`; this does not change the direction, and puts `|v|` in
/// `[1/2, √3)`. The scale `s = 1/|v|` is then searched in the unsigned shape `(B+1, -B)`, which
/// covers `[0, 2)`: `B + 1` halvings of the interval settle all its bits, keeping the upper end
/// where `s² |v|² >= 1`. The components times that upper end are finally narrowed toward zero
/// into `(B, 1-B)`.
pub(crate) fn normalize_kernel<W: SignedInt>(v: [Raw<W>; 3]) -> [Raw<W>; 3] {
  let shape = v[0].shape;
  let out = Shape::normalize(shape);
  if v.iter().all(Raw::is_zero) {
    return v.map(|c| c.reinterpret(out))
  }

  let b = shape.bits;
  let exp = -(b as i32);
  let mut n = v.map(|c| c.reinterpret(Shape::new(b + 1, exp, shape.signed)));
  let half = W::pow2(b - 1);
  let mut shift = 0_u32;
  while n.iter().all(|c| c.num.clone().abs() < half) {
    for c in &mut n {
      c.num = c.num.clone().shl(1);
    }
    shift += 1;
  }

  let len_sq = n[0].square().add(&n[1].square()).add(&n[2].square());
  let scale = Shape::new(b + 1, exp, false);
  let one = Raw::new(Shape::new(1, 0, false), W::one());
  let mut s_min = Raw::new(scale, W::default());
  let mut s_max = Raw::new(scale, W::pow2(b) - W::one() + W::pow2(b));
  for _ in 0 ..= b {
    let s_half = Raw::new(scale, (s_min.num.clone() + s_max.num.clone()).shr(1));
    if s_half.square().mul(&len_sq).cmp_value(&one).is_lt() {
      s_min = s_half;
    } else {
      s_max = s_half;
    }
  }

  tracing::trace!(%shape, shift, scale = %s_max.num, "normalized by bisection");
  n.map(|c| c.mul(&s_max).narrow_toward_zero(out))
}

/// `v / |v|`, with `1/|v|` from [`inverse_sqrt_kernel`] instead of a search, of shape
/// [`Shape::normalize`]. The zero vector maps to itself.
pub(crate) fn normalize_inverse_sqrt_kernel<W: SignedInt>(v: [Raw<W>; 3]) -> [Raw<W>; 3] {
  let out = Shape::normalize(v[0].shape);
  let len_sq = v[0].square().add(&v[1].square()).add(&v[2].square());
  let inv_len = inverse_sqrt_kernel(&len_sq);
  v.map(|c| c.mul(&inv_len).narrow_toward_zero(out))
}

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Vec3<Fixed<B, E, N>> {
  /// `self / |self|`, in the shape [`Shape::normalize`]: the same precision, in `(-2, 2)`.
  ///
  /// This is computed without any approximation: each component is within one epsilon of the
  /// exact value, rounded toward zero, and the result is reproducible bit for bit. The zero
  /// vector has no direction; it is returned as is.
  ///
  /// ```
  /// # use static_float::{Fixed, Vec3};
  /// let v = Vec3::<Fixed<30, 0, i32>>::splat(Fixed::from(1));
  /// let n: Vec3<Fixed<30, -29, i32>> = v.normalize();
  /// let expected = 1. / 3f64.sqrt();
  /// assert!((n.x.to_f64() - expected).abs() <= 2f64.powi(-29));
  /// ```
  ///
  /// ```compile_fail
  /// # use static_float::{Fixed, Vec3};
  /// let v = Vec3::<Fixed<30, 0, i32>>::splat(Fixed::from(1));
  /// let n: Vec3<Fixed<30, -30, i32>> = v.normalize();
  /// ```
  pub fn normalize<const B2: u32, const E2: i32, N2: crate::Int>(&self) -> Vec3<Fixed<B2, E2, N2>> {
    check_normalize::<B, E, N, B2, E2, N2>();
    if const { normalize_width(Fixed::<B, E, N>::SHAPE) <= MAX_I128_BITS } {
      from_kernel(normalize_kernel(self.to_raw::<i128>()))
    } else {
      from_kernel(normalize_kernel(self.to_raw::<Big>()))
    }
  }

  /// As [`Self::normalize`], but computed as `self * (1/√|self|²)` with
  /// [`Fixed::inverse_sqrt`]. The inverse square root rounds down, so the result is within one
  /// epsilon (or very slightly more) of the exact value, toward zero.
  ///
  /// ```
  /// # use static_float::{Fixed, Vec3};
  /// let v = Vec3::<Fixed<10, -3, i16>>::from([3, 0, 4].map(Fixed::from));
  /// let n: Vec3<Fixed<10, -9, i16>> = v.normalize_inverse_sqrt();
  /// assert_eq!(n.to_f64(), Vec3::new(0.6, 0., 0.8).map(|c| (c * 512f64).floor() / 512.));
  /// ```
  pub fn normalize_inverse_sqrt<const B2: u32, const E2: i32, N2: crate::Int>(
    &self,
  ) -> Vec3<Fixed<B2, E2, N2>> {
    check_normalize::<B, E, N, B2, E2, N2>();
    if const { normalize_inverse_sqrt_width(Fixed::<B, E, N>::SHAPE) <= MAX_I128_BITS } {
      from_kernel(normalize_inverse_sqrt_kernel(self.to_raw::<i128>()))
    } else {
      from_kernel(normalize_inverse_sqrt_kernel(self.to_raw::<Big>()))
    }
  }

  fn to_raw<W: SignedInt>(&self) -> [Raw<W>; 3] {
    [Raw::of(&self.x), Raw::of(&self.y), Raw::of(&self.z)]
  }
}

fn from_kernel<W: SignedInt, const B: u32, const E: i32, N: crate::Int>(
  [x, y, z]: [Raw<W>; 3],
) -> Vec3<Fixed<B, E, N>> {
  Vec3::new(x.into_fixed(), y.into_fixed(), z.into_fixed())
}

#[inline]
fn check_normalize<
  const B: u32, const E: i32, N: crate::Int,
  const B2: u32, const E2: i32, N2: crate::Int,
>() {
  const {
    assert!(
      Shape::normalize(Fixed::<B, E, N>::SHAPE).same_as(Fixed::<B2, E2, N2>::SHAPE),
      "The result of a normalisation must have the shape given by Shape::normalize",
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  /// Bound on `|n| - 1`, in epsilons, for a result whose components are each within one
  /// epsilon of the exact unit vector: the error vector is then shorter than √3 epsilons. One
  /// epsilon is not reachable in general, with any rounding of the components: `(-29, -26, -26)
  /// / 4` in `Fixed<5, -2>` normalizes to a length 1.54 epsilons short of 1.
  const LENGTH_EPSILONS: f64 = 1.7320508075688772;

  /// Each component within `eps_components` epsilons of the `f64` reference, and the length
  /// within `eps_components * LENGTH_EPSILONS` epsilons of 1.
  fn is_close<
    const B: u32, const E: i32, N: crate::Int,
    const B2: u32, const E2: i32, N2: crate::Int,
  >(
    v: &Vec3<Fixed<B, E, N>>,
    n: &Vec3<Fixed<B2, E2, N2>>,
    eps_components: f64,
  ) -> bool {
    let reference = v.to_f64().normalize();
    let n = n.to_f64();
    let eps = Fixed::<B2, E2, N2>::epsilon().to_f64();
    (0 .. 3).all(|i| (n[i] - reference[i]).abs() <= eps_components * eps)
      && (n.length() - 1.).abs() <= eps_components * LENGTH_EPSILONS * eps
  }

  fn vec<const B: u32, const E: i32, N: crate::Int>(x: f64, y: f64, z: f64) -> Vec3<Fixed<B, E, N>> {
    Vec3::new(x, y, z).map(|c| Fixed::from_f64_unchecked(c))
  }

  #[test]
  fn zero() {
    let z: Vec3<Fixed<6, -5, i8>> = Vec3::<Fixed<6, 0, i8>>::default().normalize();
    assert!(z.is_zero());
    let z: Vec3<Fixed<6, -5, i8>> = Vec3::<Fixed<6, 0, i8>>::default().normalize_inverse_sqrt();
    assert!(z.is_zero());
    let z: Vec3<Fixed<140, -139, Big>> = Vec3::<Fixed<140, 3, Big>>::default().normalize();
    assert!(z.is_zero());
  }

  #[test]
  fn known_vectors() {
    let v = vec::<6, -5, i8>(1.978475, 1., 1.);
    let n: Vec3<Fixed<6, -5, i8>> = v.normalize();
    assert!(is_close(&v, &n, 1.), "{n:?}");
    let v = vec::<30, 0, i32>(1., 1., 1.);
    let n: Vec3<Fixed<30, -29, i32>> = v.normalize();
    assert!(is_close(&v, &n, 1.), "{n:?}");
    let v = vec::<30, -21, i32>(-3.8147e-05, -0.00025034, -0.000166893);
    let n: Vec3<Fixed<30, -29, i32>> = v.normalize();
    assert!(is_close(&v, &n, 1.), "{n:?}");
  }

  #[test]
  fn axes() {
    let v = vec::<7, 2, i8>(0., -8., 0.);
    let n: Vec3<Fixed<7, -6, i8>> = v.normalize();
    // 1 is one past the largest value, so the result is 1 - eps
    assert_eq!(n.to_f64(), Vec3::new(0., -(1. - 2f64.powi(-6)), 0.));
    let n: Vec3<Fixed<7, -6, i8>> = v.normalize_inverse_sqrt();
    assert!((n.y.to_f64() + 1.).abs() <= 2f64.powi(-6));
  }

  #[test]
  fn length_short_of_one() {
    let v = vec::<5, -2, i8>(-29. / 4., -26. / 4., -26. / 4.);
    let n: Vec3<Fixed<5, -4, i8>> = v.normalize();
    let eps = 2f64.powi(-4);
    let short = 1. - n.to_f64().length();
    assert!(short > eps, "{n:?}");
    assert!(short <= LENGTH_EPSILONS * eps, "{n:?}");
    assert!(is_close(&v, &n, 1.), "{n:?}");
  }

  #[test]
  fn odd_symmetry() {
    let v = vec::<12, -4, i16>(3.25, -100.5, 7.);
    let n: Vec3<Fixed<12, -11, i16>> = v.normalize();
    let m: Vec3<Fixed<12, -11, i16>> = (-v).normalize();
    assert_eq!(-n, m);
  }

  #[test]
  fn exhaustive_small() {
    type T = Fixed<5, -2, i8>;
    let all: Vec<T> = T::cases_exhaustive().collect();
    for (i, x) in all.iter().enumerate() {
      for (j, y) in all.iter().enumerate().skip(i) {
        for z in &all[j ..] {
          let v = Vec3::new(*x, *y, *z);
          if !v.is_zero() {
            let n: Vec3<Fixed<5, -4, i8>> = v.normalize();
            assert!(is_close(&v, &n, 1.), "{v:?} ↦ {n:?}");
          }
        }
      }
    }
  }

  #[test]
  fn carrier() {
    assert!(normalize_width(Fixed::<30, 0, i32>::SHAPE) <= MAX_I128_BITS);
    assert!(normalize_width(Fixed::<31, 0, i32>::SHAPE) > MAX_I128_BITS);
    assert!(normalize_inverse_sqrt_width(Fixed::<10, 0, i16>::SHAPE) <= MAX_I128_BITS);
    assert!(normalize_inverse_sqrt_width(Fixed::<11, 0, i16>::SHAPE) > MAX_I128_BITS);
  }

  macro_rules! test_proptest {
    ($name:ident, $t:ty, $r:ty, $method:ident, $tolerance:expr) => {
      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
        #[test]
        fn $name(
          x in <$t>::cases_proptest(),
          y in <$t>::cases_proptest(),
          z in <$t>::cases_proptest(),
        ) {
          let v = Vec3::new(x, y, z);
          let n: Vec3<$r> = v.$method();
          if v.is_zero() {
            prop_assert!(n.is_zero());
          } else {
            prop_assert!(is_close(&v, &n, $tolerance), "{:?} ↦ {:?}", v, n);
          }
        }
      }
    };
  }

  test_proptest!{bisection_15_0, Fixed<15, 0, i16>, Fixed<15, -14, i16>, normalize, 1.}
  test_proptest!{bisection_30_m21, Fixed<30, -21, i32>, Fixed<30, -29, i32>, normalize, 1.}
  test_proptest!{bisection_40_5, Fixed<40, 5, i64>, Fixed<40, -39, i64>, normalize, 1.}
  test_proptest!{inverse_sqrt_8_m3, Fixed<8, -3, i16>, Fixed<8, -7, i16>, normalize_inverse_sqrt, 2.}
  test_proptest!{inverse_sqrt_20_0, Fixed<20, 0, i32>, Fixed<20, -19, i32>, normalize_inverse_sqrt, 2.}
}
