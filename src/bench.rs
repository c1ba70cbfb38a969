//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::fixed::raw::Raw;
use crate::math::inverse_sqrt_kernel;
use crate::underlying::UnsignedInt;
use crate::vector::{normalize_kernel, normalize_inverse_sqrt_kernel};
use crate::{Big, Fixed, Shape, Vec3};

impl<
  const B: u32,
  const E: i32,
  N: UnsignedInt,
> Fixed<B, E, N> {
  /// The kernel of [`Fixed::inverse_sqrt`], always on the arbitrary-precision carrier.
  pub fn bench_inverse_sqrt_kernel<const B2: u32, const E2: i32, N2: UnsignedInt>(&self) -> Fixed<B2, E2, N2> {
    const { assert!(Shape::inverse_sqrt(Self::SHAPE).same_as(Fixed::<B2, E2, N2>::SHAPE)) }
    inverse_sqrt_kernel(&Raw::<Big>::of(self)).into_fixed()
  }
}

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Vec3<Fixed<B, E, N>> {
  /// The kernel of [`Vec3::normalize`], always on the arbitrary-precision carrier.
  pub fn bench_normalize_kernel<const B2: u32, const E2: i32, N2: crate::Int>(&self) -> Vec3<Fixed<B2, E2, N2>> {
    const { assert!(Shape::normalize(Fixed::<B, E, N>::SHAPE).same_as(Fixed::<B2, E2, N2>::SHAPE)) }
    let [x, y, z] = normalize_kernel([Raw::<Big>::of(&self.x), Raw::of(&self.y), Raw::of(&self.z)]);
    Vec3::new(x.into_fixed(), y.into_fixed(), z.into_fixed())
  }

  /// The kernel of [`Vec3::normalize_inverse_sqrt`], always on the arbitrary-precision carrier.
  pub fn bench_normalize_inverse_sqrt_kernel<const B2: u32, const E2: i32, N2: crate::Int>(&self) -> Vec3<Fixed<B2, E2, N2>> {
    const { assert!(Shape::normalize(Fixed::<B, E, N>::SHAPE).same_as(Fixed::<B2, E2, N2>::SHAPE)) }
    let v = [Raw::<Big>::of(&self.x), Raw::of(&self.y), Raw::of(&self.z)];
    let [x, y, z] = normalize_inverse_sqrt_kernel(v);
    Vec3::new(x.into_fixed(), y.into_fixed(), z.into_fixed())
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn add_8(x: Fixed<3, 2, i8>, y: Fixed<3, 1, i8>) -> Fixed<5, 1, i8> {
  x.add(&y)
}

#[unsafe(no_mangle)]
pub fn add_64(x: Fixed<40, 2, i64>, y: Fixed<40, -20, i64>) -> Fixed<63, -20, i64> {
  x.add(&y)
}

#[unsafe(no_mangle)]
pub fn mul_32(x: Fixed<20, -10, i32>, y: Fixed<20, 0, i32>) -> Fixed<40, -10, i64> {
  x.mul(&y)
}

#[unsafe(no_mangle)]
pub fn div_32(x: Fixed<20, -10, i32>, y: Fixed<20, 0, i32>) -> Fixed<40, -30, i64> {
  x.div(&y)
}

#[unsafe(no_mangle)]
pub fn inverse_sqrt_16(x: Fixed<16, -8, u16>) -> Fixed<24, -20, u32> {
  x.inverse_sqrt()
}

#[unsafe(no_mangle)]
pub fn normalize_15(v: Vec3<Fixed<15, 0, i16>>) -> Vec3<Fixed<15, -14, i16>> {
  v.normalize()
}
