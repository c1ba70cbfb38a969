use super::*;

use core::ops::{AddAssign, Shr};
use crate::fixed::convert::rescale;

/// Accumulate a value of any shape into `self`, in place. `rhs` is shifted by `E2 - E` (bits
/// below `2^E` are dropped) and added to `num`. There is no widening: the caller is
/// responsible for `self` having enough headroom for the sum.
///
/// ```
/// # use static_float::Fixed;
/// let mut acc = Fixed::<4, 0, i8>::zero();
/// let one = Fixed::<1, 0, i8>::from(1);
/// for _ in 0 .. 4 {
///   acc += one;
/// }
/// assert_eq!(acc.to_f64(), 4.);
/// ```
impl<const B: u32, const E: i32, N: crate::Int, const B2: u32, const E2: i32, N2: crate::Int>
AddAssign<Fixed<B2, E2, N2>> for Fixed<B, E, N> {
  #[inline]
  fn add_assign(&mut self, rhs: Fixed<B2, E2, N2>) {
    *self += &rhs
  }
}

impl<const B: u32, const E: i32, N: crate::Int, const B2: u32, const E2: i32, N2: crate::Int>
AddAssign<&Fixed<B2, E2, N2>> for Fixed<B, E, N> {
  #[inline]
  fn add_assign(&mut self, rhs: &Fixed<B2, E2, N2>) {
    self.0 += rescale::<N2, N>(&rhs.0, E2 as i64 - E as i64);
    debug_assert!(
      Self::SHAPE.contains(&self.0.to_integer()),
      "accumulator {:?} overflowed its shape {}", self, Self::SHAPE,
    );
  }
}

/// `num >> n`, keeping the shape: divides by `2^n`, rounding toward negative infinity.
impl<const B: u32, const E: i32, N: crate::Int>
Shr<u32> for Fixed<B, E, N> {
  type Output = Self;

  #[inline]
  fn shr(self, n: u32) -> Self {
    Self(self.0.shr(n))
  }
}
