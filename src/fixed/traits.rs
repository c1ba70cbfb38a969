use super::*;

use core::cmp::Ordering;

use crate::Shape;

// The `Int` trait has bounds indirectly, via `Sealed`, so the derive macros would add spurious
// `N: Clone` etc. bounds. Because of that we just implement explicitly here.

impl<const B: u32, const E: i32, N: crate::Int>
Clone for Fixed<B, E, N> {
  #[inline]
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<const B: u32, const E: i32, N: crate::Int + Copy>
Copy for Fixed<B, E, N> {}

impl<const B: u32, const E: i32, N: crate::Int>
Default for Fixed<B, E, N> {
  #[inline]
  fn default() -> Self {
    Self::zero()
  }
}

impl<const B: u32, const E: i32, N: crate::Int>
core::hash::Hash for Fixed<B, E, N> {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// Compare `self` with a value of any shape, by shifting both to the smaller exponent as in
  /// [`Shape::add_sub`]. This is computed in `i128` if the aligned values fit, else in
  /// [`Integer`](malachite::Integer).
  pub(crate) fn cmp_aligned<const B2: u32, const E2: i32, N2: crate::Int>(
    &self,
    other: &Fixed<B2, E2, N2>,
  ) -> Ordering {
    let (sh1, sh2) = Shape::align(Self::SHAPE, Fixed::<B2, E2, N2>::SHAPE);
    if const { Shape::add_sub(Self::SHAPE, Fixed::<B2, E2, N2>::SHAPE).bits <= 127 } {
      let a = self.0.to_i128() << sh1;
      let b = other.0.to_i128() << sh2;
      a.cmp(&b)
    } else {
      let a = self.0.to_integer() << sh1;
      let b = other.0.to_integer() << sh2;
      a.cmp(&b)
    }
  }
}

impl<const B: u32, const E: i32, N: crate::Int, const B2: u32, const E2: i32, N2: crate::Int>
PartialEq<Fixed<B2, E2, N2>> for Fixed<B, E, N> {
  #[inline]
  fn eq(&self, other: &Fixed<B2, E2, N2>) -> bool {
    self.cmp_aligned(other) == Ordering::Equal
  }
}

impl<const B: u32, const E: i32, N: crate::Int>
Eq for Fixed<B, E, N> {}

impl<const B: u32, const E: i32, N: crate::Int, const B2: u32, const E2: i32, N2: crate::Int>
PartialOrd<Fixed<B2, E2, N2>> for Fixed<B, E, N> {
  #[inline]
  fn partial_cmp(&self, other: &Fixed<B2, E2, N2>) -> Option<Ordering> {
    Some(self.cmp_aligned(other))
  }
}

impl<const B: u32, const E: i32, N: crate::Int>
Ord for Fixed<B, E, N> {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.cmp(&other.0)
  }
}
