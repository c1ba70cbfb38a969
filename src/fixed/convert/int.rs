use super::*;

/// Implement `From<$int>`: `num` is `x` shifted by `-E` (left if `E` is negative). Unchecked,
/// like [`Fixed::from_fixed`]: bits below `2^E` are dropped (rounding toward negative infinity)
/// and bits above the range of the shape are lost.
macro_rules! from_int {
  ($($int:ty),*) => {$(
    impl<const B: u32, const E: i32, N: crate::Int>
    From<$int> for Fixed<B, E, N> {
      #[inline]
      fn from(x: $int) -> Self {
        let _ = Self::SHAPE;
        Self(rescale(&i128::from(x), -(E as i64)))
      }
    }
  )*}
}

from_int!{i8, i16, i32, i64, u8, u16, u32, u64}
