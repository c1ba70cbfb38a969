use super::*;

use core::fmt;

impl<const B: u32, const E: i32, N: crate::Int>
fmt::Debug for Fixed<B, E, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Fixed<{B}, {E}>({})", self.0)
  }
}

/// Prints the nearest `f64`.
impl<const B: u32, const E: i32, N: crate::Int>
fmt::Display for Fixed<B, E, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.to_f64(), f)
  }
}
