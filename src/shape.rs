//! The rules that give the shape of the result of every operation.

use core::fmt;

/// The shape of a fixed-point type: `bits` of precision (excluding the sign), binary exponent
/// `exp`, and signedness. A value of shape `(B, E)` is an integer `num` with `|num| < 2^B`,
/// standing for `num * 2^E`.
///
/// Each associated function below is one rule of the result-type table. They are `const`, so
/// that [`Fixed`](crate::Fixed) can check the result type of an operation against them at
/// compile time. A result is signed if either operand is signed.
///
/// | op        | bits                                | exp             |
/// |-----------|-------------------------------------|-----------------|
/// | add/sub   | `max(B1+E1, B2+E2) - min(E1,E2) + 1`| `min(E1, E2)`   |
/// | mul       | `B1 + B2`                           | `E1 + E2`       |
/// | div       | `B1 + B2`                           | `E1 - E2 - B2`  |
/// | dot3      | `B1 + B2 + 2`                       | `E1 + E2`       |
/// | cross     | `B1 + B2 + 1`                       | `E1 + E2`       |
/// | normalize | `B`                                 | `1 - B`         |
/// | square    | `2B` (unsigned)                     | `2E`            |
///
/// ```
/// # use static_float::Shape;
/// let a = Shape::new(3, 2, true);
/// let b = Shape::new(3, 1, true);
/// assert_eq!(Shape::add_sub(a, b), Shape::new(5, 1, true));
/// assert_eq!(Shape::mul(a, b), Shape::new(6, 3, true));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Shape {
  pub bits: u32,
  pub exp: i32,
  pub signed: bool,
}

impl Shape {
  #[inline]
  pub const fn new(bits: u32, exp: i32, signed: bool) -> Self {
    Self { bits, exp, signed }
  }

  /// As `==`, but usable in `const` contexts.
  pub const fn same_as(self, other: Self) -> bool {
    self.bits == other.bits && self.exp == other.exp && self.signed == other.signed
  }

  /// `B + E`: values of this shape have magnitude less than `2^(B+E)`.
  pub const fn top(self) -> i64 {
    self.bits as i64 + self.exp as i64
  }

  /// Width of the smallest storage integer for this shape: 8, 16, 32, 64, 128, or
  /// [`u32::MAX`] for the arbitrary-precision stores. Signed storage needs one extra bit for
  /// the sign.
  pub const fn storage_bits(self) -> u32 {
    let bits = if self.signed { self.bits as u64 + 1 } else { self.bits as u64 };
    if bits <= 8 { 8 }
    else if bits <= 16 { 16 }
    else if bits <= 32 { 32 }
    else if bits <= 64 { 64 }
    else if bits <= 128 { 128 }
    else { u32::MAX }
  }

  /// Result of `a + b` and `a - b`. The extra bit holds the carry (or borrow).
  pub const fn add_sub(a: Self, b: Self) -> Self {
    let exp = if a.exp < b.exp { a.exp } else { b.exp };
    let top = if a.top() > b.top() { a.top() } else { b.top() };
    Self::new(checked_bits(top - exp as i64 + 1), exp, a.signed || b.signed)
  }

  /// How far each operand of [`Shape::add_sub`] (and of a comparison) is shifted left so that
  /// both have the exponent of the result.
  pub const fn align(a: Self, b: Self) -> (u32, u32) {
    let exp = if a.exp < b.exp { a.exp } else { b.exp };
    ((a.exp as i64 - exp as i64) as u32, (b.exp as i64 - exp as i64) as u32)
  }

  /// Result of `a * b`, which is always exact.
  pub const fn mul(a: Self, b: Self) -> Self {
    Self::new(a.bits + b.bits, checked_exp(a.exp as i64 + b.exp as i64), a.signed || b.signed)
  }

  /// Result of `a / b`. The numerator is shifted left by `b.bits` before the (truncating)
  /// integer division.
  pub const fn div(a: Self, b: Self) -> Self {
    Self::new(
      a.bits + b.bits,
      checked_exp(a.exp as i64 - b.exp as i64 - b.bits as i64),
      a.signed || b.signed,
    )
  }

  /// Result of the dot product of two 3-vectors. Two extra bits bound the sum of three
  /// products.
  pub const fn dot3(a: Self, b: Self) -> Self {
    let p = Self::mul(a, b);
    Self::new(p.bits + 2, p.exp, p.signed)
  }

  /// Result of the cross product of two 3-vectors. One extra bit bounds the difference of two
  /// products.
  pub const fn cross(a: Self, b: Self) -> Self {
    let p = Self::mul(a, b);
    Self::new(p.bits + 1, p.exp, p.signed)
  }

  /// Components of a normalised vector: same precision, range `[-2, 2)`.
  pub const fn normalize(a: Self) -> Self {
    Self::new(a.bits, checked_exp(1 - a.bits as i64), a.signed)
  }

  /// Result of squaring, which is never negative.
  pub const fn square(a: Self) -> Self {
    Self::new(2 * a.bits, checked_exp(2 * a.exp as i64), false)
  }

  /// The unsigned shape with the same precision and exponent.
  pub const fn unsigned(a: Self) -> Self {
    Self::new(a.bits, a.exp, false)
  }

  /// Working precision of the inverse square root: `B`, rounded up to make `B + E` even.
  pub const fn inverse_sqrt_bb(a: Self) -> u32 {
    if a.top() % 2 == 0 { a.bits } else { a.bits + 1 }
  }

  /// Half of [`Shape::inverse_sqrt_bb`], rounded up.
  pub const fn inverse_sqrt_bbh(a: Self) -> u32 {
    Self::inverse_sqrt_bb(a).div_ceil(2)
  }

  /// Result of the inverse square root of an unsigned `a`.
  pub const fn inverse_sqrt(a: Self) -> Self {
    let bb = Self::inverse_sqrt_bb(a);
    let bbh = Self::inverse_sqrt_bbh(a);
    let half = (bb as i64 + a.exp as i64) / 2;
    Self::new(bbh + bb, checked_exp(-(bb as i64) - half), false)
  }

  /// Whether every value of `src` can be assigned to `self` without losing its most
  /// significant bits: `self` reaches at least as high, and is signed if `src` is.
  pub const fn encloses(self, src: Self) -> bool {
    self.top() >= src.top() && (self.signed || !src.signed)
  }

  /// Whether `num` is a valid payload for this shape (`|num| < 2^bits`, and not negative
  /// if unsigned).
  pub(crate) fn contains(self, num: &malachite::Integer) -> bool {
    use malachite::base::num::logic::traits::SignificantBits;
    (self.signed || *num >= 0) && num.significant_bits() <= u64::from(self.bits)
  }
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.signed { "signed" } else { "unsigned" };
    write!(f, "{sign} ({}, {})", self.bits, self.exp)
  }
}

const fn checked_bits(x: i64) -> u32 {
  assert!(0 <= x && x <= u32::MAX as i64, "fixed-point precision out of range");
  x as u32
}

const fn checked_exp(x: i64) -> i32 {
  assert!(i32::MIN as i64 <= x && x <= i32::MAX as i64, "fixed-point exponent out of range");
  x as i32
}

#[cfg(test)]
mod tests {
  use super::*;

  fn s(bits: u32, exp: i32) -> Shape {
    Shape::new(bits, exp, true)
  }

  #[test]
  fn add_sub() {
    assert_eq!(Shape::add_sub(s(3, 2), s(3, 1)), s(5, 1));
    assert_eq!(Shape::add_sub(s(3, 2), s(5, 1)), s(6, 1));
    assert_eq!(Shape::add_sub(s(1, 0), s(1, 0)), s(2, 0));
    assert_eq!(Shape::add_sub(s(4, -4), s(2, 10)), s(17, -4));
    assert_eq!(Shape::align(s(3, 2), s(3, 1)), (1, 0));
    assert_eq!(Shape::align(s(4, -4), s(2, 10)), (0, 14));
  }

  #[test]
  fn mixed_signedness() {
    let u = Shape::new(3, 0, false);
    assert_eq!(Shape::add_sub(u, u), Shape::new(4, 0, false));
    assert_eq!(Shape::mul(u, s(3, 0)), s(6, 0));
    assert_eq!(Shape::mul(u, u), Shape::new(6, 0, false));
  }

  #[test]
  fn mul_div() {
    assert_eq!(Shape::mul(s(3, 2), s(3, 1)), s(6, 3));
    assert_eq!(Shape::div(s(4, 0), s(2, 1)), s(6, -3));
    assert_eq!(Shape::div(s(5, 1), s(3, 1)), s(8, -3));
    assert_eq!(Shape::div(s(5, 1), s(3, 2)), s(8, -4));
    assert_eq!(Shape::div(s(3, 2), s(1, 1)), s(4, 0));
    assert_eq!(Shape::mul(s(6, -3), s(2, 1)), s(8, -2));
  }

  #[test]
  fn vector_rules() {
    assert_eq!(Shape::dot3(s(2, 0), s(3, 0)), s(7, 0));
    assert_eq!(Shape::dot3(s(2, 0), s(2, 1)), s(6, 1));
    assert_eq!(Shape::cross(s(2, 0), s(3, 0)), s(6, 0));
    assert_eq!(Shape::cross(s(2, 0), s(2, 1)), s(5, 1));
    assert_eq!(Shape::normalize(s(6, -5)), s(6, -5));
    assert_eq!(Shape::normalize(s(30, 0)), s(30, -29));
  }

  #[test]
  fn square() {
    assert_eq!(Shape::square(s(1, 0)), Shape::new(2, 0, false));
    assert_eq!(Shape::square(s(7, -3)), Shape::new(14, -6, false));
  }

  #[test]
  fn inverse_sqrt() {
    let u = |bits, exp| Shape::new(bits, exp, false);
    // B + E even
    assert_eq!(Shape::inverse_sqrt_bb(u(4, -4)), 4);
    assert_eq!(Shape::inverse_sqrt_bbh(u(4, -4)), 2);
    assert_eq!(Shape::inverse_sqrt(u(4, -4)), u(6, -4));
    // B + E odd
    assert_eq!(Shape::inverse_sqrt_bb(u(5, -4)), 6);
    assert_eq!(Shape::inverse_sqrt_bbh(u(5, -4)), 3);
    assert_eq!(Shape::inverse_sqrt(u(5, -4)), u(9, -7));
    assert_eq!(Shape::inverse_sqrt(u(7, -5)), u(11, -8));
    // Negative B + E
    assert_eq!(Shape::inverse_sqrt(u(3, -9)), u(5, 0));
  }

  #[test]
  fn encloses() {
    assert!(s(3, 1).encloses(s(3, 0)));
    assert!(s(7, -8).encloses(s(9, -10)));
    assert!(!s(7, -8).encloses(s(9, -8)));
    assert!(s(4, 0).encloses(Shape::new(4, 0, false)));
    assert!(!Shape::new(4, 0, false).encloses(s(4, 0)));
  }

  #[test]
  fn storage_bits() {
    assert_eq!(s(7, 0).storage_bits(), 8);
    assert_eq!(s(8, 0).storage_bits(), 16);
    assert_eq!(Shape::new(8, 0, false).storage_bits(), 8);
    assert_eq!(s(127, 0).storage_bits(), 128);
    assert_eq!(s(128, 0).storage_bits(), u32::MAX);
    assert_eq!(Shape::new(128, 0, false).storage_bits(), 128);
    assert_eq!(Shape::new(129, 0, false).storage_bits(), u32::MAX);
  }

  #[test]
  fn contains() {
    use malachite::Integer;
    assert!(s(3, 0).contains(&Integer::from(-7)));
    assert!(!s(3, 0).contains(&Integer::from(8)));
    assert!(!Shape::new(3, 0, false).contains(&Integer::from(-1)));
    assert!(Shape::new(3, 0, false).contains(&Integer::from(0)));
  }
}
