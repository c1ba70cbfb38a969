use super::*;

use core::cmp::Ordering;

use crate::Shape;
use crate::underlying::{Sealed, SignedInt, cast};

/// A fixed-point value whose [`Shape`] is only known at run time, held in a carrier integer
/// `W` wide enough for every intermediate of a kernel (`i128`, or [`Big`](crate::Big) past 127
/// bits).
///
/// The numeric algorithms chain many operations whose intermediate shapes depend on the input
/// shape. Spelling each of them as a [`Fixed`] type is not possible on stable Rust, so the
/// kernels run on `Raw` instead: every operation applies the same [`Shape`] rule as its
/// `Fixed` counterpart, and the kernel converts back with [`Raw::into_fixed`] at the end, where
/// the output shape is again a type.
///
/// The carrier is always signed, also for unsigned shapes; `shape.signed` is what counts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Raw<W: SignedInt> {
  pub shape: Shape,
  pub num: W,
}

impl<W: SignedInt> Raw<W> {
  /// `num * 2^shape.exp`. `num` has to be in range for `shape` (checked in debug builds).
  #[inline]
  pub fn new(shape: Shape, num: W) -> Self {
    debug_assert!(
      shape.contains(&num.to_integer()),
      "{num} is out of range for {shape} in a kernel",
    );
    Self { shape, num }
  }

  /// `x`, in the carrier `W`.
  #[inline]
  pub fn of<const B: u32, const E: i32, N: crate::Int>(x: &Fixed<B, E, N>) -> Self {
    Self { shape: Fixed::<B, E, N>::SHAPE, num: cast(&x.0) }
  }

  /// Back into a static type, which must have the same shape as `self`.
  #[inline]
  pub fn into_fixed<const B: u32, const E: i32, N: crate::Int>(self) -> Fixed<B, E, N> {
    debug_assert!(
      self.shape.same_as(Fixed::<B, E, N>::SHAPE),
      "kernel produced {} but the result type is {}", self.shape, Fixed::<B, E, N>::SHAPE,
    );
    Fixed::from_num(cast(&self.num))
  }

  /// The same `num`, read at another shape (so the value changes by a power of 2).
  #[inline]
  pub fn reinterpret(self, shape: Shape) -> Self {
    Self::new(shape, self.num)
  }

  #[inline]
  pub fn is_zero(&self) -> bool {
    self.num.is_zero()
  }

  /// Exact sum, of shape [`Shape::add_sub`].
  pub fn add(&self, rhs: &Self) -> Self {
    let (a, b) = self.aligned(rhs);
    Self::new(Shape::add_sub(self.shape, rhs.shape), a + b)
  }

  /// Exact difference, of shape [`Shape::add_sub`].
  pub fn sub(&self, rhs: &Self) -> Self {
    let (a, b) = self.aligned(rhs);
    Self::new(Shape::add_sub(self.shape, rhs.shape), a - b)
  }

  /// Exact product, of shape [`Shape::mul`].
  pub fn mul(&self, rhs: &Self) -> Self {
    Self::new(Shape::mul(self.shape, rhs.shape), self.num.clone() * rhs.num.clone())
  }

  /// Exact square, of shape [`Shape::square`].
  pub fn square(&self) -> Self {
    let abs = self.num.clone().abs();
    Self::new(Shape::square(self.shape), abs.clone() * abs)
  }

  /// Move to `shape`, shifting `num` by the difference in exponents. Bits below the new
  /// exponent are dropped, rounding toward negative infinity; the value must fit `shape`.
  pub fn rescale(self, shape: Shape) -> Self {
    let sh = self.shape.exp as i64 - shape.exp as i64;
    Self::new(shape, self.num.shift(sh))
  }

  /// As [`Raw::rescale`], but rounding toward zero.
  pub fn narrow_toward_zero(self, shape: Shape) -> Self {
    let sh = self.shape.exp as i64 - shape.exp as i64;
    let negative = self.num.is_negative();
    Self::new(shape, self.num.abs().shift(sh).apply_sign(negative))
  }

  /// Compare the values of `self` and `rhs`, which may have different shapes.
  pub fn cmp_value(&self, rhs: &Self) -> Ordering {
    let (a, b) = self.aligned(rhs);
    a.cmp(&b)
  }

  /// Both `num`s, shifted to the smaller exponent.
  fn aligned(&self, rhs: &Self) -> (W, W) {
    let (sh1, sh2) = Shape::align(self.shape, rhs.shape);
    (self.num.clone().shl(sh1), rhs.num.clone().shl(sh2))
  }
}
