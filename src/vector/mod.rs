//! Three-component vectors, of [`Fixed`] values or of floats.

use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::underlying::cast;
use crate::{Fixed, Shape};

/// Exact and approximate normalisation.
mod normalize;

#[cfg(feature = "bench")]
pub(crate) use normalize::{normalize_inverse_sqrt_kernel, normalize_kernel};

/// A 3-vector.
///
/// For [`Fixed`] components the arithmetic is shape-changing, like that of `Fixed` itself, so
/// it is provided by methods whose result type is written by the caller ([`Vec3::add`],
/// [`Vec3::dot`], [`Vec3::cross`], …). For components with the usual operators (e.g. `f64`),
/// `Vec3` has them too, element-wise.
///
/// ```
/// # use static_float::{Fixed, Vec3};
/// let a = Vec3::<Fixed<2, 0, i8>>::from([0, 1, 2].map(Fixed::from));
/// let b = Vec3::<Fixed<3, 0, i8>>::from([3, 4, 5].map(Fixed::from));
/// let d: Fixed<7, 0, i8> = a.dot(&b);
/// assert_eq!(d.to_f64(), 14.);
/// let c: Vec3<Fixed<6, 0, i8>> = a.cross(&b);
/// assert_eq!(c.to_f64(), Vec3::new(-3., 6., -3.));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Vec3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

impl<T> Vec3<T> {
  #[inline]
  pub const fn new(x: T, y: T, z: T) -> Self {
    Self { x, y, z }
  }

  /// All three components equal to `v`.
  #[inline]
  pub fn splat(v: T) -> Self where T: Clone {
    Self::new(v.clone(), v.clone(), v)
  }

  /// Apply `f` to each component.
  #[inline]
  pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vec3<U> {
    Vec3::new(f(self.x), f(self.y), f(self.z))
  }

  #[inline]
  pub fn to_array(self) -> [T; 3] {
    [self.x, self.y, self.z]
  }
}

impl<T> From<[T; 3]> for Vec3<T> {
  #[inline]
  fn from([x, y, z]: [T; 3]) -> Self {
    Self::new(x, y, z)
  }
}

impl<T> Index<usize> for Vec3<T> {
  type Output = T;

  fn index(&self, i: usize) -> &T {
    match i {
      0 => &self.x,
      1 => &self.y,
      2 => &self.z,
      _ => panic!("index out of bounds: a Vec3 has 3 components but the index is {i}"),
    }
  }
}

impl<T> IndexMut<usize> for Vec3<T> {
  fn index_mut(&mut self, i: usize) -> &mut T {
    match i {
      0 => &mut self.x,
      1 => &mut self.y,
      2 => &mut self.z,
      _ => panic!("index out of bounds: a Vec3 has 3 components but the index is {i}"),
    }
  }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
  type Output = Self;

  #[inline]
  fn add(self, rhs: Self) -> Self {
    Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
  }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
  type Output = Self;

  #[inline]
  fn sub(self, rhs: Self) -> Self {
    Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
  }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self {
    self.map(T::neg)
  }
}

/// Scalar multiplication.
impl<T: Mul<Output = T> + Clone> Mul<T> for Vec3<T> {
  type Output = Self;

  #[inline]
  fn mul(self, k: T) -> Self {
    self.map(|c| c * k.clone())
  }
}

impl Vec3<f64> {
  pub fn dot(&self, rhs: &Self) -> f64 {
    self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
  }

  pub fn cross(&self, rhs: &Self) -> Self {
    Self::new(
      self.y * rhs.z - self.z * rhs.y,
      self.z * rhs.x - self.x * rhs.z,
      self.x * rhs.y - self.y * rhs.x,
    )
  }

  /// Euclidean length.
  pub fn length(&self) -> f64 {
    self.dot(self).sqrt()
  }

  /// `self / self.length()`. The zero vector gives NaNs.
  pub fn normalize(&self) -> Self {
    *self * self.length().recip()
  }
}

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Vec3<Fixed<B, E, N>> {
  /// Element-wise [`Fixed::add`].
  pub fn add<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Vec3<Fixed<B2, E2, N2>>) -> Vec3<Fixed<B3, E3, N3>> {
    Vec3::new(self.x.add(&rhs.x), self.y.add(&rhs.y), self.z.add(&rhs.z))
  }

  /// Element-wise [`Fixed::sub`].
  pub fn sub<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Vec3<Fixed<B2, E2, N2>>) -> Vec3<Fixed<B3, E3, N3>> {
    Vec3::new(self.x.sub(&rhs.x), self.y.sub(&rhs.y), self.z.sub(&rhs.z))
  }

  /// Multiply every component by `k` ([`Fixed::mul`]).
  pub fn scale<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, k: &Fixed<B2, E2, N2>) -> Vec3<Fixed<B3, E3, N3>> {
    Vec3::new(self.x.mul(k), self.y.mul(k), self.z.mul(k))
  }

  /// Dot product, exact, of shape [`Shape::dot3`]: the sum of three products needs two more
  /// bits than one product.
  pub fn dot<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Vec3<Fixed<B2, E2, N2>>) -> Fixed<B3, E3, N3> {
    const {
      assert!(
        Shape::dot3(Fixed::<B, E, N>::SHAPE, Fixed::<B2, E2, N2>::SHAPE)
          .same_as(Fixed::<B3, E3, N3>::SHAPE),
        "The result of a dot product must have the shape given by Shape::dot3",
      )
    }
    let p = |a: &Fixed<B, E, N>, b: &Fixed<B2, E2, N2>| {
      cast::<N, N3>(a.num()) * cast::<N2, N3>(b.num())
    };
    Fixed::from_num(p(&self.x, &rhs.x) + p(&self.y, &rhs.y) + p(&self.z, &rhs.z))
  }

  /// Cross product, exact, of shape [`Shape::cross`]. Its components can be negative, so at
  /// least one of the operands must be signed.
  pub fn cross<
    const B2: u32, const E2: i32, N2: crate::Int,
    const B3: u32, const E3: i32, N3: crate::Int,
  >(&self, rhs: &Vec3<Fixed<B2, E2, N2>>) -> Vec3<Fixed<B3, E3, N3>> {
    const {
      let shape = Shape::cross(Fixed::<B, E, N>::SHAPE, Fixed::<B2, E2, N2>::SHAPE);
      assert!(
        shape.same_as(Fixed::<B3, E3, N3>::SHAPE),
        "The result of a cross product must have the shape given by Shape::cross",
      );
      assert!(shape.signed, "The cross product of two unsigned vectors can be negative");
    }
    let p = |a: &Fixed<B, E, N>, b: &Fixed<B2, E2, N2>| {
      cast::<N, N3>(a.num()) * cast::<N2, N3>(b.num())
    };
    let (a, b) = (self, rhs);
    Vec3::new(
      Fixed::from_num(p(&a.y, &b.z) - p(&a.z, &b.y)),
      Fixed::from_num(p(&a.z, &b.x) - p(&a.x, &b.z)),
      Fixed::from_num(p(&a.x, &b.y) - p(&a.y, &b.x)),
    )
  }

  /// The nearest `f64` of each component.
  pub fn to_f64(&self) -> Vec3<f64> {
    Vec3::new(self.x.to_f64(), self.y.to_f64(), self.z.to_f64())
  }

  pub fn is_zero(&self) -> bool {
    self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use static_float::{Fixed, Vec3};
  /// let a = Vec3::splat(Fixed::<2, 0, i8>::from(1));
  /// let d: Fixed<4, 0, i8> = a.dot(&a);
  /// ```
  #[allow(dead_code)]
  fn dot_fail_shape() {}

  /// ```compile_fail
  /// use static_float::{Fixed, Vec3};
  /// let a = Vec3::splat(Fixed::<2, 0, u8>::from(1));
  /// let c: Vec3<Fixed<5, 0, u8>> = a.cross(&a);
  /// ```
  #[allow(dead_code)]
  fn cross_fail_unsigned() {}
}
