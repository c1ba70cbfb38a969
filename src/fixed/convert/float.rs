use super::*;

/// The fields of an IEEE 754 binary float.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fields {
  negative: bool,
  /// Biased exponent field, as stored.
  exponent: i64,
  /// Explicit mantissa bits, without the hidden bit.
  mantissa: u64,
}

/// The two IEEE 754 formats we convert from: their layout, and their decomposition by masking
/// the bits of the integer reinterpretation.
trait Ieee754: Copy + core::fmt::Display {
  const EXPONENT_BITS: u32;
  const MANTISSA_BITS: u32;
  const BIAS: i64;

  fn is_zero(self) -> bool;
  fn is_finite(self) -> bool;
  fn fields(self) -> Fields;
}

impl Ieee754 for f64 {
  const EXPONENT_BITS: u32 = 11;
  const MANTISSA_BITS: u32 = 52;
  const BIAS: i64 = 1023;

  #[inline]
  fn is_zero(self) -> bool { self == 0. }

  #[inline]
  fn is_finite(self) -> bool { f64::is_finite(self) }

  #[inline]
  fn fields(self) -> Fields {
    let bits = self.to_bits();
    Fields {
      negative: bits >> 63 != 0,
      exponent: ((bits >> Self::MANTISSA_BITS) & ((1 << Self::EXPONENT_BITS) - 1)) as i64,
      mantissa: bits & ((1 << Self::MANTISSA_BITS) - 1),
    }
  }
}

impl Ieee754 for f32 {
  const EXPONENT_BITS: u32 = 8;
  const MANTISSA_BITS: u32 = 23;
  const BIAS: i64 = 127;

  #[inline]
  fn is_zero(self) -> bool { self == 0. }

  #[inline]
  fn is_finite(self) -> bool { f32::is_finite(self) }

  #[inline]
  fn fields(self) -> Fields {
    let bits = self.to_bits();
    Fields {
      negative: bits >> 31 != 0,
      exponent: ((bits >> Self::MANTISSA_BITS) & ((1 << Self::EXPONENT_BITS) - 1)) as i64,
      mantissa: u64::from(bits & ((1 << Self::MANTISSA_BITS) - 1)),
    }
  }
}

impl<
  const B: u32,
  const E: i32,
  N: crate::Int,
> Fixed<B, E, N> {
  /// Checked conversion from any IEEE float.
  ///
  /// The range check only looks at the exponent field: a float is accepted if its exponent is
  /// at most `bias + B + E - 1`, i.e. if it is less than `2^(B+E)` in magnitude.
  #[track_caller]
  fn from_ieee<F: Ieee754>(x: F) -> Result<Self> {
    if x.is_zero() {
      return Ok(Self::zero())
    }
    let fields = x.fields();
    if crate::CHECKED {
      if !N::SIGNED && fields.negative {
        return Err(raise!(Sign, "cannot convert {x} to {}", Self::SHAPE))
      }
      let max_exponent = F::BIAS + E as i64 + B as i64 - 1;
      if !x.is_finite() || fields.exponent > max_exponent {
        return Err(raise!(OutOfRange, "{x} is out of the range of {}", Self::SHAPE))
      }
    }
    Ok(Self::from_fields::<F>(fields))
  }

  /// Unchecked conversion from the fields of an IEEE float: restore the hidden bit, shift the
  /// mantissa into place, apply the sign. Bits below `2^E` are dropped.
  fn from_fields<F: Ieee754>(fields: Fields) -> Self {
    let _ = Self::SHAPE;
    let mantissa = fields.mantissa | 1 << F::MANTISSA_BITS;
    let shift = F::BIAS - fields.exponent + F::MANTISSA_BITS as i64 + E as i64;
    let num = if shift >= 0 {
      N::of_u64(mantissa.checked_shr(u32::try_from(shift).unwrap_or(u32::MAX)).unwrap_or(0))
    } else {
      N::of_u64(mantissa).shift(-shift)
    };
    Self(num.apply_sign(fields.negative))
  }

  /// Convert an `f64`.
  ///
  /// In checked mode, a value that is not finite or whose magnitude is `2^(B+E)` or more raises
  /// [`ErrorKind::OutOfRange`](crate::ErrorKind), and a negative value raises
  /// [`ErrorKind::Sign`](crate::ErrorKind) if `N` is unsigned. Bits below `2^E` are dropped
  /// (rounding toward zero).
  ///
  /// ```
  /// # use static_float::{ErrorKind, Fixed};
  /// assert_eq!(Fixed::<3, 1, i8>::from_f64(6.5)?.to_f64(), 6.);
  /// assert_eq!(Fixed::<8, -4, i16>::from_f64(-1.6875)?.to_f64(), -1.6875);
  /// # if static_float::CHECKED {
  /// assert_eq!(Fixed::<1, 1, i8>::from_f64(4.).unwrap_err().kind(), ErrorKind::OutOfRange);
  /// # }
  /// # Ok::<(), static_float::Error>(())
  /// ```
  #[track_caller]
  pub fn from_f64(x: f64) -> Result<Self> {
    Self::from_ieee(x)
  }

  /// Convert an `f32`. As [`Self::from_f64`].
  #[track_caller]
  pub fn from_f32(x: f32) -> Result<Self> {
    Self::from_ieee(x)
  }

  /// As [`Self::from_f64`], but never validates `x`, even in checked mode. Values out of range
  /// lose their high bits, and the sign is ignored if `N` is unsigned. `x` has to be finite.
  pub fn from_f64_unchecked(x: f64) -> Self {
    if x.is_zero() { Self::zero() } else { Self::from_fields::<f64>(x.fields()) }
  }

  /// As [`Self::from_f32`], but never validates `x`. See [`Self::from_f64_unchecked`].
  pub fn from_f32_unchecked(x: f32) -> Self {
    if x.is_zero() { Self::zero() } else { Self::from_fields::<f32>(x.fields()) }
  }

  /// The value of `self`, rounded to the nearest `f64`.
  pub fn to_f64(&self) -> f64 {
    let num = self.0.to_f64();
    if E == 0 { num } else { num * f64::exp2(E as f64) }
  }

  /// The value of `self`, rounded to the nearest `f32`.
  pub fn to_f32(&self) -> f32 {
    let num = self.0.to_f32();
    if E == 0 { num } else { num * f32::exp2(E as f32) }
  }
}

impl<const B: u32, const E: i32, N: crate::Int>
TryFrom<f64> for Fixed<B, E, N> {
  type Error = crate::Error;

  #[track_caller]
  fn try_from(x: f64) -> Result<Self> {
    Self::from_f64(x)
  }
}

impl<const B: u32, const E: i32, N: crate::Int>
TryFrom<f32> for Fixed<B, E, N> {
  type Error = crate::Error;

  #[track_caller]
  fn try_from(x: f32) -> Result<Self> {
    Self::from_f32(x)
  }
}
