//! This module and its submodules contain the fixed-point value type [`Fixed`], its
//! conversions, and its arithmetic.
//!
//! Some notation used in the comments:
//!
//!   - **num**: the integer payload of a value; the value is `num * 2^E`.
//!   - **Shape**: the triple `(B, E, signed)` of a type, see [`Shape`](crate::Shape).
//!   - **Calculation width**: the storage of the result shape of an operation, which is where
//!     the operation is computed.

/// A fixed-point number with `B` bits of precision and binary exponent `E`, stored in `N`.
///
/// The value is `num * 2^E`, where `num: N` satisfies `|num| < 2^B` (and `num >= 0` if `N` is
/// unsigned). `N` has to be the smallest storage holding `B` bits (plus a sign bit if signed),
/// see [`Shape::storage_bits`](crate::Shape::storage_bits); any other choice is a compile error.
///
/// Examples:
///
/// ```
/// # use static_float::{Fixed, Big, UBig};
/// type Foo = Fixed<7, -4, i8>;     // 7 bits in steps of 1/16: (-8, 8)
/// type Bar = Fixed<8, 0, u8>;      // 8 bits unsigned: [0, 256)
/// type Baz = Fixed<8, 0, i16>;     // 8 bits need an i16 once there is a sign bit
/// type Qux = Fixed<200, -100, Big>; // more than 127 signed bits need a `Big`
/// # let _ = (Foo::zero(), Bar::zero(), Baz::zero(), Qux::zero());
/// ```
pub struct Fixed<
  const B: u32,
  const E: i32,
  N: crate::Int,
> (N);

/// Basics
mod basics;

/// Trait implementations (Clone, Eq, Ord, Hash, …), and comparisons across shapes
mod traits;

/// Debug and Display
mod fmt;

/// Conversions from and to native numbers and between shapes
mod convert;

/// Arithmetic
mod ops;

/// Sign-related operations: neg, abs, unsign, square
mod unary;

/// Runtime-shaped values for the kernels of the numeric algorithms
pub(crate) mod raw;


/// Exact rational oracle, for tests
#[cfg(test)]
pub(crate) mod rational;
