//! This crate provides *static* fixed-point numbers: every value carries its precision and
//! binary exponent in its type, and every arithmetic operation produces a type wide enough to
//! hold the exact result. Overflow is ruled out when the program is built, not when it runs.
//!
//! # Introduction
//!
//! A [`Fixed<B, E, N>`] holds an integer `num` and represents the real number `num * 2^E`. The
//! integer has `B` significant bits (plus a sign, if the storage `N` is signed), so a signed
//! `Fixed<B, E, _>` covers `(-2^(B+E), 2^(B+E))` in steps of `2^E`.
//!
//! The storage `N` is always the smallest integer that holds `B` bits: `i8`, `i16`, `i32`,
//! `i64`, `i128`, or the arbitrary-precision [`Big`] for signed shapes, and `u8` … `u128` or
//! [`UBig`] for unsigned ones. Choosing anything else is a compile error.
//!
//! Combining two values yields a new shape (see [`Shape`] for the rules). Since stable Rust
//! cannot compute a type from const parameters, the caller writes the result type down, and the
//! crate checks it against the rules at compile time:
//!
//! ```
//! use static_float::Fixed;
//!
//! let a = Fixed::<3, 2, i8>::from(12);  // 3 bits, steps of 4
//! let b = Fixed::<3, 1, i8>::from(10);  // 3 bits, steps of 2
//! let c: Fixed<5, 1, i8> = a.add(&b);   // the only shape the sum may have
//! assert_eq!(c.to_f64(), 22.0);
//!
//! let q: Fixed<6, -3, i8> = Fixed::<4, 0, i8>::from(10).div(&Fixed::<2, 1, i8>::from(2));
//! assert_eq!(q.to_f64(), 5.0);
//! ```
//!
//! Writing any other result shape, or assigning a value into a shape that cannot hold its
//! range, does not compile.
//!
//! # Checked mode
//!
//! With the `checked` feature (on by default), conversions that can fail at run time (from
//! floats, to unsigned) validate their input and return an [`Error`]. Without it they perform
//! the same bit operations with no validation.
//!
//! # Algorithms
//!
//! Two numeric algorithms are built on top of the type: an integer Newton-Raphson inverse
//! square root ([`Fixed::inverse_sqrt`]) and a bit-exact vector normalisation by bisection
//! ([`Vec3::normalize`]).
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod error;
mod fixed;
mod math;
mod shape;
mod underlying;
mod vector;

pub use error::{Error, ErrorKind, Result};
pub use fixed::Fixed;
pub use shape::Shape;
pub use underlying::{Big, Int, SignedInt, UBig, UnsignedInt};
pub use vector::Vec3;

/// Whether this build validates fallible conversions (cargo feature `checked`).
pub const CHECKED: bool = cfg!(feature = "checked");

/// Number of cases for each property test.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x1_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
