//! Numeric algorithms on [`Fixed`] values. Each one is split into a kernel, which runs on a
//! [`Raw`] carrier, and a typed wrapper, which checks the output type against the [`Shape`]
//! rules and picks the carrier at compile time.

use crate::fixed::raw::Raw;
use crate::underlying::SignedInt;
use crate::{Big, Fixed, Shape};

/// Integer Newton-Raphson inverse square root.
mod inverse_sqrt;

pub(crate) use inverse_sqrt::{inverse_sqrt_kernel, inverse_sqrt_width};

/// Kernels whose widest intermediate has at most this many bits run on `i128`; wider ones run
/// on [`Big`].
pub(crate) const MAX_I128_BITS: u32 = 127;
