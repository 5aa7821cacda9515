//! Parallel batch operations using Rayon.
//!
//! Enable with the `parallel` feature flag. Systems and elements are
//! immutable and `Send + Sync`, so independent operations can be spread over
//! the thread pool without coordination.
//!
//! # Usage
//!
//! ```ignore
//! use modalg::M3System;
//! use modalg::parallel::par_powers;
//!
//! let sys = M3System::m3(1, 2, 3, 1, 2, 7).unwrap();
//! let a = sys.element([1, 2, 3]).unwrap();
//! let table = par_powers(&a, 0..64u32).unwrap();
//! assert_eq!(table[1], a);
//! ```
//!
//! For a handful of small operations the sequential methods are faster due
//! to scheduling overhead.

use num_bigint::BigInt;
use rayon::prelude::*;

use crate::algebra::{Element, Layout};
use crate::error::Result;

/// Compute `base.power(k)` for every exponent, in input order.
///
/// # Errors
///
/// Returns the first [`Error::InvalidExponent`](crate::Error::InvalidExponent)
/// encountered if any exponent is negative.
pub fn par_powers<L, I>(base: &Element<L>, exponents: I) -> Result<Vec<Element<L>>>
where
    L: Layout,
    I: IntoIterator,
    I::Item: Into<BigInt>,
{
    let exponents: Vec<BigInt> = exponents.into_iter().map(Into::into).collect();
    tracing::debug!(count = exponents.len(), "parallel powers");
    exponents
        .into_par_iter()
        .map(|k| base.power(k))
        .collect()
}

/// Compute `lhs[i] * rhs` for every left operand, in input order.
///
/// # Errors
///
/// Returns [`Error::SystemMismatch`](crate::Error::SystemMismatch) if any
/// left operand belongs to a different system than `rhs`.
pub fn par_mul_each<L: Layout>(lhs: &[Element<L>], rhs: &Element<L>) -> Result<Vec<Element<L>>> {
    tracing::debug!(count = lhs.len(), "parallel multiply");
    lhs.par_iter().map(|a| a.mul(rhs)).collect()
}
