//! Elements of an algebraic system and their arithmetic.

use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use super::layout::{Dim3, Dim4, Layout};
use super::AlgebraicSystem;
use crate::error::{Error, Result};
use crate::utils::{floor_mod, format_vector};

/// A residue vector bound to one [`AlgebraicSystem`].
///
/// Every component lies in `[0, N)` where N is the system's modulus. The
/// vector is fixed at construction; all operations return new elements.
///
/// Binary operations require both operands to share the identical system
/// instance and fail with [`Error::SystemMismatch`] otherwise.
///
/// # Example
///
/// ```
/// use modalg::M3System;
///
/// let sys = M3System::m3(1, 2, 3, 1, 2, 7).unwrap();
/// let a = sys.element([1, 2, 3]).unwrap();
/// let b = sys.element([4, 5, 6]).unwrap();
///
/// assert_eq!(a.add(&b).unwrap().text(), "[5, 0, 2]");
/// assert_eq!(a.mul(&b).unwrap().text(), "[2, 5, 1]");
/// assert_eq!(b.mul(&a).unwrap().text(), "[0, 4, 5]");
/// assert_eq!(a.power(0).unwrap(), sys.zero());
/// ```
pub struct Element<L: Layout> {
    value: Vec<BigInt>,
    system: AlgebraicSystem<L>,
}

/// An element of an [`M3System`](super::M3System).
pub type M3Element = Element<Dim3>;

/// An element of an [`M4System`](super::M4System).
pub type M4Element = Element<Dim4>;

impl<L: Layout> Element<L> {
    /// Create an element from raw integers, reducing each modulo N.
    ///
    /// Negative inputs use floor semantics: `-1` becomes `N - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `values` does not have exactly
    /// [`Layout::DIM`] components.
    pub fn new<I>(values: I, system: &AlgebraicSystem<L>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        let value: Vec<BigInt> = values.into_iter().map(Into::into).collect();
        if value.len() != L::DIM {
            return Err(Error::InvalidDimension {
                expected: L::DIM,
                actual: value.len(),
            });
        }
        Ok(Self::reduced(value, system.clone()))
    }

    /// The all-zero element of `system`.
    ///
    /// This is the result of `power(0)` and the starting accumulator of
    /// exponentiation.
    #[must_use]
    pub fn zero(system: &AlgebraicSystem<L>) -> Self {
        Self {
            value: vec![BigInt::zero(); L::DIM],
            system: system.clone(),
        }
    }

    fn reduced(value: Vec<BigInt>, system: AlgebraicSystem<L>) -> Self {
        let modulus = system.modulus();
        let value = value.iter().map(|x| floor_mod(x, modulus)).collect();
        Self { value, system }
    }

    /// Get the reduced components.
    #[must_use]
    pub fn value(&self) -> &[BigInt] {
        &self.value
    }

    /// Get the system this element belongs to.
    #[must_use]
    pub fn system(&self) -> &AlgebraicSystem<L> {
        &self.system
    }

    /// Check if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.iter().all(Zero::is_zero)
    }

    /// Human-readable rendering of the component vector, e.g. `[2, 5, 1]`.
    #[must_use]
    pub fn text(&self) -> String {
        format_vector(&self.value)
    }

    fn ensure_same_system(&self, rhs: &Self, operation: &'static str) -> Result<()> {
        if self.system.ptr_eq(&rhs.system) {
            Ok(())
        } else {
            Err(Error::SystemMismatch { operation })
        }
    }

    /// Componentwise addition modulo N.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SystemMismatch`] if `rhs` belongs to another system.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_system(rhs, "add")?;
        let value = self.value.iter().zip(&rhs.value).map(|(x, y)| x + y).collect();
        Ok(Self::reduced(value, self.system.clone()))
    }

    /// Componentwise subtraction modulo N.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SystemMismatch`] if `rhs` belongs to another system.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_system(rhs, "sub")?;
        let value = self.value.iter().zip(&rhs.value).map(|(x, y)| x - y).collect();
        Ok(Self::reduced(value, self.system.clone()))
    }

    /// Additive inverse, componentwise `(-x) mod N`.
    #[must_use]
    pub fn neg(&self) -> Self {
        let value = self.value.iter().map(|x| -x).collect();
        Self::reduced(value, self.system.clone())
    }

    /// The defining multiplication `self * rhs`.
    ///
    /// The operation is generally neither commutative nor associative. For
    /// output index `i`:
    ///
    /// ```text
    /// r0 = a0 + b0 + a0 b0           + sum over TERMS[0] of C[k] a[p] b[q]
    /// ri = ai + bi + ai b0 + a0 bi   + sum over TERMS[i] of C[k] a[p] b[q]
    /// ```
    ///
    /// all reduced modulo N, with the term tables given by the layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SystemMismatch`] if `rhs` belongs to another system.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_system(rhs, "mul")?;
        Ok(self.product(rhs))
    }

    fn product(&self, rhs: &Self) -> Self {
        let a = &self.value;
        let b = &rhs.value;
        let constants = self.system.constants();

        let value = (0..L::DIM)
            .map(|i| {
                let mut acc = &a[i] + &b[i];
                if i == 0 {
                    acc += &a[0] * &b[0];
                } else {
                    acc += &a[i] * &b[0];
                    acc += &a[0] * &b[i];
                }
                for term in L::TERMS[i] {
                    acc += &constants[term.constant] * &a[term.left] * &b[term.right];
                }
                acc
            })
            .collect();

        Self::reduced(value, self.system.clone())
    }

    /// Exponentiation by squaring.
    ///
    /// Starting from the all-zero accumulator and `base = self`, for each bit
    /// of the exponent from the lowest: if the bit is set,
    /// `acc = acc * base`; then `base = base * base`. The accumulator is
    /// always the left operand. `power(0)` is the all-zero element.
    ///
    /// Uses O(log exponent) multiplications.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExponent`] if the exponent is negative.
    pub fn power(&self, exponent: impl Into<BigInt>) -> Result<Self> {
        let mut exponent: BigInt = exponent.into();
        if exponent.is_negative() {
            return Err(Error::InvalidExponent {
                exponent: exponent.to_string(),
            });
        }

        let span = tracing::trace_span!(
            "power",
            system = L::SYSTEM_NAME,
            bits = exponent.bits()
        );
        let _guard = span.enter();

        let mut result = Self::zero(&self.system);
        let mut base = self.clone();

        while !exponent.is_zero() {
            if exponent.is_odd() {
                result = result.product(&base);
            }
            base = base.product(&base);
            exponent >>= 1;
        }

        tracing::trace!(result = %result, "power done");
        Ok(result)
    }
}

impl<L: Layout> Clone for Element<L> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            system: self.system.clone(),
        }
    }
}

impl<L: Layout> PartialEq for Element<L> {
    fn eq(&self, other: &Self) -> bool {
        self.system.ptr_eq(&other.system) && self.value == other.value
    }
}

impl<L: Layout> Eq for Element<L> {}

impl<L: Layout> Hash for Element<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.system.id().hash(state);
        self.value.hash(state);
    }
}

impl<L: Layout> fmt::Display for Element<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl<L: Layout> fmt::Debug for Element<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text();
        f.debug_struct(L::ELEMENT_NAME)
            .field("value", &format_args!("{text}"))
            .field("system_id", &format_args!("{:#x}", self.system.id()))
            .finish()
    }
}

// Only negation is infallible; the binary operations return `Result`.
impl<L: Layout> std::ops::Neg for Element<L> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Element::neg(&self)
    }
}

impl<L: Layout> std::ops::Neg for &Element<L> {
    type Output = Element<L>;

    fn neg(self) -> Self::Output {
        Element::neg(self)
    }
}
