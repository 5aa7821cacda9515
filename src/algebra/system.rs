//! Algebraic system configuration.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use num_bigint::BigInt;

use super::layout::{Dim3, Dim4, Layout};
use super::Element;
use crate::error::{Error, Result};
use crate::utils::validate_modulus;

struct SystemData {
    modulus: BigInt,
    constants: Vec<BigInt>,
}

/// An immutable algebra instance: modulus plus structure constants.
///
/// The system is reference-counted internally, so cloning is cheap and the
/// clone is the *same* system. Equality is identity-based: two systems built
/// from identical constants are still different systems, and elements of one
/// cannot be combined with elements of the other. Use
/// [`AlgebraicSystem::same_constants`] for a value comparison.
///
/// Structure constants are stored as given, without reduction modulo the
/// modulus; every product is reduced at the end, so the result is the same.
///
/// # Example
///
/// ```
/// use modalg::M3System;
///
/// let sys = M3System::m3(1, 2, 3, 1, 2, 7).unwrap();
/// assert_eq!(sys.to_string(), "M3System(A=1, B=2, C=3, D=1, E=2, modulus=7)");
///
/// let a = sys.element([1, 2, 3]).unwrap();
/// let b = sys.element([4, 5, 6]).unwrap();
/// assert_eq!(a.mul(&b).unwrap().text(), "[2, 5, 1]");
/// ```
pub struct AlgebraicSystem<L: Layout> {
    data: Arc<SystemData>,
    layout: PhantomData<fn() -> L>,
}

/// The three-dimensional system with constants `A..E`.
pub type M3System = AlgebraicSystem<Dim3>;

/// The four-dimensional system with constants `A..I`.
pub type M4System = AlgebraicSystem<Dim4>;

impl<L: Layout> AlgebraicSystem<L> {
    /// Create a system from its structure constants (in [`Layout::CONSTANTS`]
    /// order) and modulus.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the number of constants differs from the layout's ([`Error::InvalidSystem`])
    /// - the modulus is below 2 ([`Error::InvalidConfiguration`])
    pub fn new<I>(constants: I, modulus: impl Into<BigInt>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        let constants: Vec<BigInt> = constants.into_iter().map(Into::into).collect();
        if constants.len() != L::CONSTANTS.len() {
            return Err(Error::invalid_system(format!(
                "{} expects {} structure constants, got {}",
                L::SYSTEM_NAME,
                L::CONSTANTS.len(),
                constants.len()
            )));
        }

        let modulus = modulus.into();
        validate_modulus(&modulus)?;

        tracing::debug!(
            system = L::SYSTEM_NAME,
            modulus = %modulus,
            "constructed algebraic system"
        );

        Ok(Self {
            data: Arc::new(SystemData { modulus, constants }),
            layout: PhantomData,
        })
    }

    /// Get the modulus N.
    #[must_use]
    pub fn modulus(&self) -> &BigInt {
        &self.data.modulus
    }

    /// Get the structure constants in [`Layout::CONSTANTS`] order.
    #[must_use]
    pub fn constants(&self) -> &[BigInt] {
        &self.data.constants
    }

    /// Look up a structure constant by name (`"A"`, `"B"`, ...).
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&BigInt> {
        L::constant_index(name).map(|i| &self.data.constants[i])
    }

    /// Number of components of the system's elements.
    #[must_use]
    pub fn dimension(&self) -> usize {
        L::DIM
    }

    /// Identity token of this system instance.
    ///
    /// Clones share the token; independently constructed systems never do
    /// while both are alive.
    #[must_use]
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.data) as usize
    }

    /// Check whether two handles refer to the same system instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Compare modulus and constants by value, ignoring identity.
    #[must_use]
    pub fn same_constants(&self, other: &Self) -> bool {
        self.data.modulus == other.data.modulus && self.data.constants == other.data.constants
    }

    /// Create an element of this system, reducing every component mod N.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `values` does not have exactly
    /// [`Layout::DIM`] components.
    pub fn element<I>(&self, values: I) -> Result<Element<L>>
    where
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        Element::new(values, self)
    }

    /// Get the all-zero element.
    #[must_use]
    pub fn zero(&self) -> Element<L> {
        Element::zero(self)
    }
}

impl AlgebraicSystem<Dim3> {
    /// Create a three-dimensional system from `A..E` and the modulus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the modulus is below 2.
    #[allow(clippy::many_single_char_names)]
    pub fn m3<T: Into<BigInt>>(a: T, b: T, c: T, d: T, e: T, modulus: T) -> Result<Self> {
        Self::new([a, b, c, d, e], modulus)
    }
}

impl AlgebraicSystem<Dim4> {
    /// Create a four-dimensional system from `A..I` and the modulus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the modulus is below 2.
    #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
    pub fn m4<T: Into<BigInt>>(
        a: T,
        b: T,
        c: T,
        d: T,
        e: T,
        f: T,
        g: T,
        h: T,
        i: T,
        modulus: T,
    ) -> Result<Self> {
        Self::new([a, b, c, d, e, f, g, h, i], modulus)
    }
}

impl<L: Layout> Clone for AlgebraicSystem<L> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            layout: PhantomData,
        }
    }
}

impl<L: Layout> PartialEq for AlgebraicSystem<L> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<L: Layout> Eq for AlgebraicSystem<L> {}

impl<L: Layout> fmt::Display for AlgebraicSystem<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", L::SYSTEM_NAME)?;
        for (name, value) in L::CONSTANTS.iter().zip(&self.data.constants) {
            write!(f, "{name}={value}, ")?;
        }
        write!(f, "modulus={})", self.data.modulus)
    }
}

impl<L: Layout> fmt::Debug for AlgebraicSystem<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(L::SYSTEM_NAME)
            .field("id", &format_args!("{:#x}", self.id()))
            .field("constants", &self.data.constants)
            .field("modulus", &self.data.modulus)
            .finish()
    }
}
