//! Builder pattern for configuring algebraic systems.
//!
//! The builder lets callers set structure constants by name instead of by
//! position, which matters for the nine-constant four-dimensional family.
//!
//! # Example
//!
//! ```
//! use modalg::{Dim4, SystemBuilder};
//!
//! let sys = SystemBuilder::<Dim4>::new()
//!     .constant("A", 1)
//!     .constant("G", 7)
//!     .constant("I", 9)
//!     .modulus(11)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(sys.to_string(), "M4System(A=1, B=0, C=0, D=0, E=0, F=0, G=7, H=0, I=9, modulus=11)");
//! ```
//!
//! # Defaults
//!
//! Constants that are never set are zero. The modulus has no default.

use std::fmt;
use std::marker::PhantomData;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::algebra::{AlgebraicSystem, Layout};
use crate::error::{Error, Result};

/// Builder for [`AlgebraicSystem`] values.
///
/// Setter errors (an unknown constant name) are deferred until
/// [`SystemBuilder::build`], so the builder can be chained freely.
pub struct SystemBuilder<L: Layout> {
    constants: Vec<BigInt>,
    modulus: Option<BigInt>,
    unknown: Vec<String>,
    positional: Option<usize>,
    layout: PhantomData<fn() -> L>,
}

impl<L: Layout> SystemBuilder<L> {
    /// Create a new builder with every constant set to zero and no modulus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constants: vec![BigInt::zero(); L::CONSTANTS.len()],
            modulus: None,
            unknown: Vec::new(),
            positional: None,
            layout: PhantomData,
        }
    }

    /// Set one structure constant by name (`"A"`, `"B"`, ...).
    #[must_use]
    pub fn constant(mut self, name: &str, value: impl Into<BigInt>) -> Self {
        match L::constant_index(name) {
            Some(i) => self.constants[i] = value.into(),
            None => self.unknown.push(name.to_string()),
        }
        self
    }

    /// Set all structure constants positionally, in [`Layout::CONSTANTS`] order.
    ///
    /// The count is checked by [`SystemBuilder::build`].
    #[must_use]
    pub fn constants<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        let values: Vec<BigInt> = values.into_iter().map(Into::into).collect();
        if values.len() == L::CONSTANTS.len() {
            self.constants = values;
            self.positional = None;
        } else {
            self.positional = Some(values.len());
        }
        self
    }

    /// Set the modulus N.
    #[must_use]
    pub fn modulus(mut self, modulus: impl Into<BigInt>) -> Self {
        self.modulus = Some(modulus.into());
        self
    }

    /// Build the system.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a constant name is not part of the layout ([`Error::InvalidSystem`])
    /// - a positional constant list had the wrong length ([`Error::InvalidSystem`])
    /// - the modulus was never set or is below 2 ([`Error::InvalidConfiguration`])
    pub fn build(self) -> Result<AlgebraicSystem<L>> {
        if !self.unknown.is_empty() {
            return Err(Error::invalid_system(format!(
                "unknown structure constant(s) {} for {} (expected one of {})",
                self.unknown.join(", "),
                L::SYSTEM_NAME,
                L::CONSTANTS.join(", ")
            )));
        }

        if let Some(count) = self.positional {
            return Err(Error::invalid_system(format!(
                "{} expects {} structure constants, got {}",
                L::SYSTEM_NAME,
                L::CONSTANTS.len(),
                count
            )));
        }

        let modulus = self
            .modulus
            .ok_or_else(|| Error::invalid_configuration("modulus is required"))?;

        AlgebraicSystem::new(self.constants, modulus)
    }
}

impl<L: Layout> Default for SystemBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Layout> Clone for SystemBuilder<L> {
    fn clone(&self) -> Self {
        Self {
            constants: self.constants.clone(),
            modulus: self.modulus.clone(),
            unknown: self.unknown.clone(),
            positional: self.positional,
            layout: PhantomData,
        }
    }
}

impl<L: Layout> fmt::Debug for SystemBuilder<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemBuilder")
            .field("layout", &L::SYSTEM_NAME)
            .field("constants", &self.constants)
            .field("modulus", &self.modulus)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Dim3, Dim4, M3System};

    #[test]
    fn test_builder_named_constants() {
        let sys = SystemBuilder::<Dim3>::new()
            .constant("A", 1)
            .constant("B", 2)
            .constant("C", 3)
            .constant("D", 1)
            .constant("E", 2)
            .modulus(7)
            .build()
            .unwrap();

        let reference = M3System::m3(1, 2, 3, 1, 2, 7).unwrap();
        assert!(sys.same_constants(&reference));
        assert_ne!(sys, reference);
    }

    #[test]
    fn test_builder_defaults_to_zero() {
        let sys = SystemBuilder::<Dim4>::new().modulus(5).build().unwrap();
        assert!(sys.constants().iter().all(Zero::is_zero));
    }

    #[test]
    fn test_builder_positional() {
        let sys = SystemBuilder::<Dim4>::new()
            .constants(1..=9)
            .modulus(11)
            .build()
            .unwrap();
        assert_eq!(sys.constant("F"), Some(&BigInt::from(6)));

        let err = SystemBuilder::<Dim4>::new()
            .constants([1, 2, 3])
            .modulus(11)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSystem { .. }));
    }

    #[test]
    fn test_builder_unknown_constant() {
        let err = SystemBuilder::<Dim3>::new()
            .constant("G", 1)
            .modulus(7)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSystem { .. }));
        assert!(err.to_string().contains("G"));
    }

    #[test]
    fn test_builder_missing_or_bad_modulus() {
        assert!(matches!(
            SystemBuilder::<Dim3>::new().build(),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            SystemBuilder::<Dim3>::new().modulus(1).build(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_builder_last_write_wins() {
        let sys = SystemBuilder::<Dim3>::new()
            .constant("A", 1)
            .constant("A", 4)
            .modulus(7)
            .build()
            .unwrap();
        assert_eq!(sys.constant("A"), Some(&BigInt::from(4)));
    }
}
