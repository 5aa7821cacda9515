//! # modalg
//!
//! Finite, parameterized non-associative algebras over the integers modulo N.
//!
//! ## Overview
//!
//! An algebra in this crate is the module (Z/NZ)^n, for n = 3 or 4, with a
//! custom multiplication: each output component is a sum of linear terms,
//! cross terms with the leading coordinate, and bilinear terms weighted by
//! fixed structure constants. The multiplication is generally neither
//! commutative nor associative.
//!
//! This library provides:
//! - Validated systems holding the modulus and structure constants
//! - Elements reduced into `[0, N)` at construction and after every operation
//! - Addition, subtraction, negation and the defining multiplication
//! - Exponentiation by squaring in O(log k) multiplications
//! - Arbitrary-precision arithmetic, so large constants never overflow
//!
//! ## Quick Start
//!
//! ```rust
//! use modalg::M3System;
//!
//! let sys = M3System::m3(1, 2, 3, 1, 2, 7).unwrap();
//! let a = sys.element([1, 2, 3]).unwrap();
//! let b = sys.element([4, 5, 6]).unwrap();
//!
//! assert_eq!(a.mul(&b).unwrap().text(), "[2, 5, 1]");
//! assert_eq!(b.mul(&a).unwrap().text(), "[0, 4, 5]");
//! assert_eq!(a.power(1).unwrap(), a);
//! ```
//!
//! Or configure a system by constant name:
//!
//! ```rust
//! use modalg::{Dim4, SystemBuilder};
//!
//! let sys = SystemBuilder::<Dim4>::new()
//!     .constants(1..=9)
//!     .modulus(11)
//!     .build()
//!     .unwrap();
//!
//! let a = sys.element([1, 2, 3, 4]).unwrap();
//! assert_eq!(a.power(5).unwrap().text(), "[9, 9, 8, 7]");
//! ```
//!
//! ## System identity
//!
//! Systems compare by identity: elements of two separately constructed
//! systems cannot be combined even when their constants agree, and the
//! attempt fails with [`Error::SystemMismatch`]. Cloning a system handle
//! keeps its identity.
//!
//! ## Features
//!
//! - `parallel`: Enable batch operations using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::should_implement_trait)]

pub mod algebra;
pub mod builder;
pub mod error;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algebra::{
        AlgebraicSystem, Dim3, Dim4, Element, Layout, M3Element, M3System, M4Element, M4System,
        Term,
    };
    pub use crate::builder::SystemBuilder;
    pub use crate::error::{Error, Result};

    #[cfg(feature = "parallel")]
    pub use crate::parallel::{par_mul_each, par_powers};
}

// Re-export commonly used items at crate root
pub use algebra::{
    AlgebraicSystem, Dim3, Dim4, Element, Layout, M3Element, M3System, M4Element, M4System,
};
pub use builder::SystemBuilder;
pub use error::{Error, Result};

#[cfg(feature = "parallel")]
pub use parallel::{par_mul_each, par_powers};
