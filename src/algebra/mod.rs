//! Structure-constant algebras over the integers modulo N.
//!
//! This module provides the algebra families supported by the crate: the
//! module (Z/NZ)^n for n = 3 or 4, with a non-commutative multiplication
//! determined by a table of weighted bilinear terms.
//!
//! ## Overview
//!
//! - [`Layout`]: Compile-time table describing one family (dimension,
//!   constant names, term table)
//! - [`Dim3`], [`Dim4`]: The two built-in layouts
//! - [`AlgebraicSystem`]: Runtime modulus and structure constants, shared
//!   by reference
//! - [`Element`]: Reduced residue vector bound to one system
//!
//! ## Example
//!
//! ```
//! use modalg::algebra::M4System;
//!
//! let sys = M4System::m4(1, 2, 3, 4, 5, 6, 7, 8, 9, 11).unwrap();
//!
//! let a = sys.element([1, 2, 3, 4]).unwrap();
//! let b = sys.element([5, 6, 7, 8]).unwrap();
//!
//! let prod = a.mul(&b).unwrap();   // [10, 1, 3, 5]
//! let fifth = a.power(5).unwrap(); // [9, 9, 8, 7]
//! assert_eq!(prod.text(), "[10, 1, 3, 5]");
//! assert_eq!(fifth.text(), "[9, 9, 8, 7]");
//! ```

mod element;
mod layout;
mod system;

pub use element::{Element, M3Element, M4Element};
pub use layout::{Dim3, Dim4, Layout, Term};
pub use system::{AlgebraicSystem, M3System, M4System};
