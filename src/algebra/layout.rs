//! Structure-constant layouts for the supported dimensions.
//!
//! A layout fixes the dimension, the names of the structure constants, and
//! the table of weighted bilinear terms added to each output component of
//! the defining multiplication. The linear part and the interaction with the
//! leading coordinate are the same for every layout and live in
//! [`Element::mul`](super::Element::mul).

/// One weighted bilinear term `C[constant] * a[left] * b[right]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    /// Index into the system's structure constants.
    pub constant: usize,
    /// Component index taken from the left operand.
    pub left: usize,
    /// Component index taken from the right operand.
    pub right: usize,
}

impl Term {
    /// Create a new table entry.
    #[must_use]
    pub const fn new(constant: usize, left: usize, right: usize) -> Self {
        Self {
            constant,
            left,
            right,
        }
    }
}

/// Compile-time description of one algebra family.
///
/// `TERMS[i]` lists the weighted terms of output component `i`; it must have
/// exactly `DIM` rows and every index must be in range. Both built-in layouts
/// are checked by the tests below.
pub trait Layout: Send + Sync + 'static {
    /// Number of components of an element.
    const DIM: usize;

    /// Name used when rendering a system, e.g. `M3System`.
    const SYSTEM_NAME: &'static str;

    /// Name used when rendering an element, e.g. `M3Element`.
    const ELEMENT_NAME: &'static str;

    /// Structure constant names, in constructor order.
    const CONSTANTS: &'static [&'static str];

    /// Per-output-component table of weighted bilinear terms.
    const TERMS: &'static [&'static [Term]];

    /// Position of the named constant in [`Layout::CONSTANTS`].
    #[must_use]
    fn constant_index(name: &str) -> Option<usize> {
        Self::CONSTANTS.iter().position(|&c| c == name)
    }
}

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;
const E: usize = 4;
const F: usize = 5;
const G: usize = 6;
const H: usize = 7;
const I: usize = 8;

/// The three-dimensional family with constants `A..E`.
///
/// ```text
/// r0 = a0 + b0 + a0 b0 + A a1 b1 + C a2 b1 + B a2 b2
/// r1 = a1 + b1 + a1 b0 + a0 b1 + D a1 b1 + E a1 b2
/// r2 = a2 + b2 + a2 b0 + a0 b2 + D a2 b1 + E a2 b2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dim3;

impl Layout for Dim3 {
    const DIM: usize = 3;
    const SYSTEM_NAME: &'static str = "M3System";
    const ELEMENT_NAME: &'static str = "M3Element";
    const CONSTANTS: &'static [&'static str] = &["A", "B", "C", "D", "E"];
    const TERMS: &'static [&'static [Term]] = &[
        &[Term::new(A, 1, 1), Term::new(C, 2, 1), Term::new(B, 2, 2)],
        &[Term::new(D, 1, 1), Term::new(E, 1, 2)],
        &[Term::new(D, 2, 1), Term::new(E, 2, 2)],
    ];
}

/// The four-dimensional family with constants `A..I`.
///
/// Components 1 to 3 share the constants `G`, `H`, `I`.
///
/// ```text
/// r0 = a0 + b0 + a0 b0 + A a1 b1 + E a3 b1 + B a2 b2 + D a1 b2 + F a3 b2 + C a3 b3
/// ri = ai + bi + ai b0 + a0 bi + G ai b1 + H ai b2 + I ai b3      (i = 1, 2, 3)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dim4;

impl Layout for Dim4 {
    const DIM: usize = 4;
    const SYSTEM_NAME: &'static str = "M4System";
    const ELEMENT_NAME: &'static str = "M4Element";
    const CONSTANTS: &'static [&'static str] = &["A", "B", "C", "D", "E", "F", "G", "H", "I"];
    const TERMS: &'static [&'static [Term]] = &[
        &[
            Term::new(A, 1, 1),
            Term::new(E, 3, 1),
            Term::new(B, 2, 2),
            Term::new(D, 1, 2),
            Term::new(F, 3, 2),
            Term::new(C, 3, 3),
        ],
        &[Term::new(G, 1, 1), Term::new(H, 1, 2), Term::new(I, 1, 3)],
        &[Term::new(G, 2, 1), Term::new(H, 2, 2), Term::new(I, 2, 3)],
        &[Term::new(G, 3, 1), Term::new(H, 3, 2), Term::new(I, 3, 3)],
    ];
}
