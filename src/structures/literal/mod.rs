//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The 'canonical' implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! An example:
//!
//! ```rust
//! # use tableau_taxonomy::structures::atom::Atom;
//! # use tableau_taxonomy::structures::literal::{CLiteral, Literal};
//! let atom = Atom::from("food");
//! let literal = CLiteral::new(atom.clone(), false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), &atom);
//! assert!(literal.negate().polarity());
//!
//! assert_eq!(literal.to_string(), "-food");
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals should be ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow for straightforward use of literals as indices of maps, etc.
//!
//! Literals are the unit of exchange between [branches](crate::structures::branch) and [formulas](crate::structures::formula), and the product of [inference](crate::taxonomy::Taxonomy::infer_from).

mod ab_literal;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> &Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;
