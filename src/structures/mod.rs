//! Key structures, such as atoms, literals, and formulas.
//!
//! Some structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Formulas and normal forms
//!
//! A [formula] is a tree of connectives over [atoms](atom).
//! Two representations of a formula are of particular interest:
//! - A formula in disjunctive normal form, which is again a formula.
//! - A collection of tableau [branches](branch), each of which is a consistent collection of [literals](literal).
//!
//! In either case, the formula is equivalent to the disjunction of its terms (or branches).
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things, identified with [true] and [false].
//! A [valuation] is a partial function from atoms to values, and every formula has at most one value on a valuation.

pub mod atom;
pub mod branch;
pub mod formula;
pub mod literal;
pub mod valuation;
