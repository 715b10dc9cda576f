//! A library for reasoning about propositional formulas in the presence of an is-a taxonomy.
//!
//! tableau_taxonomy supports two views of a formula, each built by a recursive pass over the formula:
//! - An equivalent formula in [disjunctive normal form](crate::structures::formula::Formula::to_dnf).
//! - The open branches of an [analytic tableau](crate::structures::formula::Formula::branches), where each branch is a consistent collection of literals.
//!
//! And, a [taxonomy](crate::taxonomy) over the atoms of a formula may be used to augment a formula with the literals the taxonomy entails, before either view is built.
//!
//! Deciding satisfiability is left to some other tool, which may consume the DNF or branches built here.
//! Still, a formula without any (open) branch is unsatisfiable, and so some contradictions are found during the construction of a tableau.
//!
//! # Orientation
//!
//! The library is designed around two core structures:
//! - [Formulas](crate::structures::formula::Formula), an enum of connectives over [atoms](crate::structures::atom).
//!   Every algorithm on formulas is defined by exhaustive case analysis on the enum.
//! - [Taxonomies](crate::taxonomy::Taxonomy), directed graphs over atoms where an edge from a child to a parent is read as 'child entails parent'.
//!
//! Useful starting points, then, may be:
//! - The [formula module](crate::structures::formula) for the leaf-to-root contract of normal forms and branches.
//! - The [taxonomy module](crate::taxonomy) for the closure, compilation, and inference methods.
//! - The [configuration](crate::config) to see what may be configured.
//!
//! # Examples
//!
//! + A formula, its normal form, and its branches.
//!
//! ```rust
//! # use tableau_taxonomy::structures::formula::Formula;
//! let p = Formula::atom("p");
//! let q = Formula::atom("q");
//! let r = Formula::atom("r");
//!
//! let formula = p.clone() & (q.clone() | !r.clone());
//!
//! assert_eq!(formula.to_dnf(), (p.clone() & q.clone()) | (p.clone() & !r.clone()));
//! assert_eq!(formula.branches().len(), 2);
//! ```
//!
//! + A taxonomy of food, and a contradiction found by inference.
//!
//! ```rust
//! # use tableau_taxonomy::structures::atom::Atom;
//! # use tableau_taxonomy::structures::formula::Formula;
//! # use tableau_taxonomy::taxonomy::Taxonomy;
//! let [pizza, dish, food] = ["pizza", "dish", "food"].map(Atom::from);
//!
//! let mut taxonomy = Taxonomy::default();
//! taxonomy.add_elements([&pizza, &dish, &food]);
//! taxonomy.add_child(&dish, &pizza).expect("elements");
//! taxonomy.add_child(&food, &dish).expect("elements");
//!
//! let psi = Formula::from(pizza.clone()) & !Formula::from(food.clone());
//! assert_eq!(psi.branches().len(), 1);
//!
//! let augmented = taxonomy.infer_from(psi);
//! assert!(augmented.branches().is_empty());
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [inference](crate::taxonomy::Taxonomy::infer_from) can be filtered with `RUST_LOG=inference …` or,
//! - Logs of closed tableau branches can be found with `RUST_LOG=tableau=trace …`

pub mod config;
pub mod structures;
pub mod taxonomy;
pub mod types;

pub mod generic;

pub mod misc;
