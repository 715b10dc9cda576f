//! Error types used in the library.
//!
//! - Taxonomy errors are returned by every taxonomy method which reads or revises an element, excepting the methods which create elements.
//! - Taxonomy errors are also returned when a [record](crate::taxonomy::TaxonomyRecord) does not describe a consistent taxonomy.
//! - Formulas do not error, as every formula has a normal form and a (possibly empty) collection of branches.
//!
//! Lookups through [Taxonomy::get](crate::taxonomy::Taxonomy::get) and removal of an edge report a missing element or edge, and callers may test for either with [is_not_found](TaxonomyError::is_not_found).

use crate::structures::atom::Atom;

/// Noted errors when reading or revising a taxonomy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TaxonomyError {
    /// The atom is not an element of the taxonomy.
    NotFound(Atom),

    /// Both atoms are elements of the taxonomy, though `child` is not a child of `parent`.
    EdgeNotFound { parent: Atom, child: Atom },

    /// Recording `child` as a child of `parent` would introduce a cycle, and the taxonomy is configured to reject cycles.
    Cycle { parent: Atom, child: Atom },

    /// A [record](crate::taxonomy::TaxonomyRecord) of a taxonomy notes the edge from `child` to `parent` at one end only.
    OneSidedEdge { parent: Atom, child: Atom },
}

impl TaxonomyError {
    /// True if the error is due to a missing element or a missing edge.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TaxonomyError::NotFound(_) | TaxonomyError::EdgeNotFound { .. }
        )
    }
}

impl std::fmt::Display for TaxonomyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TaxonomyError::NotFound(atom) => write!(f, "'{atom}' is not an element"),
            TaxonomyError::EdgeNotFound { parent, child } => {
                write!(f, "'{child}' is not a child of '{parent}'")
            }
            TaxonomyError::Cycle { parent, child } => {
                write!(f, "'{child}' as a child of '{parent}' would introduce a cycle")
            }
            TaxonomyError::OneSidedEdge { parent, child } => {
                write!(f, "the edge from '{child}' to '{parent}' is noted at one end only")
            }
        }
    }
}

impl std::error::Error for TaxonomyError {}
