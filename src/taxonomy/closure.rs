//! Ancestors and descendants.
//!
//! The ancestors of an element are the atoms reachable from the element by following one or more parent edges, and the descendants are the same for child edges.
//!
//! Both are computed with a worklist, beginning with the immediate parents (or children) of the element.
//! An atom is examined only when first reached, and so the computation terminates even if the taxonomy contains a cycle.
//! Though, in this case an element on a cycle is reachable from itself and so is among its own ancestors (and descendants).

use std::{borrow::Borrow, collections::BTreeSet};

use crate::{
    misc::log::targets::{self},
    structures::atom::Atom,
    types::err::TaxonomyError,
};

use super::{Element, Taxonomy};

impl Taxonomy {
    /// The atoms entailed by `atom`, by following parent edges.
    pub fn ancestors(&self, atom: impl Borrow<Atom>) -> Result<BTreeSet<Atom>, TaxonomyError> {
        self.closure(atom.borrow(), Element::parents)
    }

    /// The atoms which entail `atom`, by following child edges.
    pub fn descendants(&self, atom: impl Borrow<Atom>) -> Result<BTreeSet<Atom>, TaxonomyError> {
        self.closure(atom.borrow(), Element::children)
    }

    fn closure(
        &self,
        atom: &Atom,
        step: fn(&Element) -> &BTreeSet<Atom>,
    ) -> Result<BTreeSet<Atom>, TaxonomyError> {
        let mut reached = step(self.element(atom)?).clone();
        let mut to_check = reached.iter().cloned().collect::<Vec<_>>();

        while let Some(next) = to_check.pop() {
            for successor in step(self.element(&next)?) {
                if reached.insert(successor.clone()) {
                    to_check.push(successor.clone());
                }
            }
        }

        log::trace!(target: targets::CLOSURE, "Closure of {atom} reached {} atoms", reached.len());
        Ok(reached)
    }
}

#[cfg(test)]
mod closure_tests {
    use super::*;

    #[test]
    fn diamond() {
        let [top, left, right, bottom] = ["top", "left", "right", "bottom"].map(Atom::from);

        let mut taxonomy = Taxonomy::new();
        taxonomy.add_elements([&top, &left, &right, &bottom]);
        assert!(taxonomy.add_children(&top, [&left, &right]).is_ok());
        assert!(taxonomy.add_parents(&bottom, [&left, &right]).is_ok());

        assert_eq!(
            taxonomy.ancestors(&bottom),
            Ok(BTreeSet::from([top.clone(), left.clone(), right.clone()]))
        );
        assert_eq!(
            taxonomy.descendants(&top),
            Ok(BTreeSet::from([left.clone(), right.clone(), bottom.clone()]))
        );
        assert_eq!(taxonomy.ancestors(&top), Ok(BTreeSet::default()));
        assert_eq!(taxonomy.descendants(&bottom), Ok(BTreeSet::default()));
    }

    #[test]
    fn cycle_terminates() {
        let [p, q, r] = ["p", "q", "r"].map(Atom::from);

        let mut taxonomy = Taxonomy::new();
        taxonomy.add_elements([&p, &q, &r]);
        assert!(taxonomy.add_parent(&p, &q).is_ok());
        assert!(taxonomy.add_parent(&q, &r).is_ok());
        assert!(taxonomy.add_parent(&r, &p).is_ok());

        let everything = BTreeSet::from([p.clone(), q.clone(), r.clone()]);
        assert_eq!(taxonomy.ancestors(&p), Ok(everything.clone()));
        assert_eq!(taxonomy.descendants(&q), Ok(everything));
    }

    #[test]
    fn unknown_atom() {
        let taxonomy = Taxonomy::new();
        assert_eq!(
            taxonomy.ancestors(Atom::from("p")),
            Err(TaxonomyError::NotFound(Atom::from("p")))
        );
    }
}
