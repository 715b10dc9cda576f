//! Addition and removal of edges between the elements of a taxonomy.
//!
//! Each edge is recorded twice, as a child of the parent and as a parent of the child, and each method here revises both records or neither.
//!
//! Methods are paired, as an edge may be described from either end:
//! - [add_child](Taxonomy::add_child)(*parent*, *child*) and [add_parent](Taxonomy::add_parent)(*child*, *parent*) add the same edge.
//! - [remove_child](Taxonomy::remove_child)(*parent*, *child*) and [remove_parent](Taxonomy::remove_parent)(*child*, *parent*) remove the same edge.
//!
//! Plural methods apply the singular method to each atom in order, and stop at the first error, keeping any earlier revision.

use std::borrow::Borrow;

use crate::{
    config::CyclePolicy,
    misc::log::targets::{self},
    structures::atom::Atom,
    types::err::TaxonomyError,
};

use super::Taxonomy;

impl Taxonomy {
    /// Records `child` as a child of `parent`, i.e. that `child` entails `parent`.
    ///
    /// Adding an edge which is already present leaves the taxonomy unchanged.
    ///
    /// If the taxonomy is configured to reject cycles and the edge would introduce a cycle, the taxonomy is unchanged and a [cycle error](TaxonomyError::Cycle) is returned.
    pub fn add_child(
        &mut self,
        parent: impl Borrow<Atom>,
        child: impl Borrow<Atom>,
    ) -> Result<(), TaxonomyError> {
        let parent = parent.borrow();
        let child = child.borrow();

        self.element(parent)?;
        self.element(child)?;

        if self.config.cycle_policy.value == CyclePolicy::Reject && self.would_cycle(parent, child)? {
            log::info!(target: targets::TAXONOMY, "Rejected edge {child} -> {parent}");
            return Err(TaxonomyError::Cycle {
                parent: parent.clone(),
                child: child.clone(),
            });
        }

        self.element_mut(parent)?.children.insert(child.clone());
        self.element_mut(child)?.parents.insert(parent.clone());

        log::trace!(target: targets::TAXONOMY, "Added edge {child} -> {parent}");
        Ok(())
    }

    /// Records each atom in `children` as a child of `parent`, as with [add_child](Taxonomy::add_child).
    pub fn add_children(
        &mut self,
        parent: impl Borrow<Atom>,
        children: impl IntoIterator<Item = impl Borrow<Atom>>,
    ) -> Result<(), TaxonomyError> {
        let parent = parent.borrow();
        for child in children {
            self.add_child(parent, child)?;
        }
        Ok(())
    }

    /// Records `parent` as a parent of `child`, i.e. that `child` entails `parent`.
    ///
    /// The same as [add_child](Taxonomy::add_child), with the order of the atoms reversed.
    pub fn add_parent(
        &mut self,
        child: impl Borrow<Atom>,
        parent: impl Borrow<Atom>,
    ) -> Result<(), TaxonomyError> {
        self.add_child(parent, child)
    }

    /// Records each atom in `parents` as a parent of `child`, as with [add_parent](Taxonomy::add_parent).
    pub fn add_parents(
        &mut self,
        child: impl Borrow<Atom>,
        parents: impl IntoIterator<Item = impl Borrow<Atom>>,
    ) -> Result<(), TaxonomyError> {
        let child = child.borrow();
        for parent in parents {
            self.add_parent(child, parent)?;
        }
        Ok(())
    }

    /// Removes the edge from `child` to `parent`.
    ///
    /// If both atoms are elements but `child` is not a child of `parent` an [EdgeNotFound](TaxonomyError::EdgeNotFound) error is returned.
    pub fn remove_child(
        &mut self,
        parent: impl Borrow<Atom>,
        child: impl Borrow<Atom>,
    ) -> Result<(), TaxonomyError> {
        let parent = parent.borrow();
        let child = child.borrow();

        self.element(child)?;

        if !self.element_mut(parent)?.children.remove(child) {
            return Err(TaxonomyError::EdgeNotFound {
                parent: parent.clone(),
                child: child.clone(),
            });
        }
        self.element_mut(child)?.parents.remove(parent);

        log::trace!(target: targets::TAXONOMY, "Removed edge {child} -> {parent}");
        Ok(())
    }

    /// Removes the edge from each atom in `children` to `parent`, as with [remove_child](Taxonomy::remove_child).
    pub fn remove_children(
        &mut self,
        parent: impl Borrow<Atom>,
        children: impl IntoIterator<Item = impl Borrow<Atom>>,
    ) -> Result<(), TaxonomyError> {
        let parent = parent.borrow();
        for child in children {
            self.remove_child(parent, child)?;
        }
        Ok(())
    }

    /// Removes the edge from `child` to `parent`.
    ///
    /// The same as [remove_child](Taxonomy::remove_child), with the order of the atoms reversed.
    pub fn remove_parent(
        &mut self,
        child: impl Borrow<Atom>,
        parent: impl Borrow<Atom>,
    ) -> Result<(), TaxonomyError> {
        self.remove_child(parent, child)
    }

    /// Removes the edge from `child` to each atom in `parents`, as with [remove_parent](Taxonomy::remove_parent).
    pub fn remove_parents(
        &mut self,
        child: impl Borrow<Atom>,
        parents: impl IntoIterator<Item = impl Borrow<Atom>>,
    ) -> Result<(), TaxonomyError> {
        let child = child.borrow();
        for parent in parents {
            self.remove_parent(child, parent)?;
        }
        Ok(())
    }

    /// True if an edge from `child` to `parent` would close a cycle, i.e. `child` is `parent` or already an ancestor of `parent`.
    fn would_cycle(&self, parent: &Atom, child: &Atom) -> Result<bool, TaxonomyError> {
        Ok(parent == child || self.ancestors(parent)?.contains(child))
    }
}
