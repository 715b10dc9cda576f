/*!
A taxonomy, aka. an 'is-a' hierarchy over atoms.

A taxonomy is a directed graph whose vertices are atoms, called the *elements* of the taxonomy.
An edge from a *child* to a *parent* is read as 'child entails parent' --- whatever is a pizza is a dish, whatever is a dish is food, and so on.

Each element records both its children and its parents, and every method which revises a taxonomy preserves the (bidirectional) consistency of these records:
- *b* is a child of *a* if and only if *a* is a parent of *b*.

A taxonomy supports:
- Revision, through the addition and removal of elements and edges.
- Queries for the [ancestors](Taxonomy::ancestors) and [descendants](Taxonomy::descendants) of an element, i.e. the (transitive) closure of the parent and child relations.
- [Compilation](Taxonomy::to_constraints) to a formula, as the conjunction of an implication for each edge.
- [Inference](Taxonomy::infer_from), by which a conjunction is augmented with the literals entailed by the taxonomy.

Each taxonomy owns its elements, and distinct taxonomies share nothing.

Every method which takes an atom which should be an element of the taxonomy returns a [TaxonomyError] if the atom is not an element.
The methods which add elements are the exception, as they make an atom an element.

# Example

```rust
# use tableau_taxonomy::structures::atom::Atom;
# use tableau_taxonomy::structures::formula::Formula;
# use tableau_taxonomy::taxonomy::Taxonomy;
let pizza = Atom::from("pizza");
let dish = Atom::from("dish");
let food = Atom::from("food");

let mut taxonomy = Taxonomy::default();
taxonomy.add_elements([&pizza, &dish, &food]);

assert!(taxonomy.add_child(&dish, &pizza).is_ok());
assert!(taxonomy.add_parent(&dish, &food).is_ok());

let ancestors = taxonomy.ancestors(&pizza).expect("pizza is an element");
assert!(ancestors.contains(&dish) && ancestors.contains(&food));

let psi = Formula::and([Formula::from(pizza.clone()), !Formula::from(food.clone())]);
let augmented = taxonomy.infer_from(psi);
assert!(augmented.branches().is_empty());
```
*/

mod closure;
mod constraints;
mod edges;
mod graph;
mod record;

pub use record::TaxonomyRecord;

use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet},
};

use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::atom::Atom,
    types::err::TaxonomyError,
};

/// The record of an element of a taxonomy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    /// The atoms which entail the element.
    children: BTreeSet<Atom>,

    /// The atoms entailed by the element.
    parents: BTreeSet<Atom>,
}

impl Element {
    /// The (immediate) children of the element.
    pub fn children(&self) -> &BTreeSet<Atom> {
        &self.children
    }

    /// The (immediate) parents of the element.
    pub fn parents(&self) -> &BTreeSet<Atom> {
        &self.parents
    }
}

/// A taxonomy.
///
/// A taxonomy is (de)serialized through a [TaxonomyRecord], and a record is only read as a taxonomy if the record is consistent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "TaxonomyRecord", into = "TaxonomyRecord")]
pub struct Taxonomy {
    /// The elements of the taxonomy, with their children and parents.
    elements: BTreeMap<Atom, Element>,

    /// The configuration the taxonomy was built from.
    config: Config,
}

impl Taxonomy {
    /// A taxonomy without any elements, and with the default configuration.
    pub fn new() -> Self {
        Taxonomy::default()
    }

    /// A taxonomy without any elements, with a copy of `config`.
    pub fn from_config(config: &Config) -> Self {
        Taxonomy {
            elements: BTreeMap::default(),
            config: config.clone(),
        }
    }

    /// The configuration of the taxonomy.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A read-only view of the elements of the taxonomy.
    pub fn elements(&self) -> &BTreeMap<Atom, Element> {
        &self.elements
    }

    /// True if `atom` is an element of the taxonomy.
    pub fn contains(&self, atom: impl Borrow<Atom>) -> bool {
        self.elements.contains_key(atom.borrow())
    }

    /// A count of elements in the taxonomy.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the taxonomy has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element of the taxonomy for `atom`, paired with the atom as stored in the taxonomy.
    pub fn get(&self, atom: impl Borrow<Atom>) -> Result<(&Atom, &Element), TaxonomyError> {
        let atom = atom.borrow();
        self.elements
            .get_key_value(atom)
            .ok_or_else(|| TaxonomyError::NotFound(atom.clone()))
    }

    fn element(&self, atom: &Atom) -> Result<&Element, TaxonomyError> {
        self.elements
            .get(atom)
            .ok_or_else(|| TaxonomyError::NotFound(atom.clone()))
    }

    fn element_mut(&mut self, atom: &Atom) -> Result<&mut Element, TaxonomyError> {
        self.elements
            .get_mut(atom)
            .ok_or_else(|| TaxonomyError::NotFound(atom.clone()))
    }

    /// Adds `atom` as an element without children or parents.
    ///
    /// If `atom` is already an element the taxonomy is unchanged, and in particular the children and parents of the element are kept.
    /// Returns true if `atom` was added, and false otherwise.
    pub fn add_element(&mut self, atom: impl Borrow<Atom>) -> bool {
        let atom = atom.borrow();
        match self.elements.contains_key(atom) {
            true => {
                log::debug!(target: targets::TAXONOMY, "Kept existing element {atom}");
                false
            }
            false => {
                log::trace!(target: targets::TAXONOMY, "Added element {atom}");
                self.elements.insert(atom.clone(), Element::default());
                true
            }
        }
    }

    /// Adds each atom in `atoms` as an element, as with [add_element](Taxonomy::add_element).
    pub fn add_elements(&mut self, atoms: impl IntoIterator<Item = impl Borrow<Atom>>) {
        for atom in atoms {
            self.add_element(atom);
        }
    }

    /// Removes `atom` from the taxonomy, together with every edge to or from `atom`.
    ///
    /// Returns the removed element.
    pub fn remove_element(&mut self, atom: impl Borrow<Atom>) -> Result<Element, TaxonomyError> {
        let atom = atom.borrow();
        let element = self
            .elements
            .remove(atom)
            .ok_or_else(|| TaxonomyError::NotFound(atom.clone()))?;

        // A self-loop leaves `atom` among its own neighbours, though `atom` is no longer an element.
        for child in &element.children {
            if let Some(child_element) = self.elements.get_mut(child) {
                child_element.parents.remove(atom);
            }
        }
        for parent in &element.parents {
            if let Some(parent_element) = self.elements.get_mut(parent) {
                parent_element.children.remove(atom);
            }
        }

        log::trace!(target: targets::TAXONOMY, "Removed element {atom}");
        Ok(element)
    }

    /// Removes each atom in `atoms`, as with [remove_element](Taxonomy::remove_element).
    ///
    /// Atoms are removed in order, and removal stops at the first error, keeping any earlier removal.
    pub fn remove_elements(
        &mut self,
        atoms: impl IntoIterator<Item = impl Borrow<Atom>>,
    ) -> Result<(), TaxonomyError> {
        for atom in atoms {
            self.remove_element(atom)?;
        }
        Ok(())
    }
}
