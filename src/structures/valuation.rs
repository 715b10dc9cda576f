/*!
A (partial) function from atoms to truth values.

If all atoms of interest are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The valuation trait is implemented for ordered and hashed maps from atoms to booleans, and for [branches](crate::structures::branch::Branch).
And, any valuation may be used to [evaluate](crate::structures::formula::Formula::evaluate) a formula.

```rust
# use std::collections::BTreeMap;
# use tableau_taxonomy::structures::atom::Atom;
# use tableau_taxonomy::structures::valuation::Valuation;
let mut valuation = BTreeMap::new();
valuation.insert(Atom::from("p"), true);

assert_eq!(valuation.value_of(&Atom::from("p")), Some(true));
assert_eq!(valuation.value_of(&Atom::from("q")), None);
```
*/

use std::collections::{BTreeMap, HashMap};

use super::atom::Atom;

/// A valuation is something which stores some value of an atom, or the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom has some value.
    fn value_of(&self, atom: &Atom) -> Option<bool>;
}

impl Valuation for BTreeMap<Atom, bool> {
    fn value_of(&self, atom: &Atom) -> Option<bool> {
        self.get(atom).copied()
    }
}

impl<S: std::hash::BuildHasher> Valuation for HashMap<Atom, bool, S> {
    fn value_of(&self, atom: &Atom) -> Option<bool> {
        self.get(atom).copied()
    }
}

impl<V: Valuation> Valuation for &V {
    fn value_of(&self, atom: &Atom) -> Option<bool> {
        (*self).value_of(atom)
    }
}
