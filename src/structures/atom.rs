/*!
An atom (aka. a 'propositional variable').

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.
The name *is* the identity of an atom: two atoms are equal if and only if their names are equal, and atoms are ordered by name.

```rust
# use tableau_taxonomy::structures::atom::Atom;
let pizza = Atom::from("pizza");
let also_pizza = Atom::new(String::from("pizza"));

assert_eq!(pizza, also_pizza);
assert_eq!(pizza.name(), "pizza");
assert!(Atom::from("dish") < pizza);
```

Atoms serve both as the leaves of a [formula](crate::structures::formula) and as the vertices of a [taxonomy](crate::taxonomy).

# Notes
- An atom is serialized as its name, and so atoms may be used as the keys of a map in formats such as JSON.
- The name is held behind an [Arc], so cloning an atom is cheap and formulas built from atoms may be shared between threads.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An atom, aka. a 'variable', identified by name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom {
    name: Arc<str>,
}

impl Atom {
    /// A fresh atom with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Atom { name: name.into() }
    }

    /// The name of the atom.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Atom {
    fn from(value: &str) -> Self {
        Atom::new(value)
    }
}

impl From<String> for Atom {
    fn from(value: String) -> Self {
        Atom::new(value)
    }
}

impl From<&Atom> for Atom {
    fn from(value: &Atom) -> Self {
        value.clone()
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::fmt::Debug for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod atom_tests {
    use super::*;

    #[test]
    fn identity_is_name() {
        let a = Atom::from("a");
        let b = Atom::from(String::from("a"));
        assert_eq!(a, b);
        assert_ne!(a, Atom::from("b"));
    }

    #[test]
    fn ordered_by_name() {
        let mut atoms = vec![Atom::from("food"), Atom::from("dish"), Atom::from("pizza")];
        atoms.sort();
        let names = atoms.iter().map(|atom| atom.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["dish", "food", "pizza"]);
    }

    #[test]
    fn serialized_as_name() {
        let pizza = Atom::from("pizza");
        assert_eq!(serde_json::to_string(&pizza).ok(), Some(String::from("\"pizza\"")));
        assert_eq!(serde_json::from_str::<Atom>("\"pizza\"").ok(), Some(pizza));
    }
}
