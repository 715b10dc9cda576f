/*!
A branch of an analytic tableau.

A branch maps atoms to polarities, where `true` records the atom is asserted and `false` records the atom is negated.
Read as a formula, a branch is the conjunction of its literals.

A branch is *closed* if some atom would be given both polarities.
The structure does not permit this: [insert](Branch::insert) and [merge](Branch::merge) refuse to close a branch, and so every [Branch] is open.

```rust
# use tableau_taxonomy::structures::atom::Atom;
# use tableau_taxonomy::structures::branch::Branch;
# use tableau_taxonomy::structures::literal::{CLiteral, Literal};
let p = Atom::from("p");
let q = Atom::from("q");

let p_branch = Branch::from(CLiteral::new(p.clone(), true));
let q_branch = Branch::from(CLiteral::new(q.clone(), false));
let not_p_branch = Branch::from(CLiteral::new(p.clone(), false));

let merged = p_branch.merge(&q_branch).expect("open");
assert_eq!(merged.len(), 2);

assert!(p_branch.merge(&not_p_branch).is_none());
```
*/

use std::collections::BTreeMap;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// An open tableau branch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Branch {
    assignments: BTreeMap<Atom, bool>,
}

impl Branch {
    /// Adds `literal` to the branch.
    ///
    /// Returns false and leaves the branch unchanged if the atom of the literal is already present with the opposite polarity, and true otherwise.
    pub fn insert(&mut self, literal: CLiteral) -> bool {
        match self.assignments.get(literal.atom()) {
            Some(polarity) => *polarity == literal.polarity(),
            None => {
                let polarity = literal.polarity();
                self.assignments.insert(literal.atom().clone(), polarity);
                true
            }
        }
    }

    /// The union of two branches, if the union is open.
    pub fn merge(&self, other: &Branch) -> Option<Branch> {
        // Iterate over the smaller of the two.
        let (mut merged, smaller) = match self.len() < other.len() {
            true => (other.clone(), self),
            false => (self.clone(), other),
        };

        for (atom, polarity) in &smaller.assignments {
            match merged.assignments.get(atom) {
                Some(existing) if existing != polarity => return None,
                Some(_) => {}
                None => {
                    merged.assignments.insert(atom.clone(), *polarity);
                }
            }
        }

        Some(merged)
    }

    /// An iterator over the literals of the branch, in literal order.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.assignments
            .iter()
            .map(|(atom, polarity)| CLiteral::new(atom.clone(), *polarity))
    }

    /// A count of atoms on the branch.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True if no atom is on the branch, in which case the branch is (vacuously) satisfied by any valuation.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// The underlying map from atoms to polarities.
    pub fn assignments(&self) -> &BTreeMap<Atom, bool> {
        &self.assignments
    }
}

impl Valuation for Branch {
    /// The polarity of `atom` on the branch, if the atom is on the branch.
    fn value_of(&self, atom: &Atom) -> Option<bool> {
        self.assignments.get(atom).copied()
    }
}

impl From<CLiteral> for Branch {
    fn from(literal: CLiteral) -> Self {
        let mut assignments = BTreeMap::new();
        let polarity = literal.polarity();
        assignments.insert(literal.atom().clone(), polarity);
        Branch { assignments }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, literal) in self.literals().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{literal}")?;
        }
        write!(f, "}}")
    }
}

/// The pairwise merge of two collections of branches, discarding any closed merge.
///
/// In other words, the branches of the conjunction of two formulas whose branches are `left` and `right`.
pub fn product(left: &[Branch], right: &[Branch]) -> Vec<Branch> {
    let mut merged = Vec::with_capacity(left.len() * right.len());
    for l in left {
        for r in right {
            if let Some(branch) = l.merge(r) {
                merged.push(branch);
            }
        }
    }
    merged
}

#[cfg(test)]
mod branch_tests {
    use super::*;

    fn literal(name: &str, polarity: bool) -> CLiteral {
        CLiteral::new(Atom::from(name), polarity)
    }

    #[test]
    fn insert_refuses_closure() {
        let mut branch = Branch::from(literal("p", true));
        assert!(branch.insert(literal("p", true)));
        assert!(!branch.insert(literal("p", false)));
        assert_eq!(branch.value_of(&Atom::from("p")), Some(true));
        assert_eq!(branch.len(), 1);
    }

    #[test]
    fn merge_is_symmetric() {
        let mut a = Branch::from(literal("p", true));
        a.insert(literal("q", false));
        let b = Branch::from(literal("r", true));

        assert_eq!(a.merge(&b), b.merge(&a));
        assert_eq!(a.merge(&b).map(|m| m.len()), Some(3));
    }

    #[test]
    fn product_discards_closed() {
        let left = vec![
            Branch::from(literal("p", true)),
            Branch::from(literal("p", false)),
        ];
        let right = vec![Branch::from(literal("p", true))];

        let merged = product(&left, &right);
        assert_eq!(merged, vec![Branch::from(literal("p", true))]);
    }

    #[test]
    fn display() {
        let mut branch = Branch::from(literal("q", false));
        branch.insert(literal("p", true));
        assert_eq!(branch.to_string(), "{p, -q}");
    }
}
