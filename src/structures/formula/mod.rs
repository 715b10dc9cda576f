/*!
Formulas, as trees of connectives over atoms.

A formula is one of a small, closed, collection of variants:
- An [atom](Formula::Atom), the leaf of every formula tree.
- A [negation](Formula::Not) of some formula.
- A [conjunction](Formula::And) or [disjunction](Formula::Or) of some (possibly empty) collection of formulas.
- An [implication](Formula::Implies) or [equivalence](Formula::Equiv) between two formulas.

The empty conjunction is interpreted as true, and the empty disjunction as false.

Every formula supports two algorithms, each made of a pair of mutually recursive methods:
- Conversion to disjunctive normal form, through [to_dnf](Formula::to_dnf) and [negated_dnf](Formula::negated_dnf).
- Decomposition into the open branches of an analytic tableau, through [branches](Formula::branches) and [negated_branches](Formula::negated_branches).

In each case the 'negated' method computes the result for the negation of the formula, and is used by composite formulas to push a negation towards the leaves during a (top-down) pass over the tree.
The recursion bottoms out at an atom, for which:
- The DNF is the atom, and the negated DNF is the negation of the atom.
- There is exactly one branch, on which the atom is asserted, and exactly one negated branch, on which the atom is negated.

As an atom cannot contradict itself, an atom never reports a closed tableau.

Formulas are values, and no method mutates a formula in place.

```rust
# use tableau_taxonomy::structures::formula::Formula;
let p = Formula::atom("p");
let q = Formula::atom("q");

let formula = !(p.clone() & q.clone());
assert_eq!(formula.to_dnf(), !p.clone() | !q.clone());

let contradiction = p.clone() & !p.clone();
assert!(contradiction.branches().is_empty());
```
*/

mod dnf;
mod tableau;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// A formula, as a tree of connectives over atoms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// An atom.
    Atom(Atom),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// The conjunction of some formulas, true if empty.
    And(Vec<Formula>),

    /// The disjunction of some formulas, false if empty.
    Or(Vec<Formula>),

    /// The first formula implies the second.
    Implies(Box<Formula>, Box<Formula>),

    /// The first formula is equivalent to the second.
    Equiv(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// The formula made of a single atom.
    pub fn atom(atom: impl Into<Atom>) -> Self {
        Formula::Atom(atom.into())
    }

    /// The negation of `formula`.
    pub fn negate(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    /// The conjunction of `formulas`.
    pub fn and(formulas: impl IntoIterator<Item = Formula>) -> Self {
        Formula::And(formulas.into_iter().collect())
    }

    /// The disjunction of `formulas`.
    pub fn or(formulas: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(formulas.into_iter().collect())
    }

    /// The implication from `self` to `consequent`.
    pub fn implies(self, consequent: Formula) -> Self {
        Formula::Implies(Box::new(self), Box::new(consequent))
    }

    /// The equivalence of `self` and `other`.
    pub fn iff(self, other: Formula) -> Self {
        Formula::Equiv(Box::new(self), Box::new(other))
    }

    /// True if the formula is an atom.
    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    /// The formula as a literal, if the formula is an atom or the negation of an atom.
    pub fn as_literal(&self) -> Option<CLiteral> {
        match self {
            Formula::Atom(atom) => Some(CLiteral::new(atom.clone(), true)),
            Formula::Not(inner) => match inner.as_ref() {
                Formula::Atom(atom) => Some(CLiteral::new(atom.clone(), false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// The immediate subformulas of the formula.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Formula::Atom(_) => Vec::default(),
            Formula::Not(inner) => vec![inner.as_ref()],
            Formula::And(formulas) | Formula::Or(formulas) => formulas.iter().collect(),
            Formula::Implies(a, b) | Formula::Equiv(a, b) => vec![a.as_ref(), b.as_ref()],
        }
    }

    /// The atoms which occur in the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::default();
        let mut to_check = vec![self];

        while let Some(formula) = to_check.pop() {
            match formula {
                Formula::Atom(atom) => {
                    atoms.insert(atom.clone());
                }
                _ => to_check.extend(formula.children()),
            }
        }

        atoms
    }

    /// The value of the formula on `valuation`.
    ///
    /// None, if the value of the formula depends on some atom without a value.
    /// Though, as evaluation is lazy, a formula may have a value even if some atoms do not.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        match self {
            Formula::Atom(atom) => valuation.value_of(atom),

            Formula::Not(inner) => inner.evaluate(valuation).map(|value| !value),

            Formula::And(formulas) => {
                let mut value = Some(true);
                for formula in formulas {
                    match formula.evaluate(valuation) {
                        Some(false) => return Some(false),
                        Some(true) => {}
                        None => value = None,
                    }
                }
                value
            }

            Formula::Or(formulas) => {
                let mut value = Some(false);
                for formula in formulas {
                    match formula.evaluate(valuation) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => value = None,
                    }
                }
                value
            }

            Formula::Implies(a, b) => match (a.evaluate(valuation), b.evaluate(valuation)) {
                (Some(false), _) | (_, Some(true)) => Some(true),
                (Some(true), Some(false)) => Some(false),
                _ => None,
            },

            Formula::Equiv(a, b) => {
                let a_value = a.evaluate(valuation)?;
                let b_value = b.evaluate(valuation)?;
                Some(a_value == b_value)
            }
        }
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Formula::Atom(atom)
    }
}

impl From<CLiteral> for Formula {
    fn from(literal: CLiteral) -> Self {
        let polarity = literal.polarity();
        let atom = Formula::Atom(literal.atom().clone());
        match polarity {
            true => atom,
            false => Formula::negate(atom),
        }
    }
}

impl std::ops::Not for Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        Formula::negate(self)
    }
}

impl std::ops::BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Self) -> Self::Output {
        Formula::And(vec![self, rhs])
    }
}

impl std::ops::BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Self) -> Self::Output {
        Formula::Or(vec![self, rhs])
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn write_joined(
            f: &mut std::fmt::Formatter,
            formulas: &[Formula],
            connective: &str,
            empty: &str,
        ) -> std::fmt::Result {
            match formulas {
                [] => write!(f, "{empty}"),
                [formula] => write!(f, "{formula}"),
                _ => {
                    write!(f, "(")?;
                    for (index, formula) in formulas.iter().enumerate() {
                        if index > 0 {
                            write!(f, " {connective} ")?;
                        }
                        write!(f, "{formula}")?;
                    }
                    write!(f, ")")
                }
            }
        }

        match self {
            Formula::Atom(atom) => write!(f, "{atom}"),
            Formula::Not(inner) => write!(f, "-{inner}"),
            Formula::And(formulas) => write_joined(f, formulas, "&", "true"),
            Formula::Or(formulas) => write_joined(f, formulas, "|", "false"),
            Formula::Implies(a, b) => write!(f, "({a} -> {b})"),
            Formula::Equiv(a, b) => write!(f, "({a} <-> {b})"),
        }
    }
}

#[cfg(test)]
mod formula_tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn literal_views() {
        let p = Formula::atom("p");
        assert_eq!(p.as_literal(), Some(CLiteral::new(Atom::from("p"), true)));
        assert_eq!(
            (!p.clone()).as_literal(),
            Some(CLiteral::new(Atom::from("p"), false))
        );
        assert_eq!((!!p.clone()).as_literal(), None);
        assert_eq!((p.clone() & p).as_literal(), None);
    }

    #[test]
    fn literal_round_trip() {
        let literal = CLiteral::new(Atom::from("q"), false);
        assert_eq!(Formula::from(literal.clone()).as_literal(), Some(literal));
    }

    #[test]
    fn atoms_of_nested() {
        let formula = Formula::atom("p").implies(Formula::atom("q") | !Formula::atom("p"));
        let names = formula
            .atoms()
            .into_iter()
            .map(|atom| atom.name().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["p", "q"]);
    }

    #[test]
    fn lazy_evaluation() {
        let mut valuation = HashMap::new();
        valuation.insert(Atom::from("p"), false);

        let p = Formula::atom("p");
        let q = Formula::atom("q");

        assert_eq!((p.clone() & q.clone()).evaluate(&valuation), Some(false));
        assert_eq!((p.clone() | q.clone()).evaluate(&valuation), None);
        assert_eq!(p.clone().implies(q.clone()).evaluate(&valuation), Some(true));
        assert_eq!(p.iff(q).evaluate(&valuation), None);
    }

    #[test]
    fn constants() {
        let valuation = HashMap::<Atom, bool>::new();
        assert_eq!(Formula::And(vec![]).evaluate(&valuation), Some(true));
        assert_eq!(Formula::Or(vec![]).evaluate(&valuation), Some(false));
    }

    #[test]
    fn display() {
        let formula = (Formula::atom("p") & !Formula::atom("q")).implies(Formula::Or(vec![]));
        assert_eq!(formula.to_string(), "((p & -q) -> false)");
    }
}
