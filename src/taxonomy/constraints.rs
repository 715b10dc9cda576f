//! A taxonomy as a formula, and inference from a formula with a taxonomy.
//!
//! # Compilation
//!
//! Each edge from a child to a parent is compiled to the implication 'child → parent', and the taxonomy to the conjunction of these implications.
//! Only immediate edges are compiled, as the closure of the taxonomy follows from the immediate edges by (repeated) modus ponens and modus tollens.
//!
//! # Inference
//!
//! Given a conjunction, each conjunct which is a literal forces the value of some other atoms:
//! - If an atom is true, each ancestor of the atom is true.
//! - If an atom is false, each descendant of the atom is false.
//!
//! Inference is narrow: only the immediate conjuncts of a (top-level) conjunction are examined, and any other formula is left unchanged.
//! And, inference is best-effort: a conjunct whose atom is not an element of the taxonomy is skipped.

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

use super::Taxonomy;

impl Taxonomy {
    /// The conjunction of 'child → parent' for each edge of the taxonomy.
    ///
    /// Conjuncts are ordered by child and then parent, and a taxonomy without edges is compiled to the empty conjunction.
    pub fn to_constraints(&self) -> Formula {
        let mut implications = Vec::default();

        for (child, element) in &self.elements {
            for parent in &element.parents {
                implications.push(
                    Formula::Atom(child.clone()).implies(Formula::Atom(parent.clone())),
                );
            }
        }

        Formula::And(implications)
    }

    /// `psi`, augmented with the literals entailed by the literal conjuncts of `psi`.
    ///
    /// If `psi` is a conjunction and some literal is inferred, the conjunction of `psi` and the (conjunction of) inferred literals, ordered and without duplicates.
    /// Otherwise, `psi`.
    pub fn infer_from(&self, psi: Formula) -> Formula {
        let mut inferred = BTreeSet::<CLiteral>::default();

        if let Formula::And(conjuncts) = &psi {
            for literal in conjuncts.iter().filter_map(Formula::as_literal) {
                let forced = match literal.polarity() {
                    true => self.ancestors(literal.atom()),
                    false => self.descendants(literal.atom()),
                };

                match forced {
                    Ok(atoms) => {
                        let polarity = literal.polarity();
                        inferred.extend(atoms.into_iter().map(|atom| CLiteral::new(atom, polarity)));
                    }

                    Err(e) => {
                        log::debug!(target: targets::INFERENCE, "Skipped {literal}: {e}");
                    }
                }
            }
        }

        match inferred.is_empty() {
            true => psi,
            false => {
                log::trace!(target: targets::INFERENCE, "Inferred {} literals", inferred.len());
                Formula::And(vec![psi, Formula::and(inferred.into_iter().map(Formula::from))])
            }
        }
    }
}

#[cfg(test)]
mod constraint_tests {
    use crate::structures::atom::Atom;

    use super::*;

    fn chain() -> (Taxonomy, [Atom; 3]) {
        let [a, b, c] = ["a", "b", "c"].map(Atom::from);
        let mut taxonomy = Taxonomy::new();
        taxonomy.add_elements([&a, &b, &c]);
        assert!(taxonomy.add_parent(&a, &b).is_ok());
        assert!(taxonomy.add_parent(&b, &c).is_ok());
        (taxonomy, [a, b, c])
    }

    #[test]
    fn empty_compiles_to_truth() {
        assert_eq!(Taxonomy::new().to_constraints(), Formula::And(vec![]));
    }

    #[test]
    fn one_implication_per_edge() {
        let (taxonomy, [a, b, c]) = chain();
        assert_eq!(
            taxonomy.to_constraints(),
            Formula::And(vec![
                Formula::from(a).implies(Formula::from(b.clone())),
                Formula::from(b).implies(Formula::from(c)),
            ])
        );
    }

    #[test]
    fn non_conjunction_unchanged() {
        let (taxonomy, [a, _, _]) = chain();
        let psi = Formula::from(a.clone());
        assert_eq!(taxonomy.infer_from(psi.clone()), psi);

        let psi = Formula::from(a.clone()) | Formula::from(a);
        assert_eq!(taxonomy.infer_from(psi.clone()), psi);
    }

    #[test]
    fn nested_literals_ignored() {
        let (taxonomy, [a, _, _]) = chain();
        let psi = Formula::and([Formula::from(a.clone()) | Formula::from(a)]);
        assert_eq!(taxonomy.infer_from(psi.clone()), psi);
    }

    #[test]
    fn unknown_atoms_skipped() {
        let (taxonomy, [a, b, c]) = chain();
        let unknown = Formula::atom("unknown");
        let psi = Formula::and([unknown, Formula::from(a)]);

        let expected = Formula::And(vec![
            psi.clone(),
            Formula::And(vec![Formula::from(b), Formula::from(c)]),
        ]);
        assert_eq!(taxonomy.infer_from(psi), expected);
    }

    #[test]
    fn negative_literals_infer_descendants() {
        let (taxonomy, [a, b, c]) = chain();
        let psi = Formula::and([!Formula::from(c)]);

        let expected = Formula::And(vec![
            psi.clone(),
            Formula::And(vec![!Formula::from(a), !Formula::from(b)]),
        ]);
        assert_eq!(taxonomy.infer_from(psi), expected);
    }

    #[test]
    fn nothing_inferred_from_roots_and_leaves() {
        let (taxonomy, [a, _, c]) = chain();
        let psi = Formula::and([Formula::from(c), !Formula::from(a)]);
        assert_eq!(taxonomy.infer_from(psi.clone()), psi);
    }
}
