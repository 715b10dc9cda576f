/*!
Random formulas, for testing.

A [FormulaRandomizer] builds formulas over a fixed collection of atoms, to a bounded depth, with connectives and atoms chosen by some source of randomness.
By default the source is a [MinimalPCG32] seeded by the caller, and so every formula is reproducible from the seed.

```rust
# use tableau_taxonomy::generic::formula_randomizer::FormulaRandomizer;
let mut first = FormulaRandomizer::from_seed(7, &["p", "q", "r"], 3);
let mut second = FormulaRandomizer::from_seed(7, &["p", "q", "r"], 3);

assert_eq!(first.formula(), second.formula());
```
*/

use rand::{Rng, SeedableRng};

use crate::{
    generic::random::MinimalPCG32,
    structures::{atom::Atom, formula::Formula},
};

/// A source of random formulas.
pub struct FormulaRandomizer<R: Rng = MinimalPCG32> {
    atoms: Vec<Atom>,
    max_depth: usize,
    max_width: usize,
    rng: R,
}

impl FormulaRandomizer<MinimalPCG32> {
    /// A randomizer over `names`, seeded with `seed`, building formulas of depth at most `max_depth`.
    pub fn from_seed(seed: u64, names: &[&str], max_depth: usize) -> Self {
        FormulaRandomizer::new(
            MinimalPCG32::seed_from_u64(seed),
            names.iter().map(|name| Atom::from(*name)).collect(),
            max_depth,
        )
    }
}

impl<R: Rng> FormulaRandomizer<R> {
    /// A randomizer over `atoms` using `rng`, building formulas of depth at most `max_depth`.
    ///
    /// Conjunctions and disjunctions have at most three operands.
    pub fn new(rng: R, atoms: Vec<Atom>, max_depth: usize) -> Self {
        FormulaRandomizer {
            atoms,
            max_depth,
            max_width: 3,
            rng,
        }
    }

    /// The atoms formulas are built from.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// A random atom, or the empty conjunction if there are no atoms.
    pub fn atom(&mut self) -> Formula {
        match self.atoms.len() {
            0 => Formula::And(Vec::default()),
            count => {
                let index = self.rng.random_range(0..count);
                Formula::Atom(self.atoms[index].clone())
            }
        }
    }

    /// A random literal, or the empty conjunction if there are no atoms.
    pub fn literal(&mut self) -> Formula {
        let atom = self.atom();
        match self.rng.random_bool(0.5) {
            true => atom,
            false => Formula::negate(atom),
        }
    }

    /// A random formula.
    pub fn formula(&mut self) -> Formula {
        self.formula_to_depth(self.max_depth)
    }

    fn formula_to_depth(&mut self, depth: usize) -> Formula {
        if depth == 0 {
            return self.atom();
        }

        match self.rng.random_range(0..7) {
            0 => self.atom(),
            1 => Formula::negate(self.formula_to_depth(depth - 1)),
            2 | 3 => {
                let width = self.rng.random_range(0..=self.max_width);
                let conjuncts = (0..width).map(|_| self.formula_to_depth(depth - 1)).collect();
                Formula::And(conjuncts)
            }
            4 => {
                let width = self.rng.random_range(0..=self.max_width);
                let disjuncts = (0..width).map(|_| self.formula_to_depth(depth - 1)).collect();
                Formula::Or(disjuncts)
            }
            5 => {
                let a = self.formula_to_depth(depth - 1);
                a.implies(self.formula_to_depth(depth - 1))
            }
            _ => {
                let a = self.formula_to_depth(depth - 1);
                a.iff(self.formula_to_depth(depth - 1))
            }
        }
    }
}
