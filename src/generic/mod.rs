//! Generic items, not specific to formulas or taxonomies.

pub mod formula_randomizer;
pub mod random;
