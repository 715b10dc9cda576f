use crate::structures::atom::Atom;

use super::{ABLiteral, Literal};

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> &Atom {
        &self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }
}

// Traits

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

// From

impl From<Atom> for ABLiteral {
    fn from(atom: Atom) -> Self {
        ABLiteral::new(atom, true)
    }
}
