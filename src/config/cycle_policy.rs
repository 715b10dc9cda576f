use serde::{Deserialize, Serialize};

/// What to do when an edge would introduce a cycle to a taxonomy.
///
/// A taxonomy is intended to be acyclic, as 'child entails parent' around a cycle makes every element of the cycle equivalent.
/// Still, the closure of a cyclic taxonomy is well defined --- everything reachable in one or more steps --- and so cycles may be permitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Record the edge.
    Permit,

    /// Refuse the edge with a [cycle error](crate::types::err::TaxonomyError::Cycle).
    Reject,
}

impl CyclePolicy {
    pub const MIN: CyclePolicy = CyclePolicy::Permit;
    pub const MAX: CyclePolicy = CyclePolicy::Reject;
}

impl std::fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Permit => write!(f, "permit"),
            Self::Reject => write!(f, "reject"),
        }
    }
}
