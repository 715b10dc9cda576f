/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to mutation of a [taxonomy](crate::taxonomy)
    pub const TAXONOMY: &str = "taxonomy";

    /// Logs related to [ancestors](crate::taxonomy::Taxonomy::ancestors) and [descendants](crate::taxonomy::Taxonomy::descendants)
    pub const CLOSURE: &str = "closure";

    /// Logs related to [inference](crate::taxonomy::Taxonomy::infer_from)
    pub const INFERENCE: &str = "inference";

    /// Logs related to [disjunctive normal form](crate::structures::formula::Formula::to_dnf)
    pub const DNF: &str = "dnf";

    /// Logs related to [tableau branches](crate::structures::formula::Formula::branches)
    pub const TABLEAU: &str = "tableau";
}
