/*!
Persistence of a taxonomy.

A taxonomy is written and read through serde as a [TaxonomyRecord], made of the cycle policy of the taxonomy and the children and parents of each element.

For example, as JSON:

```rust
# use tableau_taxonomy::structures::atom::Atom;
# use tableau_taxonomy::taxonomy::Taxonomy;
let [pizza, dish] = ["pizza", "dish"].map(Atom::from);

let mut taxonomy = Taxonomy::default();
taxonomy.add_elements([&pizza, &dish]);
assert!(taxonomy.add_parent(&pizza, &dish).is_ok());

let json = serde_json::to_string(&taxonomy).expect("written");
assert_eq!(
    json,
    r#"{"cycle_policy":"permit","elements":{"dish":{"children":["pizza"],"parents":[]},"pizza":{"children":[],"parents":["dish"]}}}"#
);
```

A record is read as a taxonomy only if the record is consistent:
- Every child and parent of an element is an element, else [NotFound](TaxonomyError::NotFound).
- Every edge is noted at both ends, else [OneSidedEdge](TaxonomyError::OneSidedEdge).
- If the policy rejects cycles, no edge closes a cycle, else [Cycle](TaxonomyError::Cycle).
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    config::{Config, CyclePolicy},
    misc::log::targets::{self},
    structures::atom::Atom,
    types::err::TaxonomyError,
};

use super::{Element, Taxonomy};

/// A taxonomy, as written and read.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaxonomyRecord {
    #[serde(default = "default_cycle_policy")]
    cycle_policy: CyclePolicy,

    elements: BTreeMap<Atom, Element>,
}

fn default_cycle_policy() -> CyclePolicy {
    Config::default().cycle_policy.value
}

impl From<Taxonomy> for TaxonomyRecord {
    fn from(taxonomy: Taxonomy) -> Self {
        TaxonomyRecord {
            cycle_policy: taxonomy.config.cycle_policy.value,
            elements: taxonomy.elements,
        }
    }
}

impl TryFrom<TaxonomyRecord> for Taxonomy {
    type Error = TaxonomyError;

    fn try_from(record: TaxonomyRecord) -> Result<Self, Self::Error> {
        let elements = &record.elements;

        for (atom, element) in elements {
            for child in &element.children {
                let child_element = elements
                    .get(child)
                    .ok_or_else(|| TaxonomyError::NotFound(child.clone()))?;

                if !child_element.parents.contains(atom) {
                    return Err(TaxonomyError::OneSidedEdge {
                        parent: atom.clone(),
                        child: child.clone(),
                    });
                }
            }

            for parent in &element.parents {
                let parent_element = elements
                    .get(parent)
                    .ok_or_else(|| TaxonomyError::NotFound(parent.clone()))?;

                if !parent_element.children.contains(atom) {
                    return Err(TaxonomyError::OneSidedEdge {
                        parent: parent.clone(),
                        child: atom.clone(),
                    });
                }
            }
        }

        let mut config = Config::default();
        config.cycle_policy.set(record.cycle_policy);

        // Edges are added anew, so the cycle policy applies to the record as to any revision.
        let mut taxonomy = Taxonomy::from_config(&config);
        taxonomy.add_elements(elements.keys());
        for (child, element) in elements {
            taxonomy.add_parents(child, &element.parents)?;
        }

        log::trace!(target: targets::TAXONOMY, "Read taxonomy of {} elements", taxonomy.len());
        Ok(taxonomy)
    }
}
