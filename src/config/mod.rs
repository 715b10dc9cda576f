/*!
Configuration of a taxonomy.

All configuration for a taxonomy is contained within a [Config], and a taxonomy keeps a copy of the configuration it was built from.

```rust
# use tableau_taxonomy::config::{Config, CyclePolicy};
# use tableau_taxonomy::taxonomy::Taxonomy;
let mut config = Config::default();
assert!(config.cycle_policy.set(CyclePolicy::Reject));

let taxonomy = Taxonomy::from_config(&config);
assert_eq!(taxonomy.config().cycle_policy.value, CyclePolicy::Reject);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod cycle_policy;
pub use cycle_policy::CyclePolicy;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether edges which introduce a cycle are recorded.
    pub cycle_policy: ConfigOption<CyclePolicy>,
}

impl Default for Config {
    /// The default configuration permits cycles, leaving the shape of a taxonomy to the caller.
    fn default() -> Self {
        Config {
            cycle_policy: ConfigOption {
                name: "cycle_policy",
                min: CyclePolicy::MIN,
                max: CyclePolicy::MAX,
                value: CyclePolicy::Permit,
            },
        }
    }
}
