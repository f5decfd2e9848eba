//! Sample scenarios for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers from other
//! crates.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // forage-budget = { path = "../forage-budget", features = ["test-fixtures"] }
//!
//! use forage_budget::fixtures;
//!
//! let budget = fixtures::reference_budget();
//! assert!(budget.grazing_days() > 143.0);
//! ```

use crate::{ForageBudget, ScenarioConfig};

/// Returns the mixed-species sample scenario.
///
/// Contains:
/// - a 24 ha High-productivity paddock
/// - 2 cattle groups (breeders, yearling steers)
/// - 2 sheep groups (ewes with lambs, wethers)
/// - 2 goat groups, one below and one above its weight band
pub fn sample_scenario() -> ScenarioConfig {
    let toml = include_str!("../tests/fixtures/sample_scenario.toml");
    ScenarioConfig::from_str(toml).expect("Failed to parse sample_scenario.toml")
}

/// Returns the single-group reference scenario: 20 High-productivity
/// "Females 2-3 years" on the default paddock.
pub fn reference_scenario() -> ScenarioConfig {
    let toml = include_str!("../tests/fixtures/reference_scenario.toml");
    ScenarioConfig::from_str(toml).expect("Failed to parse reference_scenario.toml")
}

/// Builds a budget from [`sample_scenario`].
pub fn sample_budget() -> ForageBudget {
    ForageBudget::from_scenario(&sample_scenario()).expect("Sample scenario should be valid")
}

/// Builds a budget from [`reference_scenario`].
pub fn reference_budget() -> ForageBudget {
    ForageBudget::from_scenario(&reference_scenario()).expect("Reference scenario should be valid")
}
