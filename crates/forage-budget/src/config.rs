//! Scenario loading.
//!
//! A scenario is a paddock plus the animal groups grazing it, stored as a
//! TOML file. Every section is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::paddock::PaddockState;
use crate::registry::{NewCattle, NewGoat, NewSheep};

/// Complete scenario configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Paddock figures
    #[serde(default)]
    pub paddock: PaddockState,
    /// Cattle groups, in entry order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cattle: Vec<NewCattle>,
    /// Sheep groups, in entry order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sheep: Vec<NewSheep>,
    /// Goat groups, in entry order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goats: Vec<NewGoat>,
}

impl ScenarioConfig {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the scenario as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the scenario to a TOML file.
    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Total number of animal groups across all species.
    pub fn group_count(&self) -> usize {
        self.cattle.len() + self.sheep.len() + self.goats.len()
    }
}

/// Errors that can occur while loading or saving a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading or writing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML (includes unknown table labels)
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Error serializing TOML
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Generates a starter scenario file with one group of each species.
pub fn default_config_toml() -> String {
    r#"# Forage Budget Scenario

[paddock]
# Total standing dry matter (kg/ha)
standing_dm = 5000.0
# Paddock area (ha)
area = 10.0
# Residual dry matter to leave behind (kg/ha)
residual_dm = 1000.0
# High, Moderate or Low; selects the daily intake coefficients
productivity_level = "Moderate"

[[cattle]]
type_label = "Heifers"
category = "Females 2-3 years"
number = 20
productivity = "High"

[[sheep]]
type_label = "Ewes"
sheep_class = "Adult Dry Sheep (Maintain Weight) 50kg CS2"
number = 100

[[goats]]
type_label = "Does"
goat_class = "Dry doe"
number = 30
weight_kg = 35.0
"#
    .to_string()
}
