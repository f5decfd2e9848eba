//! Forage budget engine: grazing days from paddock forage and herd demand.
//!
//! The engine converts livestock groups into standardized demand units,
//! compares daily intake against the forage available above the residual
//! target, and projects how long the paddock can carry the herd.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐    ┌──────────┐    ┌────────────┐    ┌────────────┐
//! │ forage-tables │ ─▶ │ registry │ ─▶ │   demand   │ ─▶ │ projection │ ─▶ report
//! └───────────────┘    └──────────┘    └────────────┘    └────────────┘
//!        ratings        AE / DSE per      daily demand,     forage remaining
//!                       record            grazing days      per day
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Species ledgers and animal-group records
//! - [`conversion`]: AE and DSE ratings, including goat weight scaling
//! - [`paddock`]: Paddock forage figures
//! - [`demand`]: Demand totals, daily demand and grazing days
//! - [`projection`]: Depletion series for charting
//! - [`config`]: TOML scenarios
//! - [`output`]: Serializable reports and text summary

pub mod config;
pub mod conversion;
pub mod demand;
pub mod error;
pub mod output;
pub mod paddock;
pub mod projection;
pub mod registry;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use config::{default_config_toml, ConfigError, ScenarioConfig};
pub use conversion::{cattle_rating, goat_rating, sheep_rating};
pub use demand::{grazing_days, Totals};
pub use error::{BudgetError, ValidationError};
pub use output::{
    format_number, format_with_decimals, read_report, write_report, BudgetReport, OutputError,
};
pub use paddock::PaddockState;
pub use projection::{
    project_depletion, projection_horizon, ChartSeries, MAX_PROJECTION_DAYS, PROJECTION_OVERSHOOT,
};
pub use registry::{
    CattleGroup, GoatGroup, HerdRecord, HerdRegistry, Ledger, NewCattle, NewGoat, NewSheep,
    RecordId, RecordInput, SheepGroup, Species,
};

pub use forage_tables::{
    CattleCategory, GoatBand, GoatClass, IntakeCoefficients, LookupError, ProductivityLevel,
    ReferenceTables, SheepClass,
};

use std::path::Path;

/// The forage budget for one paddock and the herd grazing it.
///
/// Owns all session state. The presentation layer holds a `ForageBudget`
/// and drives it through the add/remove/clear and `set_paddock` calls; every
/// derived figure is recomputed from the ledgers on each query.
#[derive(Debug, Clone, Default)]
pub struct ForageBudget {
    /// Current paddock figures
    paddock: PaddockState,
    /// Animal-group ledgers
    herd: HerdRegistry,
}

impl ForageBudget {
    /// Creates a budget for the given paddock with an empty herd.
    pub fn new(paddock: PaddockState) -> Result<Self, BudgetError> {
        paddock.validate()?;
        Ok(Self {
            paddock,
            herd: HerdRegistry::new(),
        })
    }

    /// Creates a budget with the default paddock and an empty herd.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Builds a budget from a scenario, validating every group as it is added.
    pub fn from_scenario(scenario: &ScenarioConfig) -> Result<Self, BudgetError> {
        let mut budget = Self::new(scenario.paddock)?;
        for cattle in &scenario.cattle {
            budget.add_cattle(cattle.clone())?;
        }
        for sheep in &scenario.sheep {
            budget.add_sheep(sheep.clone())?;
        }
        for goat in &scenario.goats {
            budget.add_goat(goat.clone())?;
        }
        tracing::info!(
            "Loaded scenario with {} cattle, {} sheep and {} goat groups",
            budget.herd.cattle.len(),
            budget.herd.sheep.len(),
            budget.herd.goats.len()
        );
        Ok(budget)
    }

    /// Builds a budget from a scenario file.
    pub fn from_scenario_file(path: &Path) -> Result<Self, BudgetError> {
        let scenario = ScenarioConfig::from_file(path)?;
        Self::from_scenario(&scenario)
    }

    /// Captures the current paddock and herd as a scenario.
    pub fn to_scenario(&self) -> ScenarioConfig {
        ScenarioConfig {
            paddock: self.paddock,
            cattle: self
                .herd
                .cattle
                .list()
                .iter()
                .map(|g| NewCattle::new(&g.type_label, g.category, g.number as i64, g.productivity))
                .collect(),
            sheep: self
                .herd
                .sheep
                .list()
                .iter()
                .map(|g| NewSheep::new(&g.type_label, g.sheep_class, g.number as i64))
                .collect(),
            goats: self
                .herd
                .goats
                .list()
                .iter()
                .map(|g| NewGoat::new(&g.type_label, g.goat_class, g.number as i64, g.weight_kg))
                .collect(),
        }
    }

    // ---------------------------------------------------------------------
    // Input surface
    // ---------------------------------------------------------------------

    /// Replaces the paddock figures.
    ///
    /// Negative or non-finite figures are rejected and leave the previous
    /// paddock in place. A residual above the standing forage is accepted.
    pub fn set_paddock(&mut self, paddock: PaddockState) -> Result<(), BudgetError> {
        paddock.validate()?;
        if paddock.residual_exceeds_standing() {
            tracing::warn!(
                "Residual {} kg/ha exceeds standing {} kg/ha; no forage is available",
                paddock.residual_dm,
                paddock.standing_dm
            );
        }
        tracing::debug!(
            "Paddock set: standing {} kg/ha, area {} ha, residual {} kg/ha, {}",
            paddock.standing_dm,
            paddock.area,
            paddock.residual_dm,
            paddock.productivity_level
        );
        self.paddock = paddock;
        Ok(())
    }

    /// Adds a cattle group and returns its id.
    pub fn add_cattle(&mut self, input: NewCattle) -> Result<RecordId, BudgetError> {
        let id = self.herd.cattle.add(input)?;
        tracing::debug!("Added cattle group {}", id);
        Ok(id)
    }

    /// Adds a sheep group and returns its id.
    pub fn add_sheep(&mut self, input: NewSheep) -> Result<RecordId, BudgetError> {
        let id = self.herd.sheep.add(input)?;
        tracing::debug!("Added sheep group {}", id);
        Ok(id)
    }

    /// Adds a goat group and returns its id.
    pub fn add_goat(&mut self, input: NewGoat) -> Result<RecordId, BudgetError> {
        let id = self.herd.goats.add(input)?;
        tracing::debug!("Added goat group {}", id);
        Ok(id)
    }

    /// Removes a group; unknown ids are ignored.
    ///
    /// Returns whether a group was removed.
    pub fn remove_animal(&mut self, species: Species, id: RecordId) -> bool {
        let removed = self.herd.remove(species, id);
        if removed {
            tracing::debug!("Removed {} group {}", species, id);
        } else {
            tracing::debug!("No {} group {} to remove", species, id);
        }
        removed
    }

    /// Empties one species' ledger.
    pub fn clear_ledger(&mut self, species: Species) {
        let count = self.herd.len(species);
        self.herd.clear(species);
        tracing::info!("Cleared {} {} groups", count, species);
    }

    // ---------------------------------------------------------------------
    // Output surface
    // ---------------------------------------------------------------------

    /// Current paddock figures.
    pub fn paddock(&self) -> &PaddockState {
        &self.paddock
    }

    /// All three ledgers.
    pub fn herd(&self) -> &HerdRegistry {
        &self.herd
    }

    /// Cattle groups in insertion order.
    pub fn cattle(&self) -> &[CattleGroup] {
        self.herd.cattle.list()
    }

    /// Sheep groups in insertion order.
    pub fn sheep(&self) -> &[SheepGroup] {
        self.herd.sheep.list()
    }

    /// Goat groups in insertion order.
    pub fn goats(&self) -> &[GoatGroup] {
        self.herd.goats.list()
    }

    /// AE and DSE totals.
    pub fn totals(&self) -> Totals {
        Totals::from_registry(&self.herd)
    }

    pub fn total_ae(&self) -> f64 {
        self.herd.cattle.total_demand()
    }

    pub fn total_sheep_dse(&self) -> f64 {
        self.herd.sheep.total_demand()
    }

    pub fn total_goat_dse(&self) -> f64 {
        self.herd.goats.total_demand()
    }

    pub fn total_dse(&self) -> f64 {
        self.total_sheep_dse() + self.total_goat_dse()
    }

    /// Standing dry matter across the paddock (kg).
    pub fn total_standing_forage(&self) -> f64 {
        self.paddock.total_standing_forage()
    }

    /// Residual dry matter across the paddock (kg).
    pub fn total_residual_forage(&self) -> f64 {
        self.paddock.total_residual_forage()
    }

    /// Dry matter available above the residual (kg), never negative.
    pub fn available_forage(&self) -> f64 {
        self.paddock.available_forage()
    }

    /// Daily dry matter demand of the whole herd (kg/day).
    pub fn daily_demand(&self) -> f64 {
        self.totals().daily_demand(self.paddock.productivity_level)
    }

    /// Days the available forage lasts; zero when the herd has no demand.
    pub fn grazing_days(&self) -> f64 {
        grazing_days(self.available_forage(), self.daily_demand())
    }

    /// Forage remaining per day, for charting.
    pub fn project_depletion(&self) -> ChartSeries {
        project_depletion(
            self.total_standing_forage(),
            self.total_residual_forage(),
            self.daily_demand(),
        )
    }

    /// Snapshot of every figure for presentation.
    pub fn report(&self) -> BudgetReport {
        let totals = self.totals();
        let daily_demand = totals.daily_demand(self.paddock.productivity_level);
        let available_forage = self.available_forage();
        BudgetReport {
            paddock: self.paddock,
            cattle: self.cattle().to_vec(),
            sheep: self.sheep().to_vec(),
            goats: self.goats().to_vec(),
            totals,
            total_standing_forage: self.total_standing_forage(),
            total_residual_forage: self.total_residual_forage(),
            available_forage,
            daily_demand,
            grazing_days: grazing_days(available_forage, daily_demand),
            chart: self.project_depletion(),
        }
    }
}
