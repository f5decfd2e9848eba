//! Aggregation of herd demand against paddock forage.

use forage_tables::ProductivityLevel;
use serde::{Deserialize, Serialize};

use crate::registry::HerdRegistry;

/// Demand totals across all ledgers, recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Animal Equivalents from the cattle ledger
    pub total_ae: f64,
    /// Dry Sheep Equivalents from sheep and goats together
    pub total_dse: f64,
    /// DSE from the sheep ledger
    pub sheep_dse: f64,
    /// DSE from the goat ledger
    pub goat_dse: f64,
}

impl Totals {
    /// Sums the cached record totals of every ledger.
    pub fn from_registry(herd: &HerdRegistry) -> Self {
        let sheep_dse = herd.sheep.total_demand();
        let goat_dse = herd.goats.total_demand();
        Self {
            total_ae: herd.cattle.total_demand(),
            total_dse: sheep_dse + goat_dse,
            sheep_dse,
            goat_dse,
        }
    }

    /// Daily dry matter demand (kg/day).
    ///
    /// The intake row is chosen by the paddock's productivity level, never
    /// by the productivity of individual cattle groups.
    pub fn daily_demand(&self, paddock_level: ProductivityLevel) -> f64 {
        let intake = paddock_level.intake();
        self.total_ae * intake.per_ae + self.total_dse * intake.per_dse
    }
}

/// Days the available forage lasts at the given daily demand.
///
/// Zero or negative demand reports zero days rather than infinity.
pub fn grazing_days(available_forage: f64, daily_demand: f64) -> f64 {
    if daily_demand > 0.0 {
        available_forage / daily_demand
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{NewCattle, NewGoat, NewSheep};
    use forage_tables::{CattleCategory, GoatClass, SheepClass};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty_registry_totals() {
        let totals = Totals::from_registry(&HerdRegistry::new());
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.daily_demand(ProductivityLevel::Low), 0.0);
    }

    #[test]
    fn test_totals_split_sheep_and_goats() {
        let mut herd = HerdRegistry::new();
        herd.sheep
            .add(NewSheep::new("Ewes", SheepClass::EweSingleLamb50kg, 10))
            .unwrap();
        herd.goats
            .add(NewGoat::new("Bucks", GoatClass::Buck, 4, 70.0))
            .unwrap();

        let totals = Totals::from_registry(&herd);
        assert_close(totals.sheep_dse, 30.0);
        assert_close(totals.goat_dse, 7.0);
        assert_close(totals.total_dse, 37.0);
        assert_eq!(totals.total_ae, 0.0);
    }

    #[test]
    fn test_daily_demand_uses_paddock_level() {
        let mut herd = HerdRegistry::new();
        // High-productivity cattle on a low-productivity paddock.
        herd.cattle
            .add(NewCattle::new(
                "Steers",
                CattleCategory::Steers1To2,
                10,
                ProductivityLevel::High,
            ))
            .unwrap();

        let totals = Totals::from_registry(&herd);
        assert_close(totals.total_ae, 13.1);
        assert_close(totals.daily_demand(ProductivityLevel::Low), 13.1 * 8.5);
        assert_close(totals.daily_demand(ProductivityLevel::High), 13.1 * 7.5);
    }

    #[test]
    fn test_daily_demand_mixed_herd() {
        let totals = Totals {
            total_ae: 10.0,
            total_dse: 100.0,
            sheep_dse: 100.0,
            goat_dse: 0.0,
        };
        assert_close(totals.daily_demand(ProductivityLevel::Moderate), 80.0 + 95.0);
    }

    #[test]
    fn test_grazing_days() {
        assert_close(grazing_days(40_000.0, 278.4), 40_000.0 / 278.4);
        assert_eq!(grazing_days(40_000.0, 0.0), 0.0);
        assert_eq!(grazing_days(0.0, 0.0), 0.0);
        assert_eq!(grazing_days(0.0, 100.0), 0.0);
        assert_eq!(grazing_days(500.0, -1.0), 0.0);
    }
}
