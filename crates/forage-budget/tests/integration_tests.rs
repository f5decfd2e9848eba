//! Integration tests for the forage budget engine.
//!
//! These tests load scenario fixtures and verify the full pipeline from
//! scenario file through ledgers, demand and projection to the written
//! report.

use forage_budget::{
    read_report, write_report, BudgetError, CattleCategory, ForageBudget, GoatClass, NewCattle,
    NewGoat, NewSheep, PaddockState, ProductivityLevel, RecordId, ScenarioConfig, SheepClass,
    Species, ValidationError,
};
use std::path::Path;
use tempfile::tempdir;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Load a scenario fixture by file name.
fn load_fixture(name: &str) -> ScenarioConfig {
    let path = Path::new("tests/fixtures").join(name);
    ScenarioConfig::from_file(&path).expect("Failed to load fixture")
}

/// Test that fixtures load correctly.
#[test]
fn test_fixtures_load() {
    let sample = load_fixture("sample_scenario.toml");
    let reference = load_fixture("reference_scenario.toml");

    assert_eq!(sample.cattle.len(), 2);
    assert_eq!(sample.sheep.len(), 2);
    assert_eq!(sample.goats.len(), 2);
    assert_eq!(reference.group_count(), 1);
}

/// The worked example: 20 High "Females 2-3 years" on 10 ha at 5000/1000.
#[test]
fn test_reference_scenario_figures() {
    let budget = ForageBudget::from_scenario(&load_fixture("reference_scenario.toml")).unwrap();

    let heifers = &budget.cattle()[0];
    assert_eq!(heifers.demand_rating, 1.74);
    assert_close(heifers.total_demand, 34.8);

    assert_close(budget.total_ae(), 34.8);
    assert_close(budget.daily_demand(), 278.4);
    assert_eq!(budget.available_forage(), 40_000.0);
    assert!((budget.grazing_days() - 143.68).abs() < 0.01);

    // ceil(143.68 * 1.5) is well past the cap.
    let series = budget.project_depletion();
    assert_eq!(series.len(), 101);
}

/// Mixed herd with goats on both sides of their weight band.
#[test]
fn test_sample_scenario_figures() {
    let budget = ForageBudget::from_scenario(&load_fixture("sample_scenario.toml")).unwrap();

    assert_eq!(budget.total_standing_forage(), 84_000.0);
    assert_eq!(budget.total_residual_forage(), 28_800.0);
    assert_eq!(budget.available_forage(), 55_200.0);

    let totals = budget.totals();
    assert_close(totals.total_ae, 51.2 + 32.75);
    assert_close(totals.sheep_dse, 264.0 + 66.0);
    assert_close(budget.goats()[0].demand_rating, 0.64);
    assert_close(budget.goats()[1].demand_rating, 2.1);
    assert_close(totals.goat_dse, 19.2 + 8.4);
    assert_close(totals.total_dse, totals.sheep_dse + totals.goat_dse);

    let daily = 83.95 * 7.5 + 357.6 * 0.89;
    assert_close(budget.daily_demand(), daily);
    assert_close(budget.grazing_days(), 55_200.0 / daily);

    let series = budget.project_depletion();
    assert_eq!(series.len(), 89);
    assert_eq!(series.residual_reached_on(), Some(59));
    assert_eq!(series.forage_remaining[0], 84_000.0);
    assert_eq!(*series.forage_remaining.last().unwrap(), 28_800.0);
}

/// Every stored record satisfies total = number x rating.
#[test]
fn test_record_totals_are_consistent() {
    let budget = ForageBudget::from_scenario(&load_fixture("sample_scenario.toml")).unwrap();

    for group in budget.cattle() {
        assert_eq!(group.total_demand, group.number as f64 * group.demand_rating);
    }
    for group in budget.sheep() {
        assert_eq!(group.total_demand, group.number as f64 * group.demand_rating);
    }
    for group in budget.goats() {
        assert_eq!(group.total_demand, group.number as f64 * group.demand_rating);
    }
}

/// A scenario with an invalid group fails as a whole.
#[test]
fn test_invalid_scenario_is_rejected() {
    let result = ForageBudget::from_scenario(&load_fixture("invalid_scenario.toml"));

    assert!(matches!(
        result,
        Err(BudgetError::Validation(ValidationError::EmptyLabel))
    ));
}

#[test]
fn test_unknown_scenario_file() {
    let result = ForageBudget::from_scenario_file(Path::new("tests/fixtures/missing.toml"));
    assert!(matches!(result, Err(BudgetError::Config(_))));
}

/// Interactive session: add, reject, remove, clear.
#[test]
fn test_session_flow() {
    let mut budget = ForageBudget::new(PaddockState::new(
        2500.0,
        8.0,
        900.0,
        ProductivityLevel::Moderate,
    ))
    .unwrap();

    let cows = budget
        .add_cattle(NewCattle::new(
            "Cows",
            CattleCategory::Females3To4,
            12,
            ProductivityLevel::Low,
        ))
        .unwrap();
    let ewes = budget
        .add_sheep(NewSheep::new("Ewes", SheepClass::PregnantLast6WeeksTwins45kg, 50))
        .unwrap();

    // Rejected adds leave the ledgers untouched.
    assert!(budget
        .add_goat(NewGoat::new("Does", GoatClass::DryDoe, 10, -4.0))
        .is_err());
    assert!(budget
        .add_sheep(NewSheep::new("", SheepClass::EweTwinLambs45kg, 5))
        .is_err());
    assert!(budget.goats().is_empty());
    assert_eq!(budget.sheep().len(), 1);

    assert_close(budget.total_ae(), 12.0 * 1.18);
    assert_close(budget.total_dse(), 50.0 * 1.8);

    // Unknown ids are ignored.
    assert!(!budget.remove_animal(Species::Cattle, RecordId(42)));
    assert_eq!(budget.cattle().len(), 1);

    assert!(budget.remove_animal(Species::Cattle, cows));
    assert_eq!(budget.total_ae(), 0.0);

    budget.clear_ledger(Species::Sheep);
    assert!(budget.sheep().iter().all(|g| g.id != ewes));
    assert_eq!(budget.daily_demand(), 0.0);
    assert_eq!(budget.grazing_days(), 0.0);
    assert!(budget.project_depletion().is_empty());
}

/// A residual above standing forage degrades to zero days without errors.
#[test]
fn test_residual_above_standing() {
    let mut budget = ForageBudget::from_scenario(&load_fixture("reference_scenario.toml")).unwrap();
    budget
        .set_paddock(PaddockState::new(
            800.0,
            10.0,
            1000.0,
            ProductivityLevel::Moderate,
        ))
        .unwrap();

    assert_eq!(budget.available_forage(), 0.0);
    assert_eq!(budget.grazing_days(), 0.0);

    let series = budget.project_depletion();
    assert_eq!(series.len(), 1);
    assert_eq!(series.forage_remaining, vec![10_000.0]);
}

/// Reports survive a write/read cycle through the filesystem.
#[test]
fn test_report_written_and_read_back() {
    let budget = ForageBudget::from_scenario(&load_fixture("sample_scenario.toml")).unwrap();
    let report = budget.report();

    let dir = tempdir().unwrap();
    let path = dir.path().join("reports").join("budget.json");
    write_report(&path, &report).unwrap();

    let loaded = read_report(&path).unwrap();
    assert_eq!(loaded.cattle.len(), 2);
    assert_eq!(loaded.goats[1].goat_class, GoatClass::Buck);
    assert_eq!(loaded.chart.len(), report.chart.len());
    assert_close(loaded.grazing_days, report.grazing_days);
}

/// The text summary carries the headline figures.
#[test]
fn test_report_summary_text() {
    let budget = ForageBudget::from_scenario(&load_fixture("reference_scenario.toml")).unwrap();
    let summary = budget.report().to_string();

    assert!(summary.contains("Total standing dry matter: 50,000.00 kg"));
    assert!(summary.contains("Heifers - 20 x Females 2-3 years (High) at 1.74 AE = 34.80 AE"));
    assert!(summary.contains("Total daily demand:     278.40 kg/day"));
    assert!(summary.contains("Available dry matter:   40,000.00 kg"));
    assert!(summary.contains("Estimated grazing days: 143.7"));
}

/// Captured scenarios reload to the same budget.
#[test]
fn test_scenario_saved_and_reloaded() {
    let budget = ForageBudget::from_scenario(&load_fixture("sample_scenario.toml")).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    budget.to_scenario().to_file(&path).unwrap();

    let reloaded = ForageBudget::from_scenario_file(&path).unwrap();
    assert_eq!(reloaded.totals(), budget.totals());
    assert_eq!(reloaded.paddock(), budget.paddock());
    assert_eq!(reloaded.report().chart, budget.report().chart);
}
