//! Productivity levels and daily intake coefficients.

use crate::LookupError;

/// Coarse performance tier of a pasture or an animal group.
///
/// The same enum serves two distinct purposes: a cattle group's own level
/// selects its AE rating, while the paddock's level selects the intake
/// coefficients used for daily demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ProductivityLevel {
    High,
    #[default]
    Moderate,
    Low,
}

impl ProductivityLevel {
    /// Returns all levels in table order.
    pub fn all() -> &'static [ProductivityLevel] {
        &[
            ProductivityLevel::High,
            ProductivityLevel::Moderate,
            ProductivityLevel::Low,
        ]
    }

    /// Returns the table label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductivityLevel::High => "High",
            ProductivityLevel::Moderate => "Moderate",
            ProductivityLevel::Low => "Low",
        }
    }

    /// Returns the daily dry matter intake coefficients for this level.
    pub fn intake(&self) -> IntakeCoefficients {
        match self {
            ProductivityLevel::High => IntakeCoefficients::new(7.5, 0.89),
            ProductivityLevel::Moderate => IntakeCoefficients::new(8.0, 0.95),
            ProductivityLevel::Low => IntakeCoefficients::new(8.5, 1.01),
        }
    }
}

label_serde!(ProductivityLevel, LookupError::UnknownProductivity);

/// Daily dry matter intake (kg) per standardized demand unit.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntakeCoefficients {
    /// kg DM per Animal Equivalent per day
    pub per_ae: f64,
    /// kg DM per Dry Sheep Equivalent per day
    pub per_dse: f64,
}

impl IntakeCoefficients {
    /// Creates a new coefficient row.
    pub const fn new(per_ae: f64, per_dse: f64) -> Self {
        Self { per_ae, per_dse }
    }
}
