//! Paddock forage figures.

use forage_tables::ProductivityLevel;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Forage measurements for the paddock being budgeted.
///
/// A residual above the standing figure is accepted; available forage
/// clamps to zero in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddockState {
    /// Standing dry matter (kg/ha)
    pub standing_dm: f64,
    /// Paddock area (ha)
    pub area: f64,
    /// Residual dry matter to leave behind (kg/ha)
    pub residual_dm: f64,
    /// Pasture productivity, selects the intake coefficients
    pub productivity_level: ProductivityLevel,
}

impl Default for PaddockState {
    fn default() -> Self {
        Self {
            standing_dm: 5000.0,
            area: 10.0,
            residual_dm: 1000.0,
            productivity_level: ProductivityLevel::Moderate,
        }
    }
}

impl PaddockState {
    /// Creates a new paddock state.
    pub fn new(
        standing_dm: f64,
        area: f64,
        residual_dm: f64,
        productivity_level: ProductivityLevel,
    ) -> Self {
        Self {
            standing_dm,
            area,
            residual_dm,
            productivity_level,
        }
    }

    /// Checks that every figure is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("standing_dm", self.standing_dm),
            ("area", self.area),
            ("residual_dm", self.residual_dm),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidPaddockValue { field, value });
            }
        }
        Ok(())
    }

    /// Total standing dry matter across the paddock (kg).
    pub fn total_standing_forage(&self) -> f64 {
        self.standing_dm * self.area
    }

    /// Total residual dry matter across the paddock (kg).
    pub fn total_residual_forage(&self) -> f64 {
        self.residual_dm * self.area
    }

    /// Dry matter available for grazing above the residual (kg), never negative.
    pub fn available_forage(&self) -> f64 {
        (self.total_standing_forage() - self.total_residual_forage()).max(0.0)
    }

    /// Returns true if the residual target exceeds the standing forage.
    pub fn residual_exceeds_standing(&self) -> bool {
        self.residual_dm > self.standing_dm
    }
}
