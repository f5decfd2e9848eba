//! Day-by-day forage depletion projection for charting.

use serde::{Deserialize, Serialize};

use crate::demand::grazing_days;

/// How far past the exhaustion point the projection runs.
pub const PROJECTION_OVERSHOOT: f64 = 1.5;

/// Upper bound on the projection horizon, in days.
pub const MAX_PROJECTION_DAYS: u32 = 100;

/// Forage remaining per day alongside the constant residual target.
///
/// All three sequences have the same length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Day indices 0..=N
    pub day_labels: Vec<u32>,
    /// Forage remaining at the start of each day (kg)
    pub forage_remaining: Vec<f64>,
    /// Residual target, repeated for every day (kg)
    pub residual_target: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.day_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.day_labels.is_empty()
    }

    /// Iterates `(day, forage_remaining, residual_target)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        self.day_labels
            .iter()
            .zip(&self.forage_remaining)
            .zip(&self.residual_target)
            .map(|((day, forage), residual)| (*day, *forage, *residual))
    }

    /// First day on which the remaining forage has reached the residual.
    pub fn residual_reached_on(&self) -> Option<u32> {
        self.rows()
            .find(|(_, forage, residual)| forage <= residual)
            .map(|(day, _, _)| day)
    }
}

/// Number of days to project for the given grazing-day estimate.
pub fn projection_horizon(grazing_days: f64) -> u32 {
    let days = (grazing_days * PROJECTION_OVERSHOOT).ceil();
    if days >= MAX_PROJECTION_DAYS as f64 {
        MAX_PROJECTION_DAYS
    } else {
        days.max(0.0) as u32
    }
}

/// Projects forage remaining per day under constant daily demand.
///
/// Forage falls by `daily_demand` each day but never below the residual,
/// which models moving the herd off at the residual threshold. Returns an
/// empty series when there is no demand to project.
pub fn project_depletion(
    total_standing_forage: f64,
    total_residual_forage: f64,
    daily_demand: f64,
) -> ChartSeries {
    if daily_demand <= 0.0 {
        return ChartSeries::default();
    }

    let available = (total_standing_forage - total_residual_forage).max(0.0);
    let days = projection_horizon(grazing_days(available, daily_demand));
    let capacity = days as usize + 1;

    let mut series = ChartSeries {
        day_labels: Vec::with_capacity(capacity),
        forage_remaining: Vec::with_capacity(capacity),
        residual_target: Vec::with_capacity(capacity),
    };

    let mut current = total_standing_forage;
    for day in 0..=days {
        series.day_labels.push(day);
        series
            .forage_remaining
            .push(total_residual_forage.max(current));
        series.residual_target.push(total_residual_forage);

        if day < days {
            current = total_residual_forage.max(current - daily_demand);
        }
    }

    series
}
