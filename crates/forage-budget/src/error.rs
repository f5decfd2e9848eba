//! Error types for budget operations.

use forage_tables::LookupError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::output::OutputError;

/// Malformed input rejected before any state changes.
///
/// Only the first unmet constraint is reported. Constraints are checked in
/// the order label, head count, weight.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The group label is empty after trimming whitespace.
    #[error("type label must not be empty")]
    EmptyLabel,
    /// Head count is zero or negative.
    #[error("number of animals must be a positive integer, got {0}")]
    NonPositiveNumber(i64),
    /// Goat live weight is zero, negative or not a finite number.
    #[error("live weight must be greater than zero, got {0} kg")]
    NonPositiveWeight(f64),
    /// A paddock figure is negative or not a finite number.
    #[error("paddock {field} must be a non-negative number, got {value}")]
    InvalidPaddockValue {
        field: &'static str,
        value: f64,
    },
}

/// Errors that can occur in budget operations.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Input failed validation
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    /// A label did not match any reference table row
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
    /// Error loading a scenario
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Error writing or reading a report
    #[error("output error: {0}")]
    Output(#[from] OutputError),
}
