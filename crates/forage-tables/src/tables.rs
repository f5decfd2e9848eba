//! String-keyed access to the reference tables.
//!
//! Scenario files and the command line name table rows by their labels.
//! These helpers parse the labels and look the row up in one step, failing
//! with [`LookupError`] instead of falling back to a default rating.

use crate::{
    CattleCategory, GoatBand, GoatClass, IntakeCoefficients, LookupError, ProductivityLevel,
    SheepClass,
};

/// Read-only view over all reference tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceTables;

impl ReferenceTables {
    /// AE rating per head for a cattle category at an animal productivity level.
    pub fn ae_rating(category: &str, productivity: &str) -> Result<f64, LookupError> {
        let category: CattleCategory = category.parse()?;
        let productivity: ProductivityLevel = productivity.parse()?;
        Ok(category.ae_rating(productivity))
    }

    /// DSE rating per head for a sheep class.
    pub fn sheep_dse(class: &str) -> Result<f64, LookupError> {
        Ok(class.parse::<SheepClass>()?.dse())
    }

    /// DSE rating and standard weight band for a goat class.
    pub fn goat_band(class: &str) -> Result<GoatBand, LookupError> {
        Ok(class.parse::<GoatClass>()?.band())
    }

    /// Daily intake coefficients for a paddock productivity level.
    pub fn intake(productivity: &str) -> Result<IntakeCoefficients, LookupError> {
        Ok(productivity.parse::<ProductivityLevel>()?.intake())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ae_lookup_by_label() {
        assert_eq!(ReferenceTables::ae_rating("Bulls", "Moderate").unwrap(), 1.52);
    }

    #[test]
    fn test_ae_lookup_unknown_productivity() {
        assert_eq!(
            ReferenceTables::ae_rating("Bulls", "Medium"),
            Err(LookupError::UnknownProductivity("Medium".to_string()))
        );
    }

    #[test]
    fn test_ae_lookup_unknown_category_reported_first() {
        assert!(matches!(
            ReferenceTables::ae_rating("Oxen", "Medium"),
            Err(LookupError::UnknownCattleCategory(_))
        ));
    }

    #[test]
    fn test_sheep_and_goat_lookup() {
        assert_eq!(
            ReferenceTables::sheep_dse("Ewe with Twin Lambs at Foot 45kg").unwrap(),
            2.8
        );
        assert_eq!(ReferenceTables::goat_band("Buck").unwrap().base_rating, 1.75);
        assert!(ReferenceTables::sheep_dse("Ram").is_err());
        assert!(ReferenceTables::goat_band("").is_err());
    }

    #[test]
    fn test_intake_lookup() {
        assert_eq!(ReferenceTables::intake("Low").unwrap().per_dse, 1.01);
    }
}
