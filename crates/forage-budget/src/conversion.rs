//! Conversion of animal groups into standardized demand units.
//!
//! Cattle are rated in Animal Equivalents (AE); sheep and goats in Dry Sheep
//! Equivalents (DSE). All functions are pure and read only the reference
//! tables.

use forage_tables::{CattleCategory, GoatClass, ProductivityLevel, SheepClass};

/// AE per head for a cattle group.
///
/// `productivity` is the group's own performance level, not the paddock's.
pub fn cattle_rating(category: CattleCategory, productivity: ProductivityLevel) -> f64 {
    category.ae_rating(productivity)
}

/// DSE per head for a sheep group.
pub fn sheep_rating(class: SheepClass) -> f64 {
    class.dse()
}

/// DSE per head for a goat group, scaled by live weight.
///
/// Inside the class's standard weight band (bounds inclusive) the base
/// rating applies unchanged. Below the band the rating scales by
/// `weight / min_weight`; above it by `weight / max_weight`.
pub fn goat_rating(class: GoatClass, weight_kg: f64) -> f64 {
    let band = class.band();
    if weight_kg < band.min_weight {
        band.base_rating * (weight_kg / band.min_weight)
    } else if weight_kg > band.max_weight {
        band.base_rating * (weight_kg / band.max_weight)
    } else {
        band.base_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_cattle_rating_uses_group_productivity() {
        assert_eq!(
            cattle_rating(CattleCategory::Females2To3, ProductivityLevel::High),
            1.74
        );
        assert_eq!(
            cattle_rating(CattleCategory::Females2To3, ProductivityLevel::Low),
            0.96
        );
    }

    #[test]
    fn test_sheep_rating() {
        assert_eq!(sheep_rating(SheepClass::EweTwinLambs45kg), 2.8);
    }

    #[test]
    fn test_goat_rating_inside_band() {
        assert_eq!(goat_rating(GoatClass::DryDoe, 35.0), 0.8);
    }

    #[test]
    fn test_goat_rating_band_bounds_are_inclusive() {
        for class in GoatClass::all() {
            let band = class.band();
            assert_eq!(goat_rating(*class, band.min_weight), band.base_rating);
            assert_eq!(goat_rating(*class, band.max_weight), band.base_rating);
        }
    }

    #[test]
    fn test_goat_rating_below_band() {
        let rating = goat_rating(GoatClass::DryDoe, 20.0);
        assert_close(rating, 0.8 * 20.0 / 30.0);
        assert!(rating < 0.8);
    }

    #[test]
    fn test_goat_rating_above_band() {
        let rating = goat_rating(GoatClass::DryDoe, 50.0);
        assert_close(rating, 1.0);
        assert!(rating > 0.8);
    }

    #[test]
    fn test_goat_rating_scales_linearly_outside_band() {
        let buck = GoatClass::Buck;
        let at_100 = goat_rating(buck, 100.0);
        let at_120 = goat_rating(buck, 120.0);
        assert_close(at_120 / at_100, 1.2);

        let at_30 = goat_rating(buck, 30.0);
        let at_45 = goat_rating(buck, 45.0);
        assert_close(at_45 / at_30, 1.5);
    }
}
