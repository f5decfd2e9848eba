//! Cattle Animal Equivalent (AE) table.

use crate::{LookupError, ProductivityLevel};

/// Cattle life-stage category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CattleCategory {
    FemalesUnder1,
    Females1To2,
    Females2To3,
    Females3To4,
    Females4Plus,
    SteersUnder1,
    Steers1To2,
    Steers2To3,
    Steers3To4,
    Bulls,
}

impl CattleCategory {
    /// Returns all categories in table order.
    pub fn all() -> &'static [CattleCategory] {
        &[
            CattleCategory::FemalesUnder1,
            CattleCategory::Females1To2,
            CattleCategory::Females2To3,
            CattleCategory::Females3To4,
            CattleCategory::Females4Plus,
            CattleCategory::SteersUnder1,
            CattleCategory::Steers1To2,
            CattleCategory::Steers2To3,
            CattleCategory::Steers3To4,
            CattleCategory::Bulls,
        ]
    }

    /// Returns the table label.
    pub fn label(&self) -> &'static str {
        match self {
            CattleCategory::FemalesUnder1 => "Females <1 year",
            CattleCategory::Females1To2 => "Females 1-2 years",
            CattleCategory::Females2To3 => "Females 2-3 years",
            CattleCategory::Females3To4 => "Females 3-4 years",
            CattleCategory::Females4Plus => "Females 4+ years",
            CattleCategory::SteersUnder1 => "Steers <1 year",
            CattleCategory::Steers1To2 => "Steers 1-2 years",
            CattleCategory::Steers2To3 => "Steers 2-3 years",
            CattleCategory::Steers3To4 => "Steers 3-4 years",
            CattleCategory::Bulls => "Bulls",
        }
    }

    /// Returns the AE row as `[high, moderate, low]`.
    fn ae_row(&self) -> [f64; 3] {
        match self {
            CattleCategory::FemalesUnder1 => [0.77, 0.68, 0.57],
            CattleCategory::Females1To2 => [1.10, 0.91, 0.72],
            CattleCategory::Females2To3 => [1.74, 1.12, 0.96],
            CattleCategory::Females3To4 => [1.61, 1.49, 1.18],
            CattleCategory::Females4Plus => [1.53, 1.28, 1.08],
            CattleCategory::SteersUnder1 => [0.80, 0.72, 0.60],
            CattleCategory::Steers1To2 => [1.31, 1.03, 0.78],
            CattleCategory::Steers2To3 => [1.60, 1.27, 1.02],
            CattleCategory::Steers3To4 => [1.52, 1.39, 1.15],
            CattleCategory::Bulls => [1.55, 1.52, 1.29],
        }
    }

    /// Returns the Animal Equivalent rating per head for this category at
    /// the given animal productivity level.
    pub fn ae_rating(&self, productivity: ProductivityLevel) -> f64 {
        let [high, moderate, low] = self.ae_row();
        match productivity {
            ProductivityLevel::High => high,
            ProductivityLevel::Moderate => moderate,
            ProductivityLevel::Low => low,
        }
    }
}

label_serde!(CattleCategory, LookupError::UnknownCattleCategory);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_ten_categories() {
        assert_eq!(CattleCategory::all().len(), 10);
    }

    #[test]
    fn test_ae_rating_lookup() {
        assert_eq!(CattleCategory::Females2To3.ae_rating(ProductivityLevel::High), 1.74);
        assert_eq!(CattleCategory::Females2To3.ae_rating(ProductivityLevel::Moderate), 1.12);
        assert_eq!(CattleCategory::Bulls.ae_rating(ProductivityLevel::Low), 1.29);
        assert_eq!(CattleCategory::SteersUnder1.ae_rating(ProductivityLevel::High), 0.80);
    }

    #[test]
    fn test_high_productivity_never_below_low() {
        for category in CattleCategory::all() {
            assert!(
                category.ae_rating(ProductivityLevel::High)
                    >= category.ae_rating(ProductivityLevel::Low),
                "{} has High below Low",
                category
            );
        }
    }

    #[test]
    fn test_label_round_trip() {
        for category in CattleCategory::all() {
            assert_eq!(category.label().parse::<CattleCategory>().unwrap(), *category);
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "Calves".parse::<CattleCategory>().unwrap_err();
        assert_eq!(err, LookupError::UnknownCattleCategory("Calves".to_string()));
    }

    #[test]
    fn test_category_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&CattleCategory::Females4Plus).unwrap(),
            r#""Females 4+ years""#
        );
    }
}
