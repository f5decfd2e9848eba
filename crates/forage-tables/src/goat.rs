//! Goat Dry Sheep Equivalent (DSE) table with standard weight bands.

use serde::{Deserialize, Serialize};

use crate::LookupError;

/// Goat physiological class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoatClass {
    DryDoe,
    PregnantDoe,
    LactatingDoeSingle,
    LactatingDoeTwins,
    Weaner,
    Buck,
}

/// DSE rating for a goat class and the live weight band it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoatBand {
    /// DSE per head for an animal inside the band
    pub base_rating: f64,
    /// Lower bound of the standard weight band (kg, inclusive)
    pub min_weight: f64,
    /// Upper bound of the standard weight band (kg, inclusive)
    pub max_weight: f64,
}

impl GoatBand {
    const fn new(base_rating: f64, min_weight: f64, max_weight: f64) -> Self {
        Self {
            base_rating,
            min_weight,
            max_weight,
        }
    }

    /// Returns true if the weight falls inside the band, bounds included.
    pub fn contains(&self, weight_kg: f64) -> bool {
        weight_kg >= self.min_weight && weight_kg <= self.max_weight
    }
}

impl GoatClass {
    /// Returns all classes in table order.
    pub fn all() -> &'static [GoatClass] {
        &[
            GoatClass::DryDoe,
            GoatClass::PregnantDoe,
            GoatClass::LactatingDoeSingle,
            GoatClass::LactatingDoeTwins,
            GoatClass::Weaner,
            GoatClass::Buck,
        ]
    }

    /// Returns all classes ordered alphabetically by label.
    pub fn sorted() -> Vec<GoatClass> {
        let mut classes = Self::all().to_vec();
        classes.sort_by_key(|class| class.label());
        classes
    }

    /// Returns the table label.
    pub fn label(&self) -> &'static str {
        match self {
            GoatClass::DryDoe => "Dry doe",
            GoatClass::PregnantDoe => "Breeding doe - During pregnancy",
            GoatClass::LactatingDoeSingle => "Breeding doe - During lactation – with single kid",
            GoatClass::LactatingDoeTwins => "Breeding doe - During lactation – with twins",
            GoatClass::Weaner => "Weaner (Growing at 100g/day)",
            GoatClass::Buck => "Buck",
        }
    }

    /// Returns the DSE rating and weight band for this class.
    pub fn band(&self) -> GoatBand {
        match self {
            GoatClass::DryDoe => GoatBand::new(0.8, 30.0, 40.0),
            GoatClass::PregnantDoe => GoatBand::new(1.4, 40.0, 60.0),
            GoatClass::LactatingDoeSingle => GoatBand::new(1.6, 40.0, 60.0),
            GoatClass::LactatingDoeTwins => GoatBand::new(2.2, 40.0, 60.0),
            GoatClass::Weaner => GoatBand::new(1.0, 20.0, 40.0),
            GoatClass::Buck => GoatBand::new(1.75, 60.0, 80.0),
        }
    }
}

label_serde!(GoatClass, LookupError::UnknownGoatClass);
