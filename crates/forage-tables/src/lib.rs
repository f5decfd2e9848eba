//! Reference tables for forage budgeting.
//!
//! This crate contains pure, read-only domain data with no budgeting logic:
//! the cattle Animal Equivalent (AE) table, the sheep and goat Dry Sheep
//! Equivalent (DSE) tables, and the daily intake coefficients per
//! productivity level. It is a dependency for all other crates in the
//! workspace.
//!
//! Every table is keyed by a closed enum, so typed lookups cannot fail.
//! String labels (as typed into a scenario file or on the command line) are
//! parsed through [`std::str::FromStr`] and fail with [`LookupError`] when the
//! label is not in the table.
//!
//! # Example
//!
//! ```
//! use forage_tables::{CattleCategory, ProductivityLevel, ReferenceTables};
//!
//! let rating = CattleCategory::Females2To3.ae_rating(ProductivityLevel::High);
//! assert_eq!(rating, 1.74);
//!
//! let same = ReferenceTables::ae_rating("Females 2-3 years", "High").unwrap();
//! assert_eq!(same, rating);
//! ```

/// Implements label-based `Display`, `FromStr`, `Serialize` and `Deserialize`
/// for a table key enum that exposes `label()` and `all()`.
macro_rules! label_serde {
    ($ty:ty, $err:expr) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::LookupError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::all()
                    .iter()
                    .copied()
                    .find(|key| key.label() == wanted)
                    .ok_or_else(|| $err(s.to_string()))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod cattle;
pub mod error;
pub mod goat;
pub mod productivity;
pub mod sheep;
pub mod tables;

pub use cattle::CattleCategory;
pub use error::LookupError;
pub use goat::{GoatBand, GoatClass};
pub use productivity::{IntakeCoefficients, ProductivityLevel};
pub use sheep::SheepClass;
pub use tables::ReferenceTables;

