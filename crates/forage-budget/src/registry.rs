//! Herd registry: one ledger of animal groups per species.
//!
//! Each ledger owns its records, keeps them in insertion order and hands out
//! ids from its own counter. Ratings are computed once when a record is
//! created and cached on it.

use std::fmt;

use forage_tables::{CattleCategory, GoatClass, ProductivityLevel, SheepClass};
use serde::{Deserialize, Serialize};

use crate::conversion::{cattle_rating, goat_rating, sheep_rating};
use crate::error::ValidationError;

/// Livestock species, one ledger each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Cattle,
    Sheep,
    Goats,
}

impl Species {
    /// Unit the species' demand is expressed in.
    pub fn demand_unit(&self) -> &'static str {
        match self {
            Species::Cattle => "AE",
            Species::Sheep | Species::Goats => "DSE",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Cattle => write!(f, "cattle"),
            Species::Sheep => write!(f, "sheep"),
            Species::Goats => write!(f, "goats"),
        }
    }
}

/// Identifier of a record, unique within its ledger for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

/// Common read access to stored animal-group records.
pub trait HerdRecord {
    fn id(&self) -> RecordId;
    fn type_label(&self) -> &str;
    fn number(&self) -> u64;
    /// Demand units (AE or DSE) per head.
    fn demand_rating(&self) -> f64;
    /// `number x demand_rating`.
    fn total_demand(&self) -> f64;
}

/// Raw user input that can be validated into a stored record.
pub trait RecordInput {
    type Record: HerdRecord;

    /// Validates the input and builds the record, computing its rating.
    fn into_record(self, id: RecordId) -> Result<Self::Record, ValidationError>;
}

fn validate_label(label: &str) -> Result<String, ValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyLabel);
    }
    Ok(trimmed.to_string())
}

fn validate_number(number: i64) -> Result<u64, ValidationError> {
    if number <= 0 {
        return Err(ValidationError::NonPositiveNumber(number));
    }
    Ok(number as u64)
}

fn validate_weight(weight_kg: f64) -> Result<f64, ValidationError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(ValidationError::NonPositiveWeight(weight_kg));
    }
    Ok(weight_kg)
}

/// A cattle group as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCattle {
    pub type_label: String,
    pub category: CattleCategory,
    pub number: i64,
    pub productivity: ProductivityLevel,
}

impl NewCattle {
    pub fn new(
        type_label: impl Into<String>,
        category: CattleCategory,
        number: i64,
        productivity: ProductivityLevel,
    ) -> Self {
        Self {
            type_label: type_label.into(),
            category,
            number,
            productivity,
        }
    }
}

/// A stored cattle group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CattleGroup {
    pub id: RecordId,
    pub type_label: String,
    pub category: CattleCategory,
    pub number: u64,
    pub productivity: ProductivityLevel,
    /// AE per head
    pub demand_rating: f64,
    /// Total AE for the group
    pub total_demand: f64,
}

impl RecordInput for NewCattle {
    type Record = CattleGroup;

    fn into_record(self, id: RecordId) -> Result<CattleGroup, ValidationError> {
        let type_label = validate_label(&self.type_label)?;
        let number = validate_number(self.number)?;
        let demand_rating = cattle_rating(self.category, self.productivity);
        Ok(CattleGroup {
            id,
            type_label,
            category: self.category,
            number,
            productivity: self.productivity,
            demand_rating,
            total_demand: number as f64 * demand_rating,
        })
    }
}

/// A sheep group as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSheep {
    pub type_label: String,
    pub sheep_class: SheepClass,
    pub number: i64,
}

impl NewSheep {
    pub fn new(type_label: impl Into<String>, sheep_class: SheepClass, number: i64) -> Self {
        Self {
            type_label: type_label.into(),
            sheep_class,
            number,
        }
    }
}

/// A stored sheep group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheepGroup {
    pub id: RecordId,
    pub type_label: String,
    pub sheep_class: SheepClass,
    pub number: u64,
    /// DSE per head
    pub demand_rating: f64,
    /// Total DSE for the group
    pub total_demand: f64,
}

impl RecordInput for NewSheep {
    type Record = SheepGroup;

    fn into_record(self, id: RecordId) -> Result<SheepGroup, ValidationError> {
        let type_label = validate_label(&self.type_label)?;
        let number = validate_number(self.number)?;
        let demand_rating = sheep_rating(self.sheep_class);
        Ok(SheepGroup {
            id,
            type_label,
            sheep_class: self.sheep_class,
            number,
            demand_rating,
            total_demand: number as f64 * demand_rating,
        })
    }
}

/// A goat group as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoat {
    pub type_label: String,
    pub goat_class: GoatClass,
    pub number: i64,
    pub weight_kg: f64,
}

impl NewGoat {
    pub fn new(
        type_label: impl Into<String>,
        goat_class: GoatClass,
        number: i64,
        weight_kg: f64,
    ) -> Self {
        Self {
            type_label: type_label.into(),
            goat_class,
            number,
            weight_kg,
        }
    }
}

/// A stored goat group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoatGroup {
    pub id: RecordId,
    pub type_label: String,
    pub goat_class: GoatClass,
    pub number: u64,
    /// Average live weight (kg)
    pub weight_kg: f64,
    /// Weight-adjusted DSE per head
    pub demand_rating: f64,
    /// Total DSE for the group
    pub total_demand: f64,
}

impl RecordInput for NewGoat {
    type Record = GoatGroup;

    fn into_record(self, id: RecordId) -> Result<GoatGroup, ValidationError> {
        let type_label = validate_label(&self.type_label)?;
        let number = validate_number(self.number)?;
        let weight_kg = validate_weight(self.weight_kg)?;
        let demand_rating = goat_rating(self.goat_class, weight_kg);
        Ok(GoatGroup {
            id,
            type_label,
            goat_class: self.goat_class,
            number,
            weight_kg,
            demand_rating,
            total_demand: number as f64 * demand_rating,
        })
    }
}

macro_rules! impl_herd_record {
    ($($ty:ty),*) => {
        $(
            impl HerdRecord for $ty {
                fn id(&self) -> RecordId {
                    self.id
                }

                fn type_label(&self) -> &str {
                    &self.type_label
                }

                fn number(&self) -> u64 {
                    self.number
                }

                fn demand_rating(&self) -> f64 {
                    self.demand_rating
                }

                fn total_demand(&self) -> f64 {
                    self.total_demand
                }
            }
        )*
    };
}

impl_herd_record!(CattleGroup, SheepGroup, GoatGroup);

/// Ordered collection of one species' animal groups.
#[derive(Debug, Clone)]
pub struct Ledger<R> {
    records: Vec<R>,
    /// Next id to hand out; never rewinds, even across `clear`
    next_sequence: u64,
}

impl<R> Default for Ledger<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_sequence: 1,
        }
    }
}

impl<R: HerdRecord> Ledger<R> {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a record, returning its new id.
    ///
    /// Nothing is stored and no id is consumed when validation fails.
    pub fn add<I>(&mut self, input: I) -> Result<RecordId, ValidationError>
    where
        I: RecordInput<Record = R>,
    {
        let id = RecordId(self.next_sequence);
        let record = input.into_record(id)?;
        self.next_sequence += 1;
        self.records.push(record);
        Ok(id)
    }

    /// Removes the record with the given id.
    ///
    /// Returns false (and changes nothing) if no such record exists.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        self.records.len() != before
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `total_demand` over all records; zero when empty.
    pub fn total_demand(&self) -> f64 {
        self.records.iter().map(HerdRecord::total_demand).sum()
    }

    /// Total head count across all records.
    pub fn head_count(&self) -> u64 {
        self.records.iter().map(HerdRecord::number).sum()
    }
}

/// The three species ledgers.
#[derive(Debug, Clone, Default)]
pub struct HerdRegistry {
    pub cattle: Ledger<CattleGroup>,
    pub sheep: Ledger<SheepGroup>,
    pub goats: Ledger<GoatGroup>,
}

impl HerdRegistry {
    /// Creates a registry with three empty ledgers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a record from the given species' ledger.
    pub fn remove(&mut self, species: Species, id: RecordId) -> bool {
        match species {
            Species::Cattle => self.cattle.remove(id),
            Species::Sheep => self.sheep.remove(id),
            Species::Goats => self.goats.remove(id),
        }
    }

    /// Empties the given species' ledger.
    pub fn clear(&mut self, species: Species) {
        match species {
            Species::Cattle => self.cattle.clear(),
            Species::Sheep => self.sheep.clear(),
            Species::Goats => self.goats.clear(),
        }
    }

    /// Number of records in the given species' ledger.
    pub fn len(&self, species: Species) -> usize {
        match species {
            Species::Cattle => self.cattle.len(),
            Species::Sheep => self.sheep.len(),
            Species::Goats => self.goats.len(),
        }
    }

    /// Returns true if all three ledgers are empty.
    pub fn is_empty(&self) -> bool {
        self.cattle.is_empty() && self.sheep.is_empty() && self.goats.is_empty()
    }
}
