//! Sheep Dry Sheep Equivalent (DSE) table.
//!
//! One row per physiological state, liveweight and condition score (CS)
//! combination.

use crate::LookupError;

/// Sheep class as listed in the DSE table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheepClass {
    WeanedLamb100g15kg,
    WeanedLamb200g15kg,
    WeanedLamb100g25kg,
    WeanedLamb200g25kg,
    AdultDryMaintain45kgCs2,
    AdultDryMaintain50kgCs2,
    AdultDryMaintain50kgCs3,
    AdultDryMaintain60kgCs3,
    AdultDryGaining50g45kg,
    AdultDryGaining100g45kg,
    PregnantLast6WeeksSingle45kg,
    PregnantLast4WeeksSingle45kgCs2,
    PregnantLast6WeeksTwins45kg,
    PregnantLast4WeeksSingle50kgCs2,
    PregnantLast6WeeksSingle50kg,
    PregnantLast6WeeksTwins50kg,
    PregnantLast4WeeksSingle60kgCs3,
    EweSingleLamb45kg,
    EweSingleLamb45kgCs2,
    EweSingleLamb50kg,
    EweSingleLamb50kgCs3,
    EweSingleLamb60kgCs3,
    EweTwinLambs45kg,
    WeanerGrowing0g25kg,
    WeanerGrowing100g25kg,
    WeanerGrowing0g35kg,
    WeanerGrowingOver200g35kg,
}

impl SheepClass {
    /// Returns all classes in table order.
    pub fn all() -> &'static [SheepClass] {
        &[
            SheepClass::WeanedLamb100g15kg,
            SheepClass::WeanedLamb200g15kg,
            SheepClass::WeanedLamb100g25kg,
            SheepClass::WeanedLamb200g25kg,
            SheepClass::AdultDryMaintain45kgCs2,
            SheepClass::AdultDryMaintain50kgCs2,
            SheepClass::AdultDryMaintain50kgCs3,
            SheepClass::AdultDryMaintain60kgCs3,
            SheepClass::AdultDryGaining50g45kg,
            SheepClass::AdultDryGaining100g45kg,
            SheepClass::PregnantLast6WeeksSingle45kg,
            SheepClass::PregnantLast4WeeksSingle45kgCs2,
            SheepClass::PregnantLast6WeeksTwins45kg,
            SheepClass::PregnantLast4WeeksSingle50kgCs2,
            SheepClass::PregnantLast6WeeksSingle50kg,
            SheepClass::PregnantLast6WeeksTwins50kg,
            SheepClass::PregnantLast4WeeksSingle60kgCs3,
            SheepClass::EweSingleLamb45kg,
            SheepClass::EweSingleLamb45kgCs2,
            SheepClass::EweSingleLamb50kg,
            SheepClass::EweSingleLamb50kgCs3,
            SheepClass::EweSingleLamb60kgCs3,
            SheepClass::EweTwinLambs45kg,
            SheepClass::WeanerGrowing0g25kg,
            SheepClass::WeanerGrowing100g25kg,
            SheepClass::WeanerGrowing0g35kg,
            SheepClass::WeanerGrowingOver200g35kg,
        ]
    }

    /// Returns all classes ordered alphabetically by label.
    pub fn sorted() -> Vec<SheepClass> {
        let mut classes = Self::all().to_vec();
        classes.sort_by_key(|class| class.label());
        classes
    }

    /// Returns the table label.
    pub fn label(&self) -> &'static str {
        match self {
            SheepClass::WeanedLamb100g15kg => "Weaned Lamb (Gaining 100 g/day) 15kg",
            SheepClass::WeanedLamb200g15kg => "Weaned Lamb (Gaining 200 g/day) 15kg",
            SheepClass::WeanedLamb100g25kg => "Weaned Lamb (Gaining 100 g/day) 25kg",
            SheepClass::WeanedLamb200g25kg => "Weaned Lamb (Gaining 200 g/day) 25kg",
            SheepClass::AdultDryMaintain45kgCs2 => "Adult Dry Sheep (Maintain Weight) 45kg CS2",
            SheepClass::AdultDryMaintain50kgCs2 => "Adult Dry Sheep (Maintain Weight) 50kg CS2",
            SheepClass::AdultDryMaintain50kgCs3 => "Adult Dry Sheep (Maintain Weight) 50kg CS3",
            SheepClass::AdultDryMaintain60kgCs3 => "Adult Dry Sheep (Maintain Weight) 60kg CS3",
            SheepClass::AdultDryGaining50g45kg => "Adult Dry Sheep (Gaining 50 g/day) 45kg",
            SheepClass::AdultDryGaining100g45kg => "Adult Dry Sheep (Gaining 100 g/day) 45kg",
            SheepClass::PregnantLast6WeeksSingle45kg => "Pregnant Ewe (Last 6 weeks, Single) 45kg",
            SheepClass::PregnantLast4WeeksSingle45kgCs2 => "Pregnant Ewe (Last 4 weeks, Single) 45kg CS2",
            SheepClass::PregnantLast6WeeksTwins45kg => "Pregnant Ewe (Last 6 weeks, Twins) 45kg",
            SheepClass::PregnantLast4WeeksSingle50kgCs2 => "Pregnant Ewe (Last 4 weeks, Single) 50kg CS2",
            SheepClass::PregnantLast6WeeksSingle50kg => "Pregnant Ewe (Last 6 weeks, Single) 50kg",
            SheepClass::PregnantLast6WeeksTwins50kg => "Pregnant Ewe (Last 6 weeks, Twins) 50kg",
            SheepClass::PregnantLast4WeeksSingle60kgCs3 => "Pregnant Ewe (Last 4 weeks, Single) 60kg CS3",
            SheepClass::EweSingleLamb45kg => "Ewe with Single Lamb at Foot 45kg",
            SheepClass::EweSingleLamb45kgCs2 => "Ewe with Single Lamb at Foot 45kg CS2",
            SheepClass::EweSingleLamb50kg => "Ewe with Single Lamb at Foot 50kg",
            SheepClass::EweSingleLamb50kgCs3 => "Ewe with Single Lamb at Foot 50kg CS3",
            SheepClass::EweSingleLamb60kgCs3 => "Ewe with Single Lamb at Foot 60kg CS3",
            SheepClass::EweTwinLambs45kg => "Ewe with Twin Lambs at Foot 45kg",
            SheepClass::WeanerGrowing0g25kg => "Weaner (Growing at 0 g/day) 25kg",
            SheepClass::WeanerGrowing100g25kg => "Weaner (Growing at 100 g/day) 25kg",
            SheepClass::WeanerGrowing0g35kg => "Weaner (Growing at 0 g/day) 35kg",
            SheepClass::WeanerGrowingOver200g35kg => "Weaner (Growing > 200 g/day) 35kg",
        }
    }

    /// Returns the DSE rating per head.
    pub fn dse(&self) -> f64 {
        match self {
            SheepClass::WeanedLamb100g15kg => 0.8,
            SheepClass::WeanedLamb200g15kg => 1.3,
            SheepClass::WeanedLamb100g25kg => 1.1,
            SheepClass::WeanedLamb200g25kg => 1.7,
            SheepClass::AdultDryMaintain45kgCs2 => 0.9,
            SheepClass::AdultDryMaintain50kgCs2 => 1.0,
            SheepClass::AdultDryMaintain50kgCs3 => 1.0,
            SheepClass::AdultDryMaintain60kgCs3 => 1.1,
            SheepClass::AdultDryGaining50g45kg => 1.2,
            SheepClass::AdultDryGaining100g45kg => 1.5,
            SheepClass::PregnantLast6WeeksSingle45kg => 1.4,
            SheepClass::PregnantLast4WeeksSingle45kgCs2 => 1.2,
            SheepClass::PregnantLast6WeeksTwins45kg => 1.8,
            SheepClass::PregnantLast4WeeksSingle50kgCs2 => 1.5,
            SheepClass::PregnantLast6WeeksSingle50kg => 1.5,
            SheepClass::PregnantLast6WeeksTwins50kg => 1.9,
            SheepClass::PregnantLast4WeeksSingle60kgCs3 => 1.8,
            SheepClass::EweSingleLamb45kg => 2.4,
            SheepClass::EweSingleLamb45kgCs2 => 1.8,
            SheepClass::EweSingleLamb50kg => 3.0,
            SheepClass::EweSingleLamb50kgCs3 => 2.2,
            SheepClass::EweSingleLamb60kgCs3 => 2.6,
            SheepClass::EweTwinLambs45kg => 2.8,
            SheepClass::WeanerGrowing0g25kg => 0.7,
            SheepClass::WeanerGrowing100g25kg => 1.0,
            SheepClass::WeanerGrowing0g35kg => 0.8,
            SheepClass::WeanerGrowingOver200g35kg => 2.5,
        }
    }
}

label_serde!(SheepClass, LookupError::UnknownSheepClass);
