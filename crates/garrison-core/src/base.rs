//! Bases and equipment catalog entries.

use crate::{BaseId, EquipmentTypeId};
use serde::{Deserialize, Serialize};

/// A named facility. Identity is the `BaseId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    /// Unique identifier.
    pub id: BaseId,
    /// Facility name.
    pub name: String,
    /// Human-readable location.
    pub location: String,
}

impl Base {
    /// Create a new base.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: BaseId::new(),
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Broad equipment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Weapon,
    Vehicle,
    Ammunition,
    Communication,
    Medical,
    Other,
}

/// An entry in the equipment catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentType {
    /// Unique identifier.
    pub id: EquipmentTypeId,
    /// Display name.
    pub name: String,
    /// Classification.
    pub category: EquipmentCategory,
}

impl EquipmentType {
    /// Create a new catalog entry.
    pub fn new(name: impl Into<String>, category: EquipmentCategory) -> Self {
        Self {
            id: EquipmentTypeId::new(),
            name: name.into(),
            category,
        }
    }
}
