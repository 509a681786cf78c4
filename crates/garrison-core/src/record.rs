//! Equipment records subject to access control.
//!
//! Field sets follow the asset-management domain: quantities, suppliers,
//! assignees. The authorization layer only ever reads the base-scope
//! fields, via [`Scoped`].

use crate::{
    AssignmentId, BaseId, EquipmentTypeId, ExpenditureId, InventoryId, PurchaseId, ResourceScope,
    Scoped, TransferId, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Stock of one equipment type at one base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: InventoryId,
    pub base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub updated_at: DateTime<Utc>,
}

impl Scoped for Inventory {
    fn scope(&self) -> ResourceScope {
        ResourceScope::SingleBase { base: self.base }
    }
}

/// A procurement of equipment for one base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub supplier: String,
    pub purchase_date: NaiveDate,
    pub created_by: UserId,
}

impl Scoped for Purchase {
    fn scope(&self) -> ResourceScope {
        ResourceScope::SingleBase { base: self.base }
    }
}

/// Movement of equipment between two bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: TransferId,
    pub from_base: BaseId,
    pub to_base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub transfer_date: NaiveDate,
    pub created_by: UserId,
}

impl Scoped for Transfer {
    fn scope(&self) -> ResourceScope {
        ResourceScope::DualBase {
            from_base: self.from_base,
            to_base: self.to_base,
        }
    }
}

/// Equipment assigned to personnel at a base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub assigned_to: String,
    pub assignment_date: NaiveDate,
    pub returned: bool,
}

impl Scoped for Assignment {
    fn scope(&self) -> ResourceScope {
        ResourceScope::SingleBase { base: self.base }
    }
}

/// Equipment consumed or written off at a base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expenditure {
    pub id: ExpenditureId,
    pub base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub reason: String,
    pub expenditure_date: NaiveDate,
    pub created_by: UserId,
}

impl Scoped for Expenditure {
    fn scope(&self) -> ResourceScope {
        ResourceScope::SingleBase { base: self.base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_scope_is_dual() {
        let transfer = Transfer {
            id: TransferId::new(),
            from_base: BaseId::new(),
            to_base: BaseId::new(),
            equipment_type: EquipmentTypeId::new(),
            quantity: 5,
            transfer_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            created_by: UserId::new(),
        };
        assert_eq!(
            transfer.scope(),
            ResourceScope::DualBase {
                from_base: transfer.from_base,
                to_base: transfer.to_base,
            }
        );
    }

    #[test]
    fn test_inventory_scope_is_single() {
        let inv = Inventory {
            id: InventoryId::new(),
            base: BaseId::new(),
            equipment_type: EquipmentTypeId::new(),
            quantity: 100,
            updated_at: Utc::now(),
        };
        assert_eq!(inv.scope(), ResourceScope::SingleBase { base: inv.base });
    }
}
