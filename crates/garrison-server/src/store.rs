//! In-memory domain store.
//!
//! Holds the already-loaded records that handlers authorize against.
//! Durable storage for the business records is out of scope; the audit
//! log has its own sink.

use chrono::Utc;
use dashmap::DashMap;
use garrison_core::{
    Assignment, AssignmentId, Base, BaseId, EquipmentType, EquipmentTypeId, Expenditure,
    ExpenditureId, Inventory, InventoryId, Purchase, PurchaseId, Transfer, TransferId,
};
use std::sync::Arc;

/// Shared domain store.
#[derive(Clone, Default)]
pub struct Store {
    bases: Arc<DashMap<BaseId, Base>>,
    equipment_types: Arc<DashMap<EquipmentTypeId, EquipmentType>>,
    inventory: Arc<DashMap<InventoryId, Inventory>>,
    purchases: Arc<DashMap<PurchaseId, Purchase>>,
    transfers: Arc<DashMap<TransferId, Transfer>>,
    assignments: Arc<DashMap<AssignmentId, Assignment>>,
    expenditures: Arc<DashMap<ExpenditureId, Expenditure>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Bases

    pub fn insert_base(&self, base: Base) {
        self.bases.insert(base.id, base);
    }

    pub fn base(&self, id: BaseId) -> Option<Base> {
        self.bases.get(&id).map(|b| b.clone())
    }

    pub fn bases(&self) -> Vec<Base> {
        self.bases.iter().map(|e| e.value().clone()).collect()
    }

    // Equipment catalog

    pub fn insert_equipment_type(&self, et: EquipmentType) {
        self.equipment_types.insert(et.id, et);
    }

    pub fn equipment_type(&self, id: EquipmentTypeId) -> Option<EquipmentType> {
        self.equipment_types.get(&id).map(|e| e.clone())
    }

    pub fn equipment_types(&self) -> Vec<EquipmentType> {
        self.equipment_types
            .iter()
            .map(|e| e.value().clone())
            .collect()
    }

    // Inventory

    pub fn insert_inventory(&self, inv: Inventory) {
        self.inventory.insert(inv.id, inv);
    }

    pub fn inventory_record(&self, id: InventoryId) -> Option<Inventory> {
        self.inventory.get(&id).map(|i| i.clone())
    }

    pub fn inventory(&self) -> Vec<Inventory> {
        self.inventory.iter().map(|e| e.value().clone()).collect()
    }

    /// Add `quantity` of an equipment type to a base's stock, creating
    /// the stock row if it does not exist yet.
    pub fn adjust_stock(&self, base: BaseId, equipment_type: EquipmentTypeId, delta: i64) {
        let existing = self
            .inventory
            .iter()
            .find(|e| e.value().base == base && e.value().equipment_type == equipment_type)
            .map(|e| *e.key());

        match existing {
            Some(id) => {
                if let Some(mut entry) = self.inventory.get_mut(&id) {
                    let current = entry.quantity as i64;
                    entry.quantity = (current + delta).max(0) as u32;
                    entry.updated_at = Utc::now();
                }
            }
            None => {
                let inv = Inventory {
                    id: InventoryId::new(),
                    base,
                    equipment_type,
                    quantity: delta.max(0) as u32,
                    updated_at: Utc::now(),
                };
                self.inventory.insert(inv.id, inv);
            }
        }
    }

    // Purchases

    /// Record a purchase and fold it into the receiving base's stock.
    pub fn insert_purchase(&self, purchase: Purchase) {
        self.adjust_stock(
            purchase.base,
            purchase.equipment_type,
            purchase.quantity as i64,
        );
        self.purchases.insert(purchase.id, purchase);
    }

    pub fn purchase(&self, id: PurchaseId) -> Option<Purchase> {
        self.purchases.get(&id).map(|p| p.clone())
    }

    pub fn purchases(&self) -> Vec<Purchase> {
        self.purchases.iter().map(|e| e.value().clone()).collect()
    }

    // Transfers

    pub fn insert_transfer(&self, transfer: Transfer) {
        self.transfers.insert(transfer.id, transfer);
    }

    pub fn transfer(&self, id: TransferId) -> Option<Transfer> {
        self.transfers.get(&id).map(|t| t.clone())
    }

    pub fn transfers(&self) -> Vec<Transfer> {
        self.transfers.iter().map(|e| e.value().clone()).collect()
    }

    // Assignments

    pub fn insert_assignment(&self, assignment: Assignment) {
        self.assignments.insert(assignment.id, assignment);
    }

    pub fn assignment(&self, id: AssignmentId) -> Option<Assignment> {
        self.assignments.get(&id).map(|a| a.clone())
    }

    pub fn assignments(&self) -> Vec<Assignment> {
        self.assignments.iter().map(|e| e.value().clone()).collect()
    }

    /// Mark an assignment returned. Returns the updated record.
    pub fn mark_assignment_returned(&self, id: AssignmentId) -> Option<Assignment> {
        self.assignments.get_mut(&id).map(|mut a| {
            a.returned = true;
            a.clone()
        })
    }

    // Expenditures

    /// Record an expenditure and deduct it from the base's stock.
    pub fn insert_expenditure(&self, expenditure: Expenditure) {
        self.adjust_stock(
            expenditure.base,
            expenditure.equipment_type,
            -(expenditure.quantity as i64),
        );
        self.expenditures.insert(expenditure.id, expenditure);
    }

    pub fn expenditure(&self, id: ExpenditureId) -> Option<Expenditure> {
        self.expenditures.get(&id).map(|e| e.clone())
    }

    pub fn expenditures(&self) -> Vec<Expenditure> {
        self.expenditures.iter().map(|e| e.value().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use garrison_core::UserId;

    #[test]
    fn test_purchase_updates_stock() {
        let store = Store::new();
        let base = Base::new("Fort Alpha", "North");
        let et = EquipmentType::new("Rifle", garrison_core::EquipmentCategory::Weapon);
        store.insert_base(base.clone());
        store.insert_equipment_type(et.clone());

        store.insert_purchase(Purchase {
            id: PurchaseId::new(),
            base: base.id,
            equipment_type: et.id,
            quantity: 40,
            supplier: "Defense Supplies Inc.".into(),
            purchase_date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            created_by: UserId::new(),
        });

        let stock = store.inventory();
        assert_eq!(stock.len(), 1);
        assert_eq!(stock[0].quantity, 40);
    }

    #[test]
    fn test_expenditure_deducts_and_saturates() {
        let store = Store::new();
        let base = BaseId::new();
        let et = EquipmentTypeId::new();
        store.adjust_stock(base, et, 10);

        store.insert_expenditure(Expenditure {
            id: ExpenditureId::new(),
            base,
            equipment_type: et,
            quantity: 25,
            reason: "Training exercise".into(),
            expenditure_date: NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
            created_by: UserId::new(),
        });

        // Stock never goes negative.
        assert_eq!(store.inventory()[0].quantity, 0);
    }

    #[test]
    fn test_mark_assignment_returned() {
        let store = Store::new();
        let assignment = Assignment {
            id: AssignmentId::new(),
            base: BaseId::new(),
            equipment_type: EquipmentTypeId::new(),
            quantity: 2,
            assigned_to: "Sgt. Reyes".into(),
            assignment_date: NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(),
            returned: false,
        };
        store.insert_assignment(assignment.clone());

        let updated = store.mark_assignment_returned(assignment.id).unwrap();
        assert!(updated.returned);
        assert!(store.assignment(assignment.id).unwrap().returned);
    }
}
