//! Baseline data seeding.
//!
//! Installs the deterministic fixtures the rest of the system assumes
//! pre-exist: bases, the equipment catalog, and provisioned accounts with
//! role records. No randomized generation.

use crate::{directory::Directory, store::Store};
use chrono::NaiveDate;
use garrison_core::{
    Assignment, AssignmentId, Base, EquipmentCategory, EquipmentType, Principal, Purchase,
    PurchaseId, Role, Transfer, TransferId, UserId,
};
use tracing::info;

/// Fixed tokens for the baseline accounts, used by the dev profile and
/// the integration tests.
pub mod tokens {
    pub const ADMIN: &str = "tok-admin";
    pub const COMMANDER_ALPHA: &str = "tok-cmdr-alpha";
    pub const COMMANDER_BRAVO: &str = "tok-cmdr-bravo";
    pub const LOGISTICS: &str = "tok-logistics";
    pub const NO_ROLE: &str = "tok-unassigned";
}

/// Identifiers of the seeded records, handed back for tests and dev
/// tooling.
pub struct Seeded {
    pub alpha: Base,
    pub bravo: Base,
    pub rifle: EquipmentType,
    pub truck: EquipmentType,
    pub purchase_alpha: PurchaseId,
    pub transfer_alpha_bravo: TransferId,
    pub assignment_alpha: AssignmentId,
}

/// Populate `store` and `directory` with the baseline dataset.
pub fn baseline(store: &Store, directory: &Directory) -> Seeded {
    let alpha = Base::new("Fort Alpha", "Northern sector");
    let bravo = Base::new("Fort Bravo", "Coastal sector");
    store.insert_base(alpha.clone());
    store.insert_base(bravo.clone());

    let rifle = EquipmentType::new("Service Rifle", EquipmentCategory::Weapon);
    let truck = EquipmentType::new("Transport Truck", EquipmentCategory::Vehicle);
    store.insert_equipment_type(rifle.clone());
    store.insert_equipment_type(truck.clone());

    let admin = Principal::new(UserId::new(), "admin", Role::Admin);
    let cmdr_alpha = Principal::base_commander(UserId::new(), "cmdr_alpha", alpha.id);
    let cmdr_bravo = Principal::base_commander(UserId::new(), "cmdr_bravo", bravo.id);
    let logistics = Principal::new(UserId::new(), "logistics", Role::LogisticsOfficer);
    let unassigned = Principal::without_role(UserId::new(), "unassigned");

    directory.provision(tokens::ADMIN, admin.clone());
    directory.provision(tokens::COMMANDER_ALPHA, cmdr_alpha.clone());
    directory.provision(tokens::COMMANDER_BRAVO, cmdr_bravo);
    directory.provision(tokens::LOGISTICS, logistics);
    directory.provision(tokens::NO_ROLE, unassigned);

    let purchase_alpha = PurchaseId::new();
    store.insert_purchase(Purchase {
        id: purchase_alpha,
        base: alpha.id,
        equipment_type: rifle.id,
        quantity: 120,
        supplier: "Defense Supplies Inc.".into(),
        purchase_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        created_by: admin.id,
    });

    let transfer_alpha_bravo = TransferId::new();
    store.insert_transfer(Transfer {
        id: transfer_alpha_bravo,
        from_base: alpha.id,
        to_base: bravo.id,
        equipment_type: truck.id,
        quantity: 4,
        transfer_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        created_by: admin.id,
    });

    let assignment_alpha = AssignmentId::new();
    store.insert_assignment(Assignment {
        id: assignment_alpha,
        base: alpha.id,
        equipment_type: rifle.id,
        quantity: 1,
        assigned_to: "Sgt. Reyes".into(),
        assignment_date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
        returned: false,
    });

    info!(
        bases = 2,
        equipment_types = 2,
        accounts = directory.len(),
        "Baseline data seeded"
    );

    Seeded {
        alpha,
        bravo,
        rifle,
        truck,
        purchase_alpha,
        transfer_alpha_bravo,
        assignment_alpha,
    }
}
