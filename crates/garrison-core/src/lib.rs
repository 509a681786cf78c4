//! Core domain types for Garrison.
//!
//! Shared by every other crate in the workspace: strongly-typed
//! identifiers, roles and principals, bases, and the equipment records
//! that access control decisions are rendered against. This crate does
//! no I/O.

mod base;
mod id;
mod principal;
mod record;
mod role;
mod scope;

pub use base::{Base, EquipmentCategory, EquipmentType};
pub use id::{
    AssignmentId, BaseId, EquipmentTypeId, ExpenditureId, IdParseError, InventoryId, LogRecordId,
    PurchaseId, TransferId, UserId,
};
pub use principal::Principal;
pub use record::{Assignment, Expenditure, Inventory, Purchase, Transfer};
pub use role::Role;
pub use scope::{ResourceScope, Scoped};
