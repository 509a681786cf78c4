//! Role and base scoped authorization for Garrison.
//!
//! The engine is a pure total function over already-loaded data: given a
//! [`Principal`](garrison_core::Principal), a [`ResourceScope`] and an
//! [`Action`], it returns [`Allow`](Decision::Allow) or
//! [`Deny`](Decision::Deny). It never errors and never panics; a principal
//! with no role record is denied, not rejected with an exception.
//!
//! Collection-level filtering (which records show up in a list) is a
//! separate concern layered on top via [`Decision`] checks per record.

mod engine;
mod log;
mod types;

pub use engine::{can_modify_assignments, decide};
pub use log::log_decision;
pub use types::{Action, Decision};
