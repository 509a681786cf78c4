//! Identity and role directory.
//!
//! Pure lookup from a bearer token to a [`Principal`]. Accounts and role
//! records are created at provisioning time (seeding, in this tree); the
//! rest of the system only ever reads from here.

use dashmap::DashMap;
use garrison_core::{Principal, UserId};
use std::sync::Arc;

/// Token-to-principal directory.
#[derive(Clone, Default)]
pub struct Directory {
    by_token: Arc<DashMap<String, Principal>>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a principal under `token`.
    pub fn provision(&self, token: impl Into<String>, principal: Principal) {
        self.by_token.insert(token.into(), principal);
    }

    /// Resolve a bearer token. Unknown tokens are anonymous, not errors.
    pub fn resolve(&self, token: &str) -> Option<Principal> {
        self.by_token.get(token).map(|p| p.clone())
    }

    /// Look up a principal by user id.
    pub fn find_user(&self, id: UserId) -> Option<Principal> {
        self.by_token
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone())
    }

    /// Number of provisioned accounts.
    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    /// Whether no accounts are provisioned.
    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garrison_core::Role;

    #[test]
    fn test_resolve_known_token() {
        let directory = Directory::new();
        let principal = Principal::new(UserId::new(), "adm", Role::Admin);
        directory.provision("token-1", principal.clone());

        assert_eq!(directory.resolve("token-1"), Some(principal));
    }

    #[test]
    fn test_resolve_unknown_token_is_none() {
        let directory = Directory::new();
        assert_eq!(directory.resolve("nope"), None);
    }
}
