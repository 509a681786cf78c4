//! Base scoping of access-controlled records.

use crate::BaseId;
use serde::{Deserialize, Serialize};

/// How a record is scoped to bases.
///
/// Every record subject to access control maps onto exactly one of these
/// variants; authorization dispatches on the variant by pattern match
/// instead of probing record fields at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceScope {
    /// A record tied to one base (inventory, purchase, assignment,
    /// expenditure).
    SingleBase {
        /// The owning base.
        base: BaseId,
    },
    /// A record spanning two bases (transfer).
    DualBase {
        /// Origin base.
        from_base: BaseId,
        /// Destination base.
        to_base: BaseId,
    },
    /// The base entity itself.
    BaseItself {
        /// The base in question.
        base: BaseId,
    },
}

impl ResourceScope {
    /// Whether `base` participates in this scope.
    pub fn involves(&self, base: BaseId) -> bool {
        match *self {
            Self::SingleBase { base: b } | Self::BaseItself { base: b } => b == base,
            Self::DualBase { from_base, to_base } => from_base == base || to_base == base,
        }
    }
}

/// Records that carry a base scope.
pub trait Scoped {
    /// The scope access decisions are rendered against.
    fn scope(&self) -> ResourceScope;
}

impl Scoped for crate::Base {
    fn scope(&self) -> ResourceScope {
        ResourceScope::BaseItself { base: self.id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_involves_single() {
        let base = BaseId::new();
        let scope = ResourceScope::SingleBase { base };
        assert!(scope.involves(base));
        assert!(!scope.involves(BaseId::new()));
    }

    #[test]
    fn test_involves_dual_either_endpoint() {
        let from = BaseId::new();
        let to = BaseId::new();
        let scope = ResourceScope::DualBase {
            from_base: from,
            to_base: to,
        };
        assert!(scope.involves(from));
        assert!(scope.involves(to));
        assert!(!scope.involves(BaseId::new()));
    }
}
