//! The audit record itself.

use chrono::{DateTime, Utc};
use garrison_core::{LogRecordId, Principal, UserId};
use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from each request/response body.
pub const MAX_BODY_CHARS: usize = 5000;

/// Cap a body at [`MAX_BODY_CHARS`] characters.
///
/// The limit is in characters, not bytes, so a multi-byte scalar is never
/// split in half.
pub fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_BODY_CHARS).collect()
}

/// One persisted record of an API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiLogRecord {
    /// Unique record identifier.
    pub id: LogRecordId,
    /// When the record was produced.
    pub timestamp: DateTime<Utc>,
    /// Authenticated caller, if any.
    pub user: Option<UserId>,
    /// Login name of the caller, if any.
    pub username: Option<String>,
    /// Request path.
    pub endpoint: String,
    /// HTTP method.
    pub method: String,
    /// Response status code.
    pub status_code: u16,
    /// Request body, capped at [`MAX_BODY_CHARS`] characters.
    pub request_body: String,
    /// Response body, capped at [`MAX_BODY_CHARS`] characters.
    pub response_body: String,
    /// Caller address: first forwarded-for entry, else the peer address.
    pub ip_address: String,
}

impl ApiLogRecord {
    /// Build a record, truncating both bodies.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        principal: Option<&Principal>,
        endpoint: impl Into<String>,
        method: impl Into<String>,
        status_code: u16,
        request_body: &str,
        response_body: &str,
        ip_address: impl Into<String>,
    ) -> Self {
        Self {
            id: LogRecordId::new(),
            timestamp: Utc::now(),
            user: principal.map(|p| p.id),
            username: principal.map(|p| p.username.clone()),
            endpoint: endpoint.into(),
            method: method.into(),
            status_code,
            request_body: truncate_body(request_body),
            response_body: truncate_body(response_body),
            ip_address: ip_address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garrison_core::Role;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_noop_under_limit() {
        assert_eq!(truncate_body("hello"), "hello");
        assert_eq!(truncate_body(""), "");
    }

    #[test]
    fn test_truncate_10000_chars_to_exactly_5000() {
        let body = "x".repeat(10_000);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.chars().count(), 5000);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // 6000 three-byte scalars: 18000 bytes, 6000 chars.
        let body = "\u{1F02}".repeat(6000);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.chars().count(), 5000);
        assert!(!truncated.is_ascii());
    }

    #[test]
    fn test_record_truncates_both_bodies() {
        let long = "y".repeat(12_000);
        let record = ApiLogRecord::new(
            None,
            "/api/v1/purchases",
            "POST",
            201,
            &long,
            &long,
            "10.0.0.1",
        );
        assert_eq!(record.request_body.chars().count(), MAX_BODY_CHARS);
        assert_eq!(record.response_body.chars().count(), MAX_BODY_CHARS);
        assert!(record.user.is_none());
    }

    #[test]
    fn test_record_carries_principal_identity() {
        let principal =
            Principal::new(garrison_core::UserId::new(), "quarter", Role::LogisticsOfficer);
        let record = ApiLogRecord::new(
            Some(&principal),
            "/api/v1/inventory",
            "GET",
            200,
            "",
            "[]",
            "192.168.1.9",
        );
        assert_eq!(record.user, Some(principal.id));
        assert_eq!(record.username.as_deref(), Some("quarter"));
    }

    proptest! {
        #[test]
        fn truncated_body_never_exceeds_limit(body in ".*") {
            let truncated = truncate_body(&body);
            prop_assert!(truncated.chars().count() <= MAX_BODY_CHARS);
        }
    }
}
