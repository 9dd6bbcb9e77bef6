//! Common types shared across modules

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Group
// ============================================================================

/// Opaque group identifier
///
/// The group list may carry ids as JSON numbers or strings; both are
/// normalized to their string form, which is what goes on the wire and into
/// output file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawGroupId", into = "String")]
pub struct GroupId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGroupId {
    Num(serde_json::Number),
    Str(String),
}

impl From<RawGroupId> for GroupId {
    fn from(raw: RawGroupId) -> Self {
        match raw {
            RawGroupId::Num(n) => Self(n.to_string()),
            RawGroupId::Str(s) => Self(s),
        }
    }
}

impl From<GroupId> for String {
    fn from(id: GroupId) -> Self {
        id.0
    }
}

impl GroupId {
    /// Create a group id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// One entry of the group list file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier
    pub id: GroupId,
    /// Display name, when the list carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Group {
    /// Create a group with only an id
    pub fn new(id: impl Into<GroupId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

// ============================================================================
// Rate Limit Headers
// ============================================================================

/// Header carrying the number of requests left in the current window
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Header carrying the seconds until the window resets
pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Rate limit values reported by the API on a response
///
/// These are only surfaced for a human watching the logs; nothing throttles
/// on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window
    pub remaining: Option<u64>,
    /// Seconds until the window resets
    pub reset_seconds: Option<u64>,
}

impl RateLimitInfo {
    /// Read rate limit headers from a response
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse().ok())
        };

        Self {
            remaining: read(RATE_LIMIT_REMAINING),
            reset_seconds: read(RATE_LIMIT_RESET),
        }
    }
}

impl fmt::Display for RateLimitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<u64>| v.map_or_else(|| "unknown".to_string(), |n| n.to_string());
        write!(
            f,
            "remaining: {}, reset: {}",
            show(self.remaining),
            show(self.reset_seconds)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_group_id_from_number_and_string() {
        let groups: Vec<Group> =
            serde_json::from_str(r#"[{"id": 1234}, {"id": "houston-rust", "name": "Rust"}]"#)
                .unwrap();

        assert_eq!(groups[0].id.as_str(), "1234");
        assert_eq!(groups[1].id.as_str(), "houston-rust");
        assert_eq!(groups[1].name.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_group_id_accepts_any_json_number() {
        let groups: Vec<Group> =
            serde_json::from_str(r#"[{"id": 18446744073709551615}, {"id": -3}, {"id": 12.5}]"#)
                .unwrap();

        assert_eq!(groups[0].id.as_str(), "18446744073709551615");
        assert_eq!(groups[1].id.as_str(), "-3");
        assert_eq!(groups[2].id.as_str(), "12.5");
    }

    #[test]
    fn test_group_id_rejects_object() {
        let result: std::result::Result<Group, _> = serde_json::from_str(r#"{"id": {"x": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_group_id_serializes_as_string() {
        let json = serde_json::to_value(Group::new(77u64)).unwrap();
        assert_eq!(json, serde_json::json!({"id": "77"}));
    }

    #[test]
    fn test_rate_limit_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from_static("29"));
        headers.insert(RATE_LIMIT_RESET, HeaderValue::from_static("10"));

        let info = RateLimitInfo::from_headers(&headers);
        assert_eq!(info.remaining, Some(29));
        assert_eq!(info.reset_seconds, Some(10));
        assert_eq!(info.to_string(), "remaining: 29, reset: 10");
    }

    #[test]
    fn test_rate_limit_missing_headers() {
        let info = RateLimitInfo::from_headers(&HeaderMap::new());
        assert_eq!(info, RateLimitInfo::default());
        assert_eq!(info.to_string(), "remaining: unknown, reset: unknown");
    }
}
