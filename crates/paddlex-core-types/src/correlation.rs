//! Request correlation
//!
//! Each HTTP request is tagged with a `RequestId` so that log lines emitted
//! while serving it (including the storage layer's op events) can be grouped.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new time-ordered RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Adopt an id supplied by a caller (e.g. an upstream `x-request-id` header)
    ///
    /// Blank input yields a freshly generated id instead.
    pub fn from_string(s: String) -> Self {
        if s.trim().is_empty() {
            Self::new()
        } else {
            Self(s)
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_from_string_keeps_caller_value() {
        let id = RequestId::from_string("upstream-123".to_string());
        assert_eq!(id.as_str(), "upstream-123");
    }

    #[test]
    fn test_from_string_blank_generates() {
        let id = RequestId::from_string("   ".to_string());
        assert!(!id.as_str().trim().is_empty());
        assert_ne!(id.as_str(), "   ");
    }

    #[test]
    fn test_serialization() {
        let id = RequestId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
