//! Strongly-typed job identifier
//!
//! Job ids are assigned from a monotonic counter held in the application
//! state. Assigning from a counter rather than the list length keeps ids
//! unique under arbitrary add sequences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a job, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    /// The first id handed out by a fresh counter
    pub const fn first() -> Self {
        Self(1)
    }

    /// Create an id from a raw counter value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The id that follows this one
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw counter value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_sequence() {
        let a = JobId::first();
        let b = a.next();
        let c = b.next();
        assert_eq!(a.as_u64(), 1);
        assert_eq!(b.as_u64(), 2);
        assert_ne!(b, c);
    }

    #[test]
    fn test_display() {
        assert_eq!(JobId::from_raw(3).to_string(), "job-3");
    }

    #[test]
    fn test_serialization() {
        let id = JobId::from_raw(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: JobId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
