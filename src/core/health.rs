//! Health reporting for container orchestration probes.

use serde::{Deserialize, Serialize};

use crate::domains::votes::VoteStore;

/// Overall service health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Unhealthy,
}

/// Body returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
}

impl HealthReport {
    /// Check whether the service can still serve votes.
    ///
    /// The only shared state is the vote store, so the service is healthy
    /// as long as its lock has not been poisoned.
    pub fn check(store: &VoteStore) -> Self {
        let status = if store.is_healthy() {
            HealthStatus::Ok
        } else {
            HealthStatus::Unhealthy
        };
        Self { status }
    }

    pub fn is_ok(&self) -> bool {
        self.status == HealthStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_is_healthy() {
        let store = VoteStore::with_defaults().unwrap();
        let report = HealthReport::check(&store);
        assert!(report.is_ok());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "status": "ok" })
        );
    }

    #[test]
    fn test_unhealthy_serializes_lowercase() {
        let report = HealthReport {
            status: HealthStatus::Unhealthy,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"status":"unhealthy"}"#
        );
    }
}
