//! Health check DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of probing the service dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    /// Whether the persistence layer is reachable.
    pub database: bool,
    /// Whether the cache layer is reachable.
    pub redis: bool,
}

impl HealthReport {
    /// Returns `true` when every dependency is reachable.
    #[must_use]
    pub const fn all_healthy(&self) -> bool {
        self.database && self.redis
    }
}

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Combined status: `healthy` when every dependency is reachable,
    /// `degraded` otherwise.
    pub status: String,
    /// Per-dependency statuses.
    pub services: ServiceHealth,
    /// Time of the probe.
    pub timestamp: DateTime<Utc>,
}

/// Per-dependency health statuses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceHealth {
    /// Persistence-layer status: `healthy` or `unhealthy`.
    pub database: String,
    /// Cache-layer status: `healthy` or `unhealthy`.
    pub redis: String,
}

impl HealthResponse {
    /// Builds a response body from a probe report, stamped with the current time.
    #[must_use]
    pub fn from_report(report: &HealthReport) -> Self {
        Self {
            status: if report.all_healthy() {
                "healthy".to_string()
            } else {
                "degraded".to_string()
            },
            services: ServiceHealth {
                database: status_label(report.database),
                redis: status_label(report.redis),
            },
            timestamp: Utc::now(),
        }
    }
}

fn status_label(healthy: bool) -> String {
    if healthy {
        "healthy".to_string()
    } else {
        "unhealthy".to_string()
    }
}
