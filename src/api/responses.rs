//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::StopwatchReport;

/// API response structure for action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub stopwatch: StopwatchReport,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, stopwatch: StopwatchReport) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            stopwatch,
        }
    }

    /// Create a response whose status follows the running flag
    pub fn from_report(message: String, stopwatch: StopwatchReport) -> Self {
        let status = if stopwatch.snapshot.running { "running" } else { "paused" };
        Self::new(status.to_string(), message, stopwatch)
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub stopwatch: StopwatchReport,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
