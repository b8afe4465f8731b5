//! # Core Report
//!
//! Serializable snapshot of what is registered in a core, for diagnostics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Names registered in one core plus observer counts per notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreReport {
    pub key: String,
    pub proxies: Vec<String>,
    pub mediators: Vec<String>,
    pub commands: Vec<String>,
    pub observers: BTreeMap<String, usize>,
}

impl CoreReport {
    /// Total number of observers across all notification names
    pub fn observer_total(&self) -> usize {
        self.observers.values().sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
