//! Configuration types.
//!
//! This module contains the dataset snapshot deserialized from YAML files
//! and the service settings read from the environment.

use serde::{Deserialize, Serialize};

use crate::models::{Cycle, Group, Member, PaymentLog, Profile};

/// Default address the service binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default dataset directory.
pub const DEFAULT_DATA_DIR: &str = "./config/demo";

/// A full snapshot of the store's tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Rows of the groups table.
    pub groups: Vec<Group>,
    /// Rows of the profiles table.
    pub profiles: Vec<Profile>,
    /// Rows of the members table.
    pub members: Vec<Member>,
    /// Rows of the cycles table.
    pub cycles: Vec<Cycle>,
    /// Rows of the payment logs table.
    pub payment_logs: Vec<PaymentLog>,
}

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Socket address to listen on.
    pub bind_addr: String,
    /// Directory holding the dataset YAML files.
    pub data_dir: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_dir: DEFAULT_DATA_DIR.to_string(),
        }
    }
}

impl ServiceSettings {
    /// Reads `SUSU_BIND_ADDR` and `SUSU_DATA_DIR`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            bind_addr: get("SUSU_BIND_ADDR", DEFAULT_BIND_ADDR),
            data_dir: get("SUSU_DATA_DIR", DEFAULT_DATA_DIR),
        }
    }
}
