//! Dataset loading functionality.
//!
//! This module provides the [`DatasetLoader`] type for loading a store
//! snapshot from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Cycle, Group, Member, PaymentLog, Profile};

use super::types::Dataset;

/// Loads a dataset snapshot from a directory of YAML files.
///
/// # Directory Structure
///
/// Each file holds a YAML sequence of rows for one table:
/// ```text
/// config/demo/
/// ├── groups.yaml
/// ├── profiles.yaml
/// ├── members.yaml
/// ├── cycles.yaml
/// └── payment_logs.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use susu_engine::config::DatasetLoader;
///
/// let dataset = DatasetLoader::load("./config/demo")?;
/// println!("Loaded {} groups", dataset.groups.len());
/// # Ok::<(), susu_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads every table file from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if a table file is missing and
    /// `ConfigParseError` if one contains invalid YAML or rows.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Dataset> {
        let path = path.as_ref();

        let dataset = Dataset {
            groups: Self::load_yaml::<Vec<Group>>(&path.join("groups.yaml"))?,
            profiles: Self::load_yaml::<Vec<Profile>>(&path.join("profiles.yaml"))?,
            members: Self::load_yaml::<Vec<Member>>(&path.join("members.yaml"))?,
            cycles: Self::load_yaml::<Vec<Cycle>>(&path.join("cycles.yaml"))?,
            payment_logs: Self::load_yaml::<Vec<PaymentLog>>(&path.join("payment_logs.yaml"))?,
        };

        info!(
            path = %path.display(),
            groups = dataset.groups.len(),
            members = dataset.members.len(),
            cycles = dataset.cycles.len(),
            payment_logs = dataset.payment_logs.len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
