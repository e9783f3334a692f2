//! Configuration loading for the savings-group engine.
//!
//! This module reads the service settings from the environment and loads
//! dataset snapshots (groups, profiles, members, cycles and payment logs)
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use susu_engine::config::{DatasetLoader, ServiceSettings};
//!
//! let settings = ServiceSettings::from_env();
//! let dataset = DatasetLoader::load(&settings.data_dir).unwrap();
//! println!("Loaded {} groups", dataset.groups.len());
//! ```

mod loader;
mod types;

pub use loader::DatasetLoader;
pub use types::{DEFAULT_BIND_ADDR, DEFAULT_DATA_DIR, Dataset, ServiceSettings};
