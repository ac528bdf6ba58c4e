//! Report configuration: worker-unit names and side colors.
//!
//! The upstream tool kept these as script-global constants; here they are
//! immutable values loaded once and handed to the diff engine and renderer.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Unit names counted as worker production for visibility filtering.
    pub worker_units: Vec<String>,
    pub benchmark_color: String,
    pub own_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worker_units: vec!["Probe".into(), "SCV".into(), "Drone".into()],
            benchmark_color: "#2abfa4".to_string(),
            own_color: "#b12abf".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
        let cfg: Config =
            serde_json::from_str(&text).with_context(|| format!("parse config file {}", path))?;
        Ok(cfg)
    }

    pub fn worker_set(&self) -> WorkerSet {
        WorkerSet::new(&self.worker_units)
    }
}

/// Membership test for worker-unit names. Small fixed set, linear scan.
#[derive(Debug, Clone)]
pub struct WorkerSet(Vec<String>);

impl WorkerSet {
    pub fn new(names: &[String]) -> WorkerSet {
        WorkerSet(names.to_vec())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }
}
