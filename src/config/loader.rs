//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::models::JobProfile;

use super::types::{EngineParams, JobsConfig, PayrollConfig, PaySchedule, ScheduleConfig};

/// Loads and provides access to the payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the validated schedule, engine parameters, and seed job
/// profiles.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── schedule.yaml   # Biweekly pay periods for one payroll year
/// ├── engine.yaml     # Active job, correction factor, tax rate
/// └── jobs.yaml       # Named job rate profiles
/// ```
///
/// # Example
///
/// ```no_run
/// use shiftledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
///
/// let periods = loader.schedule().periods_for_month(7).unwrap();
/// println!("July pay dates: {}", periods.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The schedule contains a period that does not span 14 days
    /// - Any job profile carries a negative rate
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let schedule_config = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;
        let schedule = PaySchedule::try_from(schedule_config)?;

        let engine_path = path.join("engine.yaml");
        let params = Self::load_yaml::<EngineParams>(&engine_path)?;

        let jobs_path = path.join("jobs.yaml");
        let jobs_config = Self::load_yaml::<JobsConfig>(&jobs_path)?;
        let jobs = jobs_config.profiles();
        for job in &jobs {
            job.validate()?;
        }

        Ok(Self {
            config: PayrollConfig::new(schedule, params, jobs),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LedgerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LedgerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the validated payroll schedule.
    pub fn schedule(&self) -> &PaySchedule {
        self.config.schedule()
    }

    /// Returns the engine parameters.
    pub fn params(&self) -> &EngineParams {
        self.config.params()
    }

    /// Returns the seed job profiles.
    pub fn jobs(&self) -> &[JobProfile] {
        self.config.jobs()
    }

    /// Returns the active job profile from the seed set, if present.
    pub fn active_job(&self) -> Option<&JobProfile> {
        let name = &self.config.params().active_job;
        self.config.jobs().iter().find(|job| &job.job_name == name)
    }
}
