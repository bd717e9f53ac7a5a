//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Holiday, HolidayCalendar};

use super::types::{DeductionRules, HolidaysFile, PayrollConfig, PayrollFile, PayrollMetadata};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml     # Metadata and deduction rules
/// └── holidays/
///     └── 2024.yaml    # Holidays for one calendar year
/// ```
///
/// Every `*.yaml` file under `holidays/` is merged into one calendar, so
/// supporting a new year means dropping in a new file.
///
/// # Example
///
/// ```no_run
/// use attendance_payroll::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let republic_day = NaiveDate::from_ymd_opt(2024, 1, 26).unwrap();
/// assert!(loader.holidays().is_holiday(republic_day));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` or the `holidays/` directory is missing
    /// - Any file contains invalid YAML
    /// - A deduction threshold is zero
    /// - A holiday is dated outside the year its file declares
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollFile>(&payroll_path)?;
        Self::validate_rules(&payroll.deductions, &payroll_path)?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            path = %path.display(),
            holidays = holidays.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(payroll.metadata, payroll.deductions, holidays),
        })
    }

    /// Builds a loader from already-constructed parts.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_rules(rules: &DeductionRules, path: &Path) -> PayrollResult<()> {
        let invalid = |field: &str| PayrollError::InvalidConfig {
            path: path.display().to_string(),
            message: format!("{} must be greater than zero", field),
        };

        if rules.late_to_absent == 0 {
            return Err(invalid("late_to_absent"));
        }
        if rules.half_day_to_absent == 0 {
            return Err(invalid("half_day_to_absent"));
        }
        Ok(())
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> PayrollResult<HolidayCalendar> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| PayrollError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| PayrollError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut calendar = HolidayCalendar::default();
        for path in paths {
            let file = Self::load_yaml::<HolidaysFile>(&path)?;
            if let Some(stray) = file.holidays.iter().find(|h| h.date.year() != file.year) {
                return Err(PayrollError::InvalidConfig {
                    path: path.display().to_string(),
                    message: format!(
                        "holiday '{}' on {} is outside year {}",
                        stray.name, stray.date, file.year
                    ),
                });
            }
            calendar.extend(file.holidays);
        }

        Ok(calendar)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Returns the configured deduction rules.
    pub fn deduction_rules(&self) -> DeductionRules {
        self.config.deduction_rules()
    }

    /// Returns the configured holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        self.config.holidays()
    }

    /// Returns the holiday calendar to use for a request.
    ///
    /// A non-empty override replaces the configured calendar entirely;
    /// otherwise the configured calendar is cloned.
    pub fn calendar_for(&self, overrides: Option<Vec<Holiday>>) -> HolidayCalendar {
        match overrides {
            Some(holidays) if !holidays.is_empty() => HolidayCalendar::new(holidays),
            _ => self.config.holidays().clone(),
        }
    }
}
