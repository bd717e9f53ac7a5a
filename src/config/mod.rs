//! Configuration loading and management for the attendance payroll engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files: metadata, deduction rules and the holiday calendar.
//!
//! # Example
//!
//! ```no_run
//! use attendance_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded payroll rules: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeductionRules, HolidaysFile, PayrollConfig, PayrollFile, PayrollMetadata};
