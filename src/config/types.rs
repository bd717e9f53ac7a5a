//! Configuration types for payroll derivation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::{Holiday, HolidayCalendar};

/// Metadata describing the payroll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollMetadata {
    /// Human-readable name of the organisation or ruleset.
    pub name: String,
    /// ISO 4217 currency code salaries are expressed in (e.g., "INR").
    pub currency: String,
}

/// Rules that convert late arrivals and half days into deducted days.
///
/// # Example
///
/// ```
/// use attendance_payroll::config::DeductionRules;
///
/// let rules = DeductionRules::default();
/// assert_eq!(rules.late_to_absent, 3);
/// assert_eq!(rules.half_day_to_absent, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRules {
    /// Late arrivals that add up to one deducted day.
    pub late_to_absent: u32,
    /// Half days that add up to one deducted day.
    pub half_day_to_absent: u32,
}

impl Default for DeductionRules {
    fn default() -> Self {
        Self {
            late_to_absent: 3,
            half_day_to_absent: 2,
        }
    }
}

/// Structure of `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollFile {
    /// Metadata section.
    pub metadata: PayrollMetadata,
    /// Deduction rules; defaults apply when omitted.
    #[serde(default)]
    pub deductions: DeductionRules,
}

/// Structure of a `holidays/<year>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The year every listed holiday must fall in.
    pub year: i32,
    /// The holidays of that year.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: PayrollMetadata,
    deduction_rules: DeductionRules,
    holidays: HolidayCalendar,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: PayrollMetadata,
        deduction_rules: DeductionRules,
        holidays: HolidayCalendar,
    ) -> Self {
        Self {
            metadata,
            deduction_rules,
            holidays,
        }
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the deduction rules.
    pub fn deduction_rules(&self) -> DeductionRules {
        self.deduction_rules
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}
