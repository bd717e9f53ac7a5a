//! Employee model and related types.
//!
//! This module defines the Employee struct together with the Role and
//! Segment enums used by the dashboard to group staff.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The role an employee holds in the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Dashboard administrator.
    Admin,
    /// Back-office staff.
    Backend,
    /// Leads a team of agents.
    TeamLeader,
    /// Front-line agent.
    Agent,
    /// Service account.
    System,
    /// Automated chat account.
    Chatbot,
}

/// The business segment an employee works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Segment {
    /// Personal loans.
    Pl,
    /// Business loans.
    Bl,
    /// Personal loans, digital channel.
    PlDigital,
    /// Business loans, digital channel.
    BlDigital,
}

/// Represents an employee whose attendance drives payroll.
///
/// The source of truth lives in an external store; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Human-facing employee code.
    #[serde(alias = "emp_code")]
    pub employee_code: String,
    /// Organisational role.
    pub role: Role,
    /// Business segment, when assigned.
    #[serde(default)]
    pub segment: Option<Segment>,
    /// Gross monthly salary. `None` is treated as zero.
    #[serde(default, alias = "salary_current")]
    pub monthly_salary: Option<Decimal>,
    /// Whether the employee is currently active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Returns the monthly salary, with a missing value read as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_payroll::models::{Employee, Role};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     first_name: "Asha".to_string(),
    ///     last_name: "Rao".to_string(),
    ///     employee_code: "E001".to_string(),
    ///     role: Role::Agent,
    ///     segment: None,
    ///     monthly_salary: None,
    ///     is_active: true,
    /// };
    /// assert_eq!(employee.salary(), Decimal::ZERO);
    /// ```
    pub fn salary(&self) -> Decimal {
        self.monthly_salary.unwrap_or(Decimal::ZERO)
    }

    /// Returns "first last", trimmed when either part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
