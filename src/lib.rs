//! Attendance payroll engine
//!
//! This crate aggregates daily attendance rows into monthly status counts,
//! counts working days against a holiday calendar, and derives each
//! employee's net salary after late and half-day deductions.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
