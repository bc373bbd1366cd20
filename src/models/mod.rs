//! Core data models for Calculatron
//!
//! This module contains the data structures that represent the income
//! calculator domain: jobs, expenses, money amounts, and identifiers.

pub mod expense;
pub mod ids;
pub mod job;
pub mod money;

pub use expense::Expense;
pub use ids::JobId;
pub use job::{Job, JobKind};
pub use money::{Money, MoneyParseError};
