//! Calculatron - An income calculator for your terminal
//!
//! Models a set of income sources (hourly, salaried, and passive) plus
//! recurring monthly expenses, and derives weekly, monthly, and yearly
//! income totals from them. All mutations flow through a pure reducer
//! that validates and clamps input against configurable limits.

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod tui;

pub use error::{CalcError, CalcResult};
