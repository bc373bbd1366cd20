//! Service layer for Calculatron
//!
//! Pure computation on top of the state model. The totals service derives
//! the displayed aggregates from a state snapshot.

pub mod totals;

pub use totals::{IncomeSummary, TotalsService};
