//! Application state
//!
//! The whole session model lives in a single [`CalculatorState`] value:
//! the job list, the expense map, and the vacation-weeks count. Mutations
//! go through the pure reducer in [`reducer`]; derived totals are computed
//! from a state snapshot by the totals service and never stored.

pub mod reducer;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Expense, Job, JobId, JobKind, Money};

pub use reducer::{apply, Action};

/// The complete in-memory model for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Income sources, in insertion order
    pub jobs: Vec<Job>,
    /// Recurring monthly expenses, keyed by a short identifier
    pub expenses: BTreeMap<String, Expense>,
    /// Vacation weeks per year, always within 0..=52
    pub weeks_off: u8,
    /// Monotonic counter for the next job id
    next_job_id: JobId,
}

impl CalculatorState {
    /// Create an empty state
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            expenses: BTreeMap::new(),
            weeks_off: 0,
            next_job_id: JobId::first(),
        }
    }

    /// The fixed data set a fresh session starts with
    pub fn sample() -> Self {
        let mut state = Self::new();
        state.weeks_off = 4;

        for (kind, rate, hours) in [
            (JobKind::Hourly, 140, Some(20)),
            (JobKind::Salary, 120_000, None),
            (JobKind::Passive, 300, None),
        ] {
            let id = state.allocate_job_id();
            state
                .jobs
                .push(Job::new(id, kind, Money::from_dollars(rate), hours));
        }

        state.expenses.insert(
            "healthCare".to_string(),
            Expense::new("Healthcare", Money::from_dollars(1200)),
        );

        state
    }

    /// Hand out the next job id and advance the counter
    pub(crate) fn allocate_job_id(&mut self) -> JobId {
        let id = self.next_job_id;
        self.next_job_id = id.next();
        id
    }

    /// Look up a job by id
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Look up an expense by key
    pub fn expense(&self, key: &str) -> Option<&Expense> {
        self.expenses.get(key)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
