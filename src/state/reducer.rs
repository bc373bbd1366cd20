//! Pure state transitions
//!
//! Every mutation of the session model is an [`Action`] applied to a state
//! snapshot, producing a new state. Numeric values are clamped to the
//! configured slider limits here, at the mutation boundary; the totals
//! calculator itself never clamps.

use crate::config::Limits;
use crate::error::{CalcError, CalcResult};
use crate::models::{Job, JobKind, Money};

use super::CalculatorState;

/// A single user-driven mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new job with a freshly assigned id
    AddJob {
        kind: JobKind,
        rate: Money,
        weekly_hours: Option<u32>,
    },
    /// Replace the rate of one job, leaving everything else untouched
    UpdateJobRate { id: crate::models::JobId, rate: Money },
    /// Replace the weekly hours of one job
    UpdateJobHours { id: crate::models::JobId, hours: u32 },
    /// Set the vacation-weeks count
    SetWeeksOff(u8),
    /// Replace the cost of one expense
    UpdateExpenseCost { key: String, cost: Money },
}

/// Apply an action to a state snapshot, producing the next state
///
/// Unknown job ids and expense keys are structured NotFound errors. The
/// input state is never modified.
pub fn apply(state: &CalculatorState, action: Action, limits: &Limits) -> CalcResult<CalculatorState> {
    let mut next = state.clone();

    match action {
        Action::AddJob {
            kind,
            rate,
            weekly_hours,
        } => {
            let range = limits.rate_range(kind);
            let rate = rate.clamp_dollars(range.min, range.max);
            let hours = weekly_hours.map(|h| limits.weekly_hours.clamp(h as i64) as u32);
            let id = next.allocate_job_id();
            next.jobs.push(Job::new(id, kind, rate, hours));
        }

        Action::UpdateJobRate { id, rate } => {
            let job = next
                .jobs
                .iter_mut()
                .find(|j| j.id == id)
                .ok_or_else(|| CalcError::job_not_found(id.to_string()))?;
            let range = limits.rate_range(job.kind);
            job.rate = rate.clamp_dollars(range.min, range.max);
        }

        Action::UpdateJobHours { id, hours } => {
            let job = next
                .jobs
                .iter_mut()
                .find(|j| j.id == id)
                .ok_or_else(|| CalcError::job_not_found(id.to_string()))?;
            job.weekly_hours = Some(limits.weekly_hours.clamp(hours as i64) as u32);
        }

        Action::SetWeeksOff(weeks) => {
            next.weeks_off = limits.weeks_off.clamp(weeks as i64) as u8;
        }

        Action::UpdateExpenseCost { key, cost } => {
            let expense = next
                .expenses
                .get_mut(&key)
                .ok_or_else(|| CalcError::expense_not_found(key.clone()))?;
            let range = limits.expense_cost;
            expense.cost = cost.clamp_dollars(range.min, range.max);
        }
    }

    Ok(next)
}
