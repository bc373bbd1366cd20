//! Totals calculator
//!
//! Pure, side-effect-free reduction from a state snapshot to the displayed
//! numbers. Salary rates are annual, hourly rates are per hour; passive
//! income is tracked but excluded from every income formula. Rounding to
//! whole dollars happens at the weekly and monthly stages only; the yearly
//! total inherits the weekly rounding.

use serde::Serialize;

use crate::models::Money;
use crate::state::CalculatorState;

/// Derived aggregates, recomputed on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeSummary {
    pub total_weekly_hours: u32,
    pub weeks_off: u8,
    pub weekly_income: Money,
    pub monthly_income: Money,
    pub yearly_income: Money,
    pub monthly_expenses: Money,
}

/// Service computing derived totals from the current state
pub struct TotalsService<'a> {
    state: &'a CalculatorState,
}

impl<'a> TotalsService<'a> {
    /// Create a new totals service over a state snapshot
    pub fn new(state: &'a CalculatorState) -> Self {
        Self { state }
    }

    /// Sum over hourly jobs of rate × weekly hours (missing hours count as 0)
    pub fn weekly_hourly_income(&self) -> Money {
        self.state
            .jobs
            .iter()
            .filter(|j| j.is_hourly())
            .map(|j| j.rate * j.hours_or_zero())
            .sum()
    }

    /// Sum of annual salary rates
    pub fn annual_salary_total(&self) -> Money {
        self.state
            .jobs
            .iter()
            .filter(|j| j.is_salary())
            .map(|j| j.rate)
            .sum()
    }

    /// Weekly share of the salary total, in fractional dollars (unrounded)
    pub fn weekly_salary_income(&self) -> f64 {
        self.annual_salary_total().as_dollars_f64() / 52.0
    }

    /// Weekly income, rounded half-up to whole dollars
    pub fn weekly_total(&self) -> Money {
        Money::round_half_up(self.weekly_hourly_income().as_dollars_f64() + self.weekly_salary_income())
    }

    /// Monthly income: weekly × 4 plus a month of salary, rounded half-up
    pub fn monthly_total(&self) -> Money {
        let weekly = self.weekly_total().as_dollars_f64();
        let monthly_salary = self.annual_salary_total().as_dollars_f64() / 12.0;
        Money::round_half_up(weekly * 4.0 + monthly_salary)
    }

    /// Yearly income: weekly × paid weeks plus the salary total
    ///
    /// Not separately rounded; the weekly factor is already whole dollars.
    pub fn yearly_total(&self) -> Money {
        let paid_weeks = 52u32.saturating_sub(self.state.weeks_off as u32);
        self.weekly_total() * paid_weeks + self.annual_salary_total()
    }

    /// Sum of weekly hours over hourly jobs
    pub fn total_weekly_hours(&self) -> u32 {
        self.state
            .jobs
            .iter()
            .filter(|j| j.is_hourly())
            .map(|j| j.hours_or_zero())
            .sum()
    }

    /// Sum of cost over all expense entries
    pub fn monthly_expense_total(&self) -> Money {
        self.state.expenses.values().map(|e| e.cost).sum()
    }

    /// All derived aggregates in one bundle
    pub fn summary(&self) -> IncomeSummary {
        IncomeSummary {
            total_weekly_hours: self.total_weekly_hours(),
            weeks_off: self.state.weeks_off,
            weekly_income: self.weekly_total(),
            monthly_income: self.monthly_total(),
            yearly_income: self.yearly_total(),
            monthly_expenses: self.monthly_expense_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Job, JobId, JobKind};

    fn job(id: u64, kind: JobKind, rate: i64, hours: Option<u32>) -> Job {
        Job::new(JobId::from_raw(id), kind, Money::from_dollars(rate), hours)
    }

    fn state_with(jobs: Vec<Job>, weeks_off: u8) -> CalculatorState {
        let mut state = CalculatorState::new();
        state.jobs = jobs;
        state.weeks_off = weeks_off;
        state
    }

    #[test]
    fn test_reference_vector() {
        // jobs = [hourly 140×20, salary 120000, passive 300], 4 weeks off
        let state = CalculatorState::sample();
        let totals = TotalsService::new(&state);

        assert_eq!(totals.weekly_total(), Money::from_dollars(5108));
        assert_eq!(totals.monthly_total(), Money::from_dollars(30432));
        assert_eq!(totals.yearly_total(), Money::from_dollars(365_184));
        assert_eq!(totals.total_weekly_hours(), 20);
        assert_eq!(totals.monthly_expense_total(), Money::from_dollars(1200));
    }

    #[test]
    fn test_passive_income_excluded() {
        let with_passive = state_with(
            vec![
                job(1, JobKind::Hourly, 100, Some(10)),
                job(2, JobKind::Passive, 5000, None),
            ],
            0,
        );
        let without = state_with(vec![job(1, JobKind::Hourly, 100, Some(10))], 0);

        let a = TotalsService::new(&with_passive);
        let b = TotalsService::new(&without);
        assert_eq!(a.weekly_total(), b.weekly_total());
        assert_eq!(a.monthly_total(), b.monthly_total());
        assert_eq!(a.yearly_total(), b.yearly_total());
    }

    #[test]
    fn test_missing_hours_treated_as_zero() {
        let state = state_with(
            vec![
                job(1, JobKind::Hourly, 100, None),
                job(2, JobKind::Hourly, 50, Some(8)),
            ],
            0,
        );
        let totals = TotalsService::new(&state);

        assert_eq!(totals.total_weekly_hours(), 8);
        assert_eq!(totals.weekly_total(), Money::from_dollars(400));
    }

    #[test]
    fn test_weekly_rounding_half_up() {
        // 120000 / 52 = 2307.6923 → 2308 on its own
        let state = state_with(vec![job(1, JobKind::Salary, 120_000, None)], 0);
        let totals = TotalsService::new(&state);
        assert_eq!(totals.weekly_total(), Money::from_dollars(2308));
    }

    #[test]
    fn test_yearly_not_separately_rounded() {
        // weekly = round(100000/52) = round(1923.0769) = 1923
        // yearly(0 weeks off) = 1923 × 52 + 100000 = 199996
        let state = state_with(vec![job(1, JobKind::Salary, 100_000, None)], 0);
        let totals = TotalsService::new(&state);
        assert_eq!(totals.weekly_total(), Money::from_dollars(1923));
        assert_eq!(totals.yearly_total(), Money::from_dollars(199_996));
    }

    #[test]
    fn test_weeks_off_reduces_yearly_only() {
        let base = state_with(vec![job(1, JobKind::Hourly, 100, Some(10))], 0);
        let vacationing = state_with(vec![job(1, JobKind::Hourly, 100, Some(10))], 4);

        let a = TotalsService::new(&base);
        let b = TotalsService::new(&vacationing);

        assert_eq!(a.weekly_total(), b.weekly_total());
        assert_eq!(a.monthly_total(), b.monthly_total());
        assert_eq!(a.yearly_total(), Money::from_dollars(52_000));
        assert_eq!(b.yearly_total(), Money::from_dollars(48_000));
    }

    #[test]
    fn test_negative_rate_propagates() {
        // Clamping is the reducer's job; the calculator passes values through
        let state = state_with(vec![job(1, JobKind::Hourly, -10, Some(10))], 0);
        let totals = TotalsService::new(&state);
        assert_eq!(totals.weekly_total(), Money::from_dollars(-100));
    }

    #[test]
    fn test_expense_total_sums_all_entries() {
        let mut state = CalculatorState::new();
        state
            .expenses
            .insert("a".into(), Expense::new("A", Money::from_dollars(1200)));
        state
            .expenses
            .insert("b".into(), Expense::new("B", Money::from_cents(55)));

        let totals = TotalsService::new(&state);
        assert_eq!(totals.monthly_expense_total(), Money::from_cents(120_055));
    }

    #[test]
    fn test_empty_state_is_all_zero() {
        let state = CalculatorState::new();
        let totals = TotalsService::new(&state);
        let summary = totals.summary();

        assert_eq!(summary.total_weekly_hours, 0);
        assert!(summary.weekly_income.is_zero());
        assert!(summary.monthly_income.is_zero());
        assert!(summary.yearly_income.is_zero());
        assert!(summary.monthly_expenses.is_zero());
    }

    #[test]
    fn test_summary_matches_parts() {
        let state = CalculatorState::sample();
        let totals = TotalsService::new(&state);
        let summary = totals.summary();

        assert_eq!(summary.weekly_income, totals.weekly_total());
        assert_eq!(summary.monthly_income, totals.monthly_total());
        assert_eq!(summary.yearly_income, totals.yearly_total());
        assert_eq!(summary.weeks_off, 4);
    }
}
