//! Application state for the TUI
//!
//! The App struct holds the session model plus everything needed for
//! rendering and handling events.

use crate::config::Settings;
use crate::models::JobId;
use crate::state::{apply, Action, CalculatorState};

use super::dialogs::add_job::AddJobFormState;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddJob,
    Help,
}

/// One adjustable row in the slider panel
///
/// Rows are derived from the state on every frame: a rate slider per
/// salaried job, an hours slider and a rate slider per hourly job, the
/// weeks-off slider, and a cost slider per expense. Passive jobs are
/// displayed but have no slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderRow {
    JobRate(JobId),
    JobHours(JobId),
    WeeksOff,
    ExpenseCost(String),
}

/// Main application state
pub struct App<'a> {
    /// The session model
    pub state: CalculatorState,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Index of the selected slider row
    pub selected_slider: usize,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-job dialog state
    pub add_job_form: AddJobFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(state: CalculatorState, settings: &'a Settings) -> Self {
        Self {
            state,
            settings,
            should_quit: false,
            selected_slider: 0,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
            add_job_form: AddJobFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddJob {
            self.add_job_form = AddJobFormState::new();
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The slider rows for the current state, in display order
    pub fn slider_rows(&self) -> Vec<SliderRow> {
        let mut rows = Vec::new();

        for job in &self.state.jobs {
            if job.is_salary() {
                rows.push(SliderRow::JobRate(job.id));
            } else if job.is_hourly() {
                rows.push(SliderRow::JobHours(job.id));
                rows.push(SliderRow::JobRate(job.id));
            }
            // Passive jobs have no slider
        }

        rows.push(SliderRow::WeeksOff);

        for key in self.state.expenses.keys() {
            rows.push(SliderRow::ExpenseCost(key.clone()));
        }

        rows
    }

    /// Move slider selection up
    pub fn move_up(&mut self) {
        if self.selected_slider > 0 {
            self.selected_slider -= 1;
        }
    }

    /// Move slider selection down
    pub fn move_down(&mut self) {
        let max = self.slider_rows().len();
        if self.selected_slider < max.saturating_sub(1) {
            self.selected_slider += 1;
        }
    }

    /// Jump to the first slider row
    pub fn select_first(&mut self) {
        self.selected_slider = 0;
    }

    /// Jump to the last slider row
    pub fn select_last(&mut self) {
        self.selected_slider = self.slider_rows().len().saturating_sub(1);
    }

    /// Apply an action to the session model through the reducer
    ///
    /// Errors become a status message rather than aborting the UI.
    pub fn dispatch(&mut self, action: Action) {
        match apply(&self.state, action, &self.settings.limits) {
            Ok(next) => self.state = next,
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Step the selected slider by a number of steps (negative = down)
    pub fn step_slider(&mut self, steps: i64) {
        let rows = self.slider_rows();
        let Some(row) = rows.get(self.selected_slider) else {
            return;
        };

        let limits = &self.settings.limits;
        let action = match row {
            SliderRow::JobRate(id) => {
                let Some(job) = self.state.job(*id) else {
                    return;
                };
                let step = limits.rate_range(job.kind).step;
                let dollars = job.rate.dollars() + steps * step;
                Action::UpdateJobRate {
                    id: *id,
                    rate: crate::models::Money::from_dollars(dollars),
                }
            }
            SliderRow::JobHours(id) => {
                let Some(job) = self.state.job(*id) else {
                    return;
                };
                let hours = job.hours_or_zero() as i64 + steps * limits.weekly_hours.step;
                Action::UpdateJobHours {
                    id: *id,
                    hours: hours.max(0) as u32,
                }
            }
            SliderRow::WeeksOff => {
                let weeks = self.state.weeks_off as i64 + steps * limits.weeks_off.step;
                Action::SetWeeksOff(weeks.clamp(0, 52) as u8)
            }
            SliderRow::ExpenseCost(key) => {
                let Some(expense) = self.state.expense(key) else {
                    return;
                };
                let dollars = expense.cost.dollars() + steps * limits.expense_cost.step;
                Action::UpdateExpenseCost {
                    key: key.clone(),
                    cost: crate::models::Money::from_dollars(dollars),
                }
            }
        };

        self.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_slider_rows_for_sample() {
        let settings = settings();
        let app = App::new(CalculatorState::sample(), &settings);
        let rows = app.slider_rows();

        // hourly job: hours + rate, salary job: rate, passive: none,
        // then weeks off and one expense
        assert_eq!(rows.len(), 5);
        assert!(matches!(rows[0], SliderRow::JobHours(_)));
        assert!(matches!(rows[1], SliderRow::JobRate(_)));
        assert!(matches!(rows[2], SliderRow::JobRate(_)));
        assert_eq!(rows[3], SliderRow::WeeksOff);
        assert_eq!(rows[4], SliderRow::ExpenseCost("healthCare".to_string()));
    }

    #[test]
    fn test_step_hourly_rate() {
        let settings = settings();
        let mut app = App::new(CalculatorState::sample(), &settings);
        app.selected_slider = 1; // hourly rate

        app.step_slider(5);
        assert_eq!(app.state.jobs[0].rate, Money::from_dollars(145));

        app.step_slider(-10);
        assert_eq!(app.state.jobs[0].rate, Money::from_dollars(135));
    }

    #[test]
    fn test_step_salary_rate_uses_larger_step() {
        let settings = settings();
        let mut app = App::new(CalculatorState::sample(), &settings);
        app.selected_slider = 2; // salary rate, step 10

        app.step_slider(1);
        assert_eq!(app.state.jobs[1].rate, Money::from_dollars(120_010));
    }

    #[test]
    fn test_step_clamps_at_bounds() {
        let settings = settings();
        let mut app = App::new(CalculatorState::sample(), &settings);
        app.selected_slider = 3; // weeks off

        app.step_slider(100);
        assert_eq!(app.state.weeks_off, 52);

        app.step_slider(-100);
        assert_eq!(app.state.weeks_off, 0);
    }

    #[test]
    fn test_step_expense_cost() {
        let settings = settings();
        let mut app = App::new(CalculatorState::sample(), &settings);
        app.selected_slider = 4;

        app.step_slider(-2); // step 10 → -20
        assert_eq!(
            app.state.expense("healthCare").unwrap().cost,
            Money::from_dollars(1180)
        );
    }

    #[test]
    fn test_selection_bounds() {
        let settings = settings();
        let mut app = App::new(CalculatorState::sample(), &settings);

        app.move_up();
        assert_eq!(app.selected_slider, 0);

        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_slider, app.slider_rows().len() - 1);
    }
}
