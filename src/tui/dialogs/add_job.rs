//! Add-job dialog
//!
//! A form for appending a new income source: a kind selector plus rate and
//! weekly-hours inputs. Input is parsed explicitly on submit; parse errors
//! are shown inline and nothing is applied until they are fixed.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{JobKind, Money};
use crate::state::Action;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Which field is focused in the add-job dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddJobField {
    #[default]
    Kind,
    Rate,
    Hours,
}

impl AddJobField {
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Rate,
            Self::Rate => Self::Hours,
            Self::Hours => Self::Kind,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Hours,
            Self::Rate => Self::Kind,
            Self::Hours => Self::Rate,
        }
    }
}

/// State for the add-job dialog
#[derive(Debug, Clone, Default)]
pub struct AddJobFormState {
    /// Selected job kind (the form offers hourly and salary)
    pub kind: JobKind,
    /// Which field is focused
    pub focused_field: AddJobField,
    /// Rate input
    pub rate_input: String,
    /// Rate cursor position
    pub rate_cursor: usize,
    /// Weekly hours input
    pub hours_input: String,
    /// Hours cursor position
    pub hours_cursor: usize,
    /// Error message
    pub error_message: Option<String>,
}

impl AddJobFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle between the offered kinds
    pub fn cycle_kind(&mut self) {
        self.kind = match self.kind {
            JobKind::Hourly => JobKind::Salary,
            JobKind::Salary => JobKind::Hourly,
            JobKind::Passive => JobKind::Hourly,
        };
        self.error_message = None;
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Insert character into the focused text field
    pub fn insert_char(&mut self, c: char) {
        match self.focused_field {
            AddJobField::Kind => {}
            AddJobField::Rate => {
                if c.is_ascii_digit() || c == '.' {
                    self.rate_input.insert(self.rate_cursor, c);
                    self.rate_cursor += 1;
                    self.error_message = None;
                }
            }
            AddJobField::Hours => {
                if c.is_ascii_digit() {
                    self.hours_input.insert(self.hours_cursor, c);
                    self.hours_cursor += 1;
                    self.error_message = None;
                }
            }
        }
    }

    /// Delete character before cursor in the focused text field
    pub fn backspace(&mut self) {
        match self.focused_field {
            AddJobField::Kind => {}
            AddJobField::Rate => {
                if self.rate_cursor > 0 {
                    self.rate_cursor -= 1;
                    self.rate_input.remove(self.rate_cursor);
                    self.error_message = None;
                }
            }
            AddJobField::Hours => {
                if self.hours_cursor > 0 {
                    self.hours_cursor -= 1;
                    self.hours_input.remove(self.hours_cursor);
                    self.error_message = None;
                }
            }
        }
    }

    /// Parse the form into an AddJob action
    pub fn parse_action(&self) -> Result<Action, String> {
        let rate = Money::parse(&self.rate_input).map_err(|e| e.to_string())?;

        let weekly_hours = if self.hours_input.trim().is_empty() {
            None
        } else {
            Some(
                self.hours_input
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid hours: {}", self.hours_input))?,
            )
        };

        Ok(Action::AddJob {
            kind: self.kind,
            rate,
            weekly_hours,
        })
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add-job dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.add_job_form;

    let area = centered_rect_fixed(46, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Job ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Kind label
            Constraint::Length(1), // Kind selector
            Constraint::Length(1), // Rate label
            Constraint::Length(1), // Rate input
            Constraint::Length(1), // Hours label
            Constraint::Length(1), // Hours input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(field_label("Job Type", state.focused_field == AddJobField::Kind)),
        chunks[0],
    );
    let kind_line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.kind.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(kind_line), chunks[1]);

    frame.render_widget(
        Paragraph::new(field_label(
            "Hourly Rate / Salary",
            state.focused_field == AddJobField::Rate,
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(input_line(
            &app.settings.currency_symbol,
            &state.rate_input,
            state.rate_cursor,
            state.focused_field == AddJobField::Rate,
        )),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(field_label(
            "Weekly Hours",
            state.focused_field == AddJobField::Hours,
        )),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(input_line(
            "",
            &state.hours_input,
            state.hours_cursor,
            state.focused_field == AddJobField::Hours,
        )),
        chunks[5],
    );

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            chunks[7],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Fields"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[8]);
}

fn field_label(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(text.to_string(), style)
}

fn input_line(prefix: &str, value: &str, cursor: usize, focused: bool) -> Line<'static> {
    let mut spans = vec![];

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    if focused {
        let cursor_pos = cursor.min(value.len());
        let (before, after) = value.split_at(cursor_pos);

        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(Color::White),
        ));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        if after.len() > 1 {
            spans.push(Span::styled(
                after[1..].to_string(),
                Style::default().fg(Color::White),
            ));
        }
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}

/// Handle key events for the add-job dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab | KeyCode::Down => {
            app.add_job_form.next_field();
            true
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.add_job_form.prev_field();
            true
        }

        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if app.add_job_form.focused_field == AddJobField::Kind =>
        {
            app.add_job_form.cycle_kind();
            true
        }

        KeyCode::Enter => {
            match app.add_job_form.parse_action() {
                Ok(action) => {
                    let kind = app.add_job_form.kind;
                    app.dispatch(action);
                    app.close_dialog();
                    app.set_status(format!("Added {} job", kind));
                }
                Err(e) => app.add_job_form.set_error(e),
            }
            true
        }

        KeyCode::Char(c) => {
            app.add_job_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.add_job_form.backspace();
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hourly_action() {
        let mut form = AddJobFormState::new();
        form.rate_input = "50".to_string();
        form.hours_input = "10".to_string();

        let action = form.parse_action().unwrap();
        assert_eq!(
            action,
            Action::AddJob {
                kind: JobKind::Hourly,
                rate: Money::from_dollars(50),
                weekly_hours: Some(10),
            }
        );
    }

    #[test]
    fn test_parse_salary_without_hours() {
        let mut form = AddJobFormState::new();
        form.cycle_kind();
        form.rate_input = "90000".to_string();

        let action = form.parse_action().unwrap();
        assert_eq!(
            action,
            Action::AddJob {
                kind: JobKind::Salary,
                rate: Money::from_dollars(90000),
                weekly_hours: None,
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let form = AddJobFormState::new();
        assert!(form.parse_action().is_err()); // empty rate

        let mut form = AddJobFormState::new();
        form.rate_input = "50".to_string();
        form.hours_input = "lots".to_string();
        assert!(form.parse_action().is_err());
    }

    #[test]
    fn test_insert_filters_non_numeric() {
        let mut form = AddJobFormState::new();
        form.focused_field = AddJobField::Rate;
        for c in "1a2.b5".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.rate_input, "12.5");
    }

    #[test]
    fn test_cycle_kind_toggles() {
        let mut form = AddJobFormState::new();
        assert_eq!(form.kind, JobKind::Hourly);
        form.cycle_kind();
        assert_eq!(form.kind, JobKind::Salary);
        form.cycle_kind();
        assert_eq!(form.kind, JobKind::Hourly);
    }
}
