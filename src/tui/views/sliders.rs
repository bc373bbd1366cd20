//! Slider panel view
//!
//! Shows one labeled slider group per adjustable value: rate (and hours)
//! for each job, the weeks-off count, and the cost of each expense.
//! Passive income entries are listed without a slider.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::JobKind;
use crate::tui::app::{App, SliderRow};
use crate::tui::widgets::Slider;

/// Render the slider panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Income Calculatron ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let symbol = app.settings.currency_symbol.clone();
    let rows = app.slider_rows();
    let mut row_index = 0usize;
    let mut y = 0u16;

    let line_at = |frame: &mut Frame, y: u16, line: Line| {
        if y < inner.height {
            let rect = Rect::new(inner.x, inner.y + y, inner.width, 1);
            frame.render_widget(Paragraph::new(line), rect);
        }
    };

    // Job groups, in list order
    for job in app.state.jobs.clone() {
        match job.kind {
            JobKind::Salary => {
                line_at(frame, y, label_line(&job.label(&symbol)));
                y += 1;
                render_slider_row(frame, app, &rows, row_index, inner, y);
                row_index += 1;
                y += 1;
            }
            JobKind::Hourly => {
                line_at(frame, y, label_line(&job.label(&symbol)));
                y += 1;
                // Hours slider, then rate slider
                render_slider_row(frame, app, &rows, row_index, inner, y);
                row_index += 1;
                y += 1;
                render_slider_row(frame, app, &rows, row_index, inner, y);
                row_index += 1;
                y += 1;
            }
            JobKind::Passive => {
                line_at(
                    frame,
                    y,
                    Line::from(Span::styled(
                        format!("  {}", job.label(&symbol)),
                        Style::default().fg(Color::DarkGray),
                    )),
                );
                y += 1;
            }
        }
    }

    // Weeks off
    line_at(
        frame,
        y,
        label_line(&format!("Weeks Off ({})", app.state.weeks_off)),
    );
    y += 1;
    render_slider_row(frame, app, &rows, row_index, inner, y);
    row_index += 1;
    y += 1;

    // Expenses
    for (key, expense) in app.state.expenses.clone() {
        debug_assert_eq!(rows.get(row_index), Some(&SliderRow::ExpenseCost(key)));
        line_at(frame, y, label_line(&expense.label(&symbol)));
        y += 1;
        render_slider_row(frame, app, &rows, row_index, inner, y);
        row_index += 1;
        y += 1;
    }

    // Hint line
    line_at(
        frame,
        y + 1,
        Line::from(vec![
            Span::styled("[a]", Style::default().fg(Color::Green)),
            Span::raw(" Add job"),
        ]),
    );
}

fn label_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow),
    ))
}

/// Render one slider row at the given vertical offset
fn render_slider_row(
    frame: &mut Frame,
    app: &App,
    rows: &[SliderRow],
    row_index: usize,
    inner: Rect,
    y: u16,
) {
    if y >= inner.height {
        return;
    }
    let Some(row) = rows.get(row_index) else {
        return;
    };

    let limits = &app.settings.limits;
    let symbol = &app.settings.currency_symbol;

    let slider = match row {
        SliderRow::JobRate(id) => {
            let Some(job) = app.state.job(*id) else {
                return;
            };
            let range = limits.rate_range(job.kind);
            Slider::new(
                "💰",
                job.rate.dollars(),
                range.min,
                range.max,
                job.rate.format_with_symbol(symbol),
            )
        }
        SliderRow::JobHours(id) => {
            let Some(job) = app.state.job(*id) else {
                return;
            };
            let range = limits.weekly_hours;
            Slider::new(
                "⏰",
                job.hours_or_zero() as i64,
                range.min,
                range.max,
                format!("{} hrs", job.hours_or_zero()),
            )
        }
        SliderRow::WeeksOff => {
            let range = limits.weeks_off;
            Slider::new(
                "🌴",
                app.state.weeks_off as i64,
                range.min,
                range.max,
                format!("{} wks", app.state.weeks_off),
            )
        }
        SliderRow::ExpenseCost(key) => {
            let Some(expense) = app.state.expense(key) else {
                return;
            };
            let range = limits.expense_cost;
            Slider::new(
                "💸",
                expense.cost.dollars(),
                range.min,
                range.max,
                expense.cost.format_with_symbol(symbol),
            )
        }
    };

    let rect = Rect::new(inner.x, inner.y + y, inner.width, 1);
    frame.render_widget(slider.focused(row_index == app.selected_slider), rect);
}
