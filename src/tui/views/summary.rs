//! Summary panel view
//!
//! Shows the derived totals as a stack of cards: total weekly hours,
//! vacation weeks, weekly/monthly/yearly income, and monthly expenses.
//! Everything here is recomputed from the state on every frame.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::TotalsService;
use crate::tui::app::App;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = TotalsService::new(&app.state).summary();
    let symbol = &app.settings.currency_symbol;

    let cards: [(&str, String, Color); 6] = [
        (
            "⏰ Total hours/week",
            summary.total_weekly_hours.to_string(),
            Color::White,
        ),
        (
            "🌴 Vacation (weeks)",
            summary.weeks_off.to_string(),
            Color::White,
        ),
        (
            "Weekly income",
            summary.weekly_income.format_with_symbol(symbol),
            Color::Green,
        ),
        (
            "Monthly income",
            summary.monthly_income.format_with_symbol(symbol),
            Color::Green,
        ),
        (
            "Yearly income",
            summary.yearly_income.format_with_symbol(symbol),
            Color::Green,
        ),
        (
            "Monthly expenses",
            summary.monthly_expenses.format_with_symbol(symbol),
            Color::Red,
        ),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (i, (title, value, color)) in cards.into_iter().enumerate() {
        render_card(frame, chunks[i], title, &value, color);
    }
}

/// Render a single bordered card with a centered value
fn render_card(frame: &mut Frame, area: Rect, title: &str, value: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(paragraph, area);
}
