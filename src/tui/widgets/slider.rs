//! Slider widget
//!
//! A horizontal slider showing a label, a fill bar proportional to
//! value/max, and the current value.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A read-only horizontal slider
#[derive(Debug, Clone)]
pub struct Slider {
    /// Icon or marker shown before the bar
    pub icon: &'static str,
    /// Current value, clamped into [min, max] for display
    pub value: i64,
    /// Lower bound of the range
    pub min: i64,
    /// Upper bound of the range
    pub max: i64,
    /// Text shown after the bar (formatted value)
    pub value_text: String,
    /// Whether this slider row is selected
    pub focused: bool,
}

impl Slider {
    pub fn new(icon: &'static str, value: i64, min: i64, max: i64, value_text: String) -> Self {
        Self {
            icon,
            value,
            min,
            max,
            value_text,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Fill ratio in [0, 1]
    fn ratio(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        let clamped = self.value.clamp(self.min, self.max);
        (clamped - self.min) as f64 / (self.max - self.min) as f64
    }
}

impl Widget for Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let (bar_color, text_color) = if self.focused {
            (Color::Cyan, Color::White)
        } else {
            (Color::DarkGray, Color::Gray)
        };

        let marker = if self.focused { "▶ " } else { "  " };
        let prefix = format!("{}{} ", marker, self.icon);
        buf.set_string(
            area.x,
            area.y,
            &prefix,
            Style::default().fg(text_color),
        );

        let value_width = self.value_text.len() as u16 + 1;
        let prefix_width = prefix.chars().count() as u16;
        let bar_width = area
            .width
            .saturating_sub(prefix_width)
            .saturating_sub(value_width);

        if bar_width > 0 {
            let filled = (self.ratio() * bar_width as f64).round() as u16;
            let filled = filled.min(bar_width);

            let bar: String = "█".repeat(filled as usize) + &"░".repeat((bar_width - filled) as usize);
            buf.set_string(
                area.x + prefix_width,
                area.y,
                &bar,
                Style::default().fg(bar_color),
            );
        }

        buf.set_string(
            area.x + prefix_width + bar_width + 1,
            area.y,
            &self.value_text,
            Style::default().fg(text_color),
        );
    }
}
