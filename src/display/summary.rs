//! Summary display formatting
//!
//! Formats the derived totals for plain terminal output (the non-TUI
//! `summary` subcommand).

use crate::services::IncomeSummary;

/// Format the income summary as an aligned two-column table
pub fn format_summary(summary: &IncomeSummary, symbol: &str) -> String {
    let rows = [
        ("Total hours/week", summary.total_weekly_hours.to_string()),
        ("Vacation (weeks)", summary.weeks_off.to_string()),
        ("Weekly income", summary.weekly_income.format_with_symbol(symbol)),
        ("Monthly income", summary.monthly_income.format_with_symbol(symbol)),
        ("Yearly income", summary.yearly_income.format_with_symbol(symbol)),
        ("Monthly expenses", summary.monthly_expenses.format_with_symbol(symbol)),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    let mut output = String::new();
    for (i, (label, value)) in rows.iter().enumerate() {
        if i == 2 {
            output.push_str(&"─".repeat(label_width + 2 + value_width));
            output.push('\n');
        }
        output.push_str(&format!(
            "{:<label_width$}  {:>value_width$}\n",
            label,
            value,
            label_width = label_width,
            value_width = value_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::TotalsService;
    use crate::state::CalculatorState;

    #[test]
    fn test_format_summary_sample() {
        let state = CalculatorState::sample();
        let summary = TotalsService::new(&state).summary();
        let output = format_summary(&summary, "$");

        assert!(output.contains("Total hours/week"));
        assert!(output.contains("20"));
        assert!(output.contains("$5108"));
        assert!(output.contains("$30432"));
        assert!(output.contains("$365184"));
        assert!(output.contains("$1200"));
    }

    #[test]
    fn test_amounts_right_aligned() {
        let state = CalculatorState::sample();
        let summary = TotalsService::new(&state).summary();
        let output = format_summary(&summary, "$");

        let widths: Vec<usize> = output
            .lines()
            .filter(|l| !l.starts_with('─'))
            .map(|l| l.len())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
