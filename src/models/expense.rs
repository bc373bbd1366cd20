//! Expense model
//!
//! A recurring monthly cost entry, independent of income sources. Expenses
//! live in a keyed map; the key is a short identifier (e.g. "healthCare")
//! and the entry carries the display name.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A recurring monthly cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Display name, e.g. "Healthcare"
    pub name: String,
    /// Monthly cost
    pub cost: Money,
    /// Recurrence interval in months; carried but not used in computation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

impl Expense {
    /// Create a new monthly expense
    pub fn new(name: impl Into<String>, cost: Money) -> Self {
        Self {
            name: name.into(),
            cost,
            interval: None,
        }
    }

    /// Short label for list display, e.g. "Healthcare ($1200/mo)"
    pub fn label(&self, symbol: &str) -> String {
        format!("{} ({}/mo)", self.name, self.cost.format_with_symbol(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let expense = Expense::new("Healthcare", Money::from_dollars(1200));
        assert_eq!(expense.label("$"), "Healthcare ($1200/mo)");
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new("Healthcare", Money::from_dollars(1200));
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("interval"));
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, back);
    }
}
