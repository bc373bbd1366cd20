//! Job model
//!
//! A job is an income source. Hourly jobs bill a per-hour rate for a weekly
//! hour count, salaried jobs carry a fixed annual rate, and passive income
//! is a flat recurring amount that is tracked but excluded from the
//! weekly/monthly/yearly formulas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::JobId;
use super::money::Money;

/// The kind of an income source
///
/// The unit of `rate` depends on the kind: per hour for hourly jobs,
/// per year for salaried jobs, flat recurring for passive income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    #[default]
    Hourly,
    Salary,
    Passive,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hourly => write!(f, "hourly"),
            Self::Salary => write!(f, "salary"),
            Self::Passive => write!(f, "passive"),
        }
    }
}

impl FromStr for JobKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "salary" | "salaried" => Ok(Self::Salary),
            "passive" => Ok(Self::Passive),
            other => Err(format!("Unknown job kind: {}", other)),
        }
    }
}

/// An income source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub kind: JobKind,
    /// Per-hour for hourly, annual for salary, flat for passive
    pub rate: Money,
    /// Only meaningful for hourly jobs; absence is treated as zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_hours: Option<u32>,
}

impl Job {
    /// Create a new job
    pub fn new(id: JobId, kind: JobKind, rate: Money, weekly_hours: Option<u32>) -> Self {
        Self {
            id,
            kind,
            rate,
            weekly_hours,
        }
    }

    pub fn is_hourly(&self) -> bool {
        self.kind == JobKind::Hourly
    }

    pub fn is_salary(&self) -> bool {
        self.kind == JobKind::Salary
    }

    pub fn is_passive(&self) -> bool {
        self.kind == JobKind::Passive
    }

    /// Weekly hours with the missing-is-zero default applied
    pub fn hours_or_zero(&self) -> u32 {
        self.weekly_hours.unwrap_or(0)
    }

    /// Short label for list display, e.g. "Hourly job (20 hours/wk @ $140/hr)"
    pub fn label(&self, symbol: &str) -> String {
        match self.kind {
            JobKind::Hourly => format!(
                "Hourly job ({} hours/wk @ {}/hr)",
                self.hours_or_zero(),
                self.rate.format_with_symbol(symbol)
            ),
            JobKind::Salary => format!("Salary job ({}/yr)", self.rate.format_with_symbol(symbol)),
            JobKind::Passive => format!("Passive income ({})", self.rate.format_with_symbol(symbol)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(id: u64, rate: i64, hours: u32) -> Job {
        Job::new(
            JobId::from_raw(id),
            JobKind::Hourly,
            Money::from_dollars(rate),
            Some(hours),
        )
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [JobKind::Hourly, JobKind::Salary, JobKind::Passive] {
            let parsed: JobKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert_eq!("salaried".parse::<JobKind>().unwrap(), JobKind::Salary);
        assert!("freelance".parse::<JobKind>().is_err());
    }

    #[test]
    fn test_hours_default_to_zero() {
        let job = Job::new(
            JobId::first(),
            JobKind::Hourly,
            Money::from_dollars(50),
            None,
        );
        assert_eq!(job.hours_or_zero(), 0);
    }

    #[test]
    fn test_labels() {
        let job = hourly(1, 140, 20);
        assert_eq!(job.label("$"), "Hourly job (20 hours/wk @ $140/hr)");

        let salary = Job::new(
            JobId::from_raw(2),
            JobKind::Salary,
            Money::from_dollars(120000),
            None,
        );
        assert_eq!(salary.label("$"), "Salary job ($120000/yr)");
    }

    #[test]
    fn test_serialization_kind_lowercase() {
        let job = hourly(1, 140, 20);
        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"kind\":\"hourly\""));
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(job, back);
    }

    #[test]
    fn test_missing_hours_not_serialized() {
        let salary = Job::new(
            JobId::from_raw(2),
            JobKind::Salary,
            Money::from_dollars(120000),
            None,
        );
        let json = serde_json::to_string(&salary).unwrap();
        assert!(!json.contains("weekly_hours"));
    }
}
