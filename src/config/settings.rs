//! User settings for Calculatron
//!
//! Manages user preferences: currency symbol, the default vacation weeks,
//! and the slider limits that bound every adjustable value. Limits drive
//! both the TUI sliders and the clamping applied by the state reducer.

use serde::{Deserialize, Serialize};

use super::paths::CalcPaths;
use crate::error::CalcError;

/// Inclusive whole-dollar (or whole-unit) range with a step size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl SliderRange {
    pub const fn new(min: i64, max: i64, step: i64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into this range
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// Bounds for every adjustable value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Annual salary rate
    #[serde(default = "default_salary_rate")]
    pub salary_rate: SliderRange,
    /// Per-hour rate
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: SliderRange,
    /// Hours worked per week
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: SliderRange,
    /// Vacation weeks per year
    #[serde(default = "default_weeks_off")]
    pub weeks_off: SliderRange,
    /// Monthly expense cost
    #[serde(default = "default_expense_cost")]
    pub expense_cost: SliderRange,
    /// Flat passive income rate
    #[serde(default = "default_passive_rate")]
    pub passive_rate: SliderRange,
}

fn default_salary_rate() -> SliderRange {
    SliderRange::new(0, 500_000, 10)
}

fn default_hourly_rate() -> SliderRange {
    SliderRange::new(0, 300, 1)
}

fn default_weekly_hours() -> SliderRange {
    SliderRange::new(0, 120, 1)
}

fn default_weeks_off() -> SliderRange {
    SliderRange::new(0, 52, 1)
}

fn default_expense_cost() -> SliderRange {
    SliderRange::new(0, 10_000, 10)
}

fn default_passive_rate() -> SliderRange {
    SliderRange::new(0, 10_000, 10)
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            salary_rate: default_salary_rate(),
            hourly_rate: default_hourly_rate(),
            weekly_hours: default_weekly_hours(),
            weeks_off: default_weeks_off(),
            expense_cost: default_expense_cost(),
            passive_rate: default_passive_rate(),
        }
    }
}

impl Limits {
    /// The rate range that applies to a given job kind
    pub fn rate_range(&self, kind: crate::models::JobKind) -> SliderRange {
        match kind {
            crate::models::JobKind::Hourly => self.hourly_rate,
            crate::models::JobKind::Salary => self.salary_rate,
            crate::models::JobKind::Passive => self.passive_rate,
        }
    }
}

/// User settings for Calculatron
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in all formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Vacation weeks applied to a fresh session
    #[serde(default = "default_weeks_off_count")]
    pub default_weeks_off: u8,

    /// Slider bounds
    #[serde(default)]
    pub limits: Limits,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_weeks_off_count() -> u8 {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_weeks_off: default_weeks_off_count(),
            limits: Limits::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CalcPaths) -> Result<Self, CalcError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CalcError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| CalcError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CalcPaths) -> Result<(), CalcError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CalcError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CalcError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
