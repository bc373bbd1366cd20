//! Reusable TUI widgets

pub mod slider;

pub use slider::Slider;
