//! Terminal user interface
//!
//! Interactive slider-based view of the income calculator, built on
//! ratatui and crossterm.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod keybindings;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
