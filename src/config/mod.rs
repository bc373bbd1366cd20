//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::CalcPaths;
pub use settings::{Limits, Settings, SliderRange};
