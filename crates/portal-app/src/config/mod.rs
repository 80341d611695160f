//! Configuration file parsing for the learner portal
//!
//! Supports:
//! - `.lportal/config.toml` - Dashboard layout defaults

pub mod settings;
pub mod types;

pub use settings::{load_settings, save_settings};
pub use types::*;
