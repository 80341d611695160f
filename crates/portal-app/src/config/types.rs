//! Configuration types for the learner portal
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings` - Dashboard layout defaults

use serde::{Deserialize, Serialize};

use crate::tabs::Tab;

/// Application settings (`.lportal/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// Dashboard UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Tab shown when the dashboard opens
    #[serde(default)]
    pub default_tab: Tab,

    /// Initial size of the module list window
    #[serde(default = "default_visible_modules")]
    pub initial_visible_modules: usize,

    /// How many modules each "show more" reveals
    #[serde(default = "default_show_more_increment")]
    pub show_more_increment: usize,

    /// Module ids expanded on first render
    #[serde(default = "default_initial_expanded")]
    pub initial_expanded: Vec<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_tab: Tab::default(),
            initial_visible_modules: default_visible_modules(),
            show_more_increment: default_show_more_increment(),
            initial_expanded: default_initial_expanded(),
        }
    }
}

fn default_visible_modules() -> usize {
    11
}

fn default_show_more_increment() -> usize {
    5
}

fn default_initial_expanded() -> Vec<String> {
    vec!["module-1".to_string()]
}
