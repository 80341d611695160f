//! Tab/view router: the closed set of content panels

use serde::{Deserialize, Serialize};

/// Content panel below the module list.
///
/// Exactly one panel is rendered for the active tab; the others are
/// absent, not hidden, so their local state resets on reselection.
/// Every tab is reachable from every other tab directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Qubits self-test practice questions
    #[default]
    Qubits,

    /// Additional course resources (PDFs, videos, links, labs)
    Resources,

    /// Course description, prerequisites, certification info
    Info,

    /// Coursebook download and lab access
    Coursebook,

    /// Ask-your-trainer contact form
    Trainer,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Qubits,
        Tab::Resources,
        Tab::Info,
        Tab::Coursebook,
        Tab::Trainer,
    ];
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Qubits => write!(f, "qubits"),
            Tab::Resources => write!(f, "resources"),
            Tab::Info => write!(f, "info"),
            Tab::Coursebook => write!(f, "coursebook"),
            Tab::Trainer => write!(f, "trainer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_qubits() {
        assert_eq!(Tab::default(), Tab::Qubits);
    }

    #[test]
    fn test_all_contains_every_tab_once() {
        for tab in Tab::ALL {
            assert_eq!(Tab::ALL.iter().filter(|t| **t == tab).count(), 1);
        }
    }

    #[test]
    fn test_toml_wire_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            tab: Tab,
        }
        let w: Wrapper = toml::from_str("tab = \"coursebook\"").unwrap();
        assert_eq!(w.tab, Tab::Coursebook);
    }
}
