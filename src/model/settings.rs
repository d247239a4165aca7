use serde::{Deserialize, Serialize};

/// The program's own settings, from `settings.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Default: "next"
    #[serde(default = "default_report")]
    pub report: String,
    /// Columns used when the chosen report is not defined in the config dump
    #[serde(default = "default_fallback_columns")]
    pub fallback_columns: Vec<String>,
    #[serde(default)]
    pub ui: UiSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            report: default_report(),
            fallback_columns: default_fallback_columns(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Style rows with the resolved `color.*` rules. Default: true
    #[serde(default = "default_true")]
    pub color: bool,
    /// Widest a description cell may get in plain output. Default: 60
    #[serde(default = "default_description_width")]
    pub description_width: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            color: true,
            description_width: default_description_width(),
        }
    }
}

fn default_report() -> String {
    "next".to_string()
}

fn default_fallback_columns() -> Vec<String> {
    ["id", "project", "tags", "due.relative", "description", "urgency"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_true() -> bool {
    true
}

fn default_description_width() -> usize {
    60
}
