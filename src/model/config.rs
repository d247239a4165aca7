use indexmap::IndexMap;
use serde::Serialize;

use super::style::StyleRule;

/// Threshold the task tool uses when no `due` line is present
pub const DEFAULT_DUE_DAYS: i64 = 7;

/// Everything the engine reads from one config dump.
///
/// Built by [`crate::parse::parse_config`]; rebuilt from scratch on every
/// refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// `color.<key>` rules, keyed by `<key>` in order of first appearance
    pub colors: IndexMap<String, StyleRule>,
    /// `rule.precedence.color`, highest precedence first
    pub precedence: Vec<String>,
    /// `due`: how many days ahead a due date counts as "due"
    pub due_days: i64,
    /// `report.<name>.*` definitions
    pub reports: IndexMap<String, ReportSpec>,
    /// `context.<name>` definitions
    pub context_filters: IndexMap<String, ContextFilter>,
    /// `context`: name of the active context, if any
    pub active_context: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            colors: IndexMap::new(),
            precedence: Vec::new(),
            due_days: DEFAULT_DUE_DAYS,
            reports: IndexMap::new(),
            context_filters: IndexMap::new(),
            active_context: None,
        }
    }
}

/// Columns and filters of a named report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSpec {
    pub columns: Vec<String>,
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
}

/// Filters of one context as written in the dump
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextFilter {
    /// `context.<name>.read`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    /// `context.<name>` (older single-filter form)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy: Option<String>,
}

impl ContextFilter {
    pub fn read_filter(&self) -> &str {
        self.read
            .as_deref()
            .filter(|f| !f.is_empty())
            .or(self.legacy.as_deref())
            .unwrap_or("")
    }
}

/// A context as offered to the user for selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextInfo {
    pub name: String,
    pub read_filter: String,
    pub is_active: bool,
}

impl Config {
    pub fn style_for(&self, key: &str) -> Option<&StyleRule> {
        self.colors.get(key)
    }

    pub fn report(&self, name: &str) -> Option<&ReportSpec> {
        self.reports.get(name)
    }

    /// The active context name with `none` folded into "no context"
    fn active_context_name(&self) -> Option<&str> {
        self.active_context
            .as_deref()
            .filter(|name| !name.is_empty() && *name != "none")
    }

    pub fn active_context(&self) -> Option<ContextInfo> {
        let name = self.active_context_name()?;
        let read_filter = self
            .context_filters
            .get(name)
            .map(|f| f.read_filter().to_string())
            .unwrap_or_default();
        Some(ContextInfo {
            name: name.to_string(),
            read_filter,
            is_active: true,
        })
    }

    /// All selectable contexts: a synthetic `none` first, then the defined
    /// ones in declaration order.
    pub fn contexts(&self) -> Vec<ContextInfo> {
        let active = self.active_context_name();
        let mut contexts = vec![ContextInfo {
            name: "none".to_string(),
            read_filter: String::new(),
            is_active: active.is_none(),
        }];
        for (name, filter) in &self.context_filters {
            if name == "none" {
                continue;
            }
            contexts.push(ContextInfo {
                name: name.clone(),
                read_filter: filter.read_filter().to_string(),
                is_active: active == Some(name.as_str()),
            });
        }
        contexts
    }
}
