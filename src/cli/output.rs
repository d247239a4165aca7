use serde::Serialize;
use uuid::Uuid;

use crate::model::column::Column;
use crate::model::config::Config;
use crate::model::style::StyleRule;
use crate::model::virtual_tag::VirtualTag;
use crate::ops::report::ReportView;
use crate::ops::task_store::TaskStore;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ReportJson<'a> {
    pub report: &'a str,
    pub headers: Vec<&'a str>,
    pub columns: Vec<Column>,
    pub rows: Vec<ReportRowJson<'a>>,
}

#[derive(Serialize)]
pub struct ReportRowJson<'a> {
    pub uuid: Uuid,
    pub cells: &'a [String],
    pub style: StyleRule,
    pub virtual_tags: Vec<VirtualTag>,
}

#[derive(Serialize)]
pub struct TaskTagsJson {
    pub id: u32,
    pub uuid: Uuid,
    pub description: String,
    pub virtual_tags: Vec<VirtualTag>,
}

#[derive(Serialize)]
pub struct ColorRuleJson {
    pub key: String,
    /// Position in `rule.precedence.color`, absent for rules never consulted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence: Option<usize>,
    #[serde(flatten)]
    pub style: StyleRule,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn report_to_json(view: &ReportView) -> ReportJson<'_> {
    ReportJson {
        report: &view.name,
        headers: view.headers(),
        columns: view.columns.iter().map(|c| c.column).collect(),
        rows: view
            .rows
            .iter()
            .map(|row| ReportRowJson {
                uuid: row.uuid,
                cells: &row.cells,
                style: row.style,
                virtual_tags: row.virtual_tags.iter().copied().collect(),
            })
            .collect(),
    }
}

pub fn task_tags_to_json(store: &TaskStore) -> Vec<TaskTagsJson> {
    store
        .iter()
        .map(|task| TaskTagsJson {
            id: task.id,
            uuid: task.uuid,
            description: task.description.clone(),
            virtual_tags: task.virtual_tags.iter().copied().collect(),
        })
        .collect()
}

/// Colour rules in precedence order, then the remaining rules in the order
/// they were declared
pub fn color_rules(config: &Config) -> Vec<ColorRuleJson> {
    let mut rules: Vec<ColorRuleJson> = config
        .precedence
        .iter()
        .enumerate()
        .filter_map(|(pos, key)| {
            config.style_for(key).map(|style| ColorRuleJson {
                key: key.clone(),
                precedence: Some(pos),
                style: *style,
            })
        })
        .collect();
    for (key, style) in &config.colors {
        if !config.precedence.contains(key) {
            rules.push(ColorRuleJson {
                key: key.clone(),
                precedence: None,
                style: *style,
            });
        }
    }
    rules
}

/// Short human form of a style, such as `fg=1 bg=232 bold`
pub fn describe_style(style: &StyleRule) -> String {
    let mut parts = Vec::new();
    if let Some(fg) = style.fg {
        parts.push(format!("fg={}", fg.index()));
    }
    if let Some(bg) = style.bg {
        parts.push(format!("bg={}", bg.index()));
    }
    if style.bold == Some(true) {
        parts.push("bold".to_string());
    }
    if style.underline == Some(true) {
        parts.push("underline".to_string());
    }
    if parts.is_empty() {
        return "-".to_string();
    }
    parts.join(" ")
}
