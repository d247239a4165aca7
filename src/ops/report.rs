use std::collections::BTreeSet;

use serde::Serialize;
use uuid::Uuid;

use crate::model::column::ColumnSpec;
use crate::model::settings::AppSettings;
use crate::model::style::StyleRule;
use crate::model::virtual_tag::VirtualTag;
use crate::ops::task_store::TaskStore;

/// A report laid out for display: headers, cell text and one style per row
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub uuid: Uuid,
    pub cells: Vec<String>,
    pub style: StyleRule,
    pub virtual_tags: BTreeSet<VirtualTag>,
}

impl ReportView {
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }
}

/// Pick the columns for `name`: the report's own definition when the config
/// has one with at least one known column, otherwise the fallback columns
/// from the settings.
pub fn report_columns(store: &TaskStore, name: &str, settings: &AppSettings) -> Vec<ColumnSpec> {
    if let Some(report) = store.config().report(name) {
        let specs = ColumnSpec::from_report(&report.columns, &report.labels);
        if !specs.is_empty() {
            return specs;
        }
        tracing::debug!(report = name, "report has no usable columns, using fallback");
    }
    ColumnSpec::from_report(&settings.fallback_columns, &[])
}

pub fn build_report(store: &TaskStore, name: &str, settings: &AppSettings) -> ReportView {
    let columns = report_columns(store, name, settings);
    let rows = store
        .iter()
        .map(|task| ReportRow {
            uuid: task.uuid,
            cells: columns
                .iter()
                .map(|spec| store.render_cell(task, spec))
                .collect(),
            style: store.style(task),
            virtual_tags: task.virtual_tags.clone(),
        })
        .collect();
    ReportView {
        name: name.to_string(),
        columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::Column;
    use crate::model::task::Task;
    use crate::parse::parse_config;
    use chrono::{TimeZone, Utc};

    fn store(config_text: &str) -> TaskStore {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut task = Task::new(1, Uuid::from_u128(1), "write report", now);
        task.start = Some(now);
        let config = parse_config(config_text).unwrap();
        TaskStore::new(vec![task], config, now.fixed_offset()).unwrap()
    }

    #[test]
    fn uses_report_definition() {
        let store = store(
            "report.next.columns id,description,estimate\nreport.next.labels ID,Description,Est",
        );
        let report = build_report(&store, "next", &AppSettings::default());
        assert_eq!(report.headers(), vec!["ID", "Description"]);
        assert_eq!(report.rows[0].cells, vec!["1", "write report"]);
    }

    #[test]
    fn falls_back_when_report_is_missing() {
        let store = store("");
        let report = build_report(&store, "next", &AppSettings::default());
        assert_eq!(report.columns[0].column, Column::Id);
        assert_eq!(report.columns.len(), 6);
    }

    #[test]
    fn falls_back_when_report_has_only_unknown_columns() {
        let store = store("report.odd.columns estimate,effort");
        let report = build_report(&store, "odd", &AppSettings::default());
        assert_eq!(report.columns.len(), 6);
    }

    #[test]
    fn rows_carry_resolved_style() {
        let store = store("rule.precedence.color active\ncolor.active bold green");
        let report = build_report(&store, "next", &AppSettings::default());
        let row = &report.rows[0];
        assert_eq!(row.style.bold, Some(true));
        assert_eq!(row.style.fg.map(|c| c.index()), Some(2));
        assert!(row.virtual_tags.contains(&VirtualTag::Active));
    }
}
