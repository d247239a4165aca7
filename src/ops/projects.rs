use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::task::Status;
use crate::ops::task_store::TaskStore;

/// Display name for tasks without a project
pub const NO_PROJECT: &str = "(none)";

/// Task counts and summed urgency for one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummaryRow {
    pub project: String,
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub urgency: f64,
}

impl ProjectSummaryRow {
    fn new(project: String) -> Self {
        ProjectSummaryRow {
            project,
            total: 0,
            pending: 0,
            completed: 0,
            urgency: 0.0,
        }
    }

    /// Urgency sum as shown in tables, two decimals
    pub fn urgency_text(&self) -> String {
        format!("{:.2}", self.urgency)
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.project.clone(),
            self.total.to_string(),
            self.pending.to_string(),
            self.completed.to_string(),
            self.urgency_text(),
        ]
    }
}

/// One row per project, sorted by name, with tasks lacking a project
/// grouped under [`NO_PROJECT`]. Every task counts towards the total and
/// the urgency sum whatever its status.
pub fn project_summary(store: &TaskStore) -> Vec<ProjectSummaryRow> {
    let mut rows: BTreeMap<&str, ProjectSummaryRow> = BTreeMap::new();
    for task in store {
        let name = task.project.as_deref().unwrap_or(NO_PROJECT);
        let row = rows
            .entry(name)
            .or_insert_with(|| ProjectSummaryRow::new(name.to_string()));
        row.total += 1;
        match task.status {
            Status::Pending => row.pending += 1,
            Status::Completed => row.completed += 1,
            _ => {}
        }
        row.urgency += task.urgency;
    }
    rows.into_values().collect()
}
