use std::collections::{HashMap, HashSet};
use std::ops::Index;

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::model::column::{Column, ColumnSpec};
use crate::model::config::Config;
use crate::model::style::StyleRule;
use crate::model::task::Task;
use crate::ops::{classify, resolve_style};
use crate::util::vague::vague_datetime;

/// Error type for building a task store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate task uuid in export: {0}")]
    DuplicateUuid(Uuid),
    #[error("duplicate task id in export: {0}")]
    DuplicateId(u32),
}

/// The tasks of one refresh, classified and ready to display.
///
/// Built once per refresh from a fresh export; never updated in place.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    config: Config,
    now: DateTime<FixedOffset>,
    by_uuid: HashMap<Uuid, usize>,
}

impl TaskStore {
    /// Validate identifiers and classify the batch.
    ///
    /// Every uuid and every id must be unique within the batch.
    pub fn new(
        mut tasks: Vec<Task>,
        config: Config,
        now: DateTime<FixedOffset>,
    ) -> Result<TaskStore, StoreError> {
        let mut by_uuid = HashMap::with_capacity(tasks.len());
        let mut ids = HashSet::with_capacity(tasks.len());
        for (idx, task) in tasks.iter().enumerate() {
            if by_uuid.insert(task.uuid, idx).is_some() {
                return Err(StoreError::DuplicateUuid(task.uuid));
            }
            if !ids.insert(task.id) {
                return Err(StoreError::DuplicateId(task.id));
            }
        }

        classify(&mut tasks, config.due_days, now.date_naive(), &now.timezone());

        Ok(TaskStore {
            tasks,
            config,
            now,
            by_uuid,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    pub fn find_by_uuid(&self, uuid: &Uuid) -> Option<&Task> {
        self.by_uuid.get(uuid).map(|&idx| &self.tasks[idx])
    }

    /// Composite style for a task from its virtual tags
    pub fn style(&self, task: &Task) -> StyleRule {
        resolve_style(&task.virtual_tags, &self.config)
    }

    /// Display ids of the task's dependencies that are in this batch,
    /// ascending and comma-joined
    pub fn depends_ids(&self, task: &Task) -> String {
        let mut ids: Vec<u32> = task
            .depends
            .iter()
            .filter_map(|uuid| self.find_by_uuid(uuid))
            .map(|dep| dep.id)
            .collect();
        ids.sort_unstable();
        ids.iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn tags_joined(&self, task: &Task) -> String {
        task.tags.iter().cloned().collect::<Vec<_>>().join(",")
    }

    /// The display value of one field
    pub fn cell(&self, task: &Task, column: Column) -> String {
        match column {
            Column::Id => task.id.to_string(),
            Column::Uuid => task.uuid.to_string(),
            Column::Description => task.description.clone(),
            Column::Project => task.project.clone().unwrap_or_default(),
            Column::Priority => task.priority.clone().unwrap_or_default(),
            Column::Status => task.status.as_str().to_string(),
            Column::Recur => task.recur.clone().unwrap_or_default(),
            Column::Urgency => format!("{:.1}", task.urgency),
            Column::Tags => self.tags_joined(task),
            Column::Depends => self.depends_ids(task),
            Column::Entry => vague_datetime(Some(task.entry), &self.now),
            Column::Modified => vague_datetime(Some(task.modified), &self.now),
            Column::Due => vague_datetime(task.due, &self.now),
            Column::Start => vague_datetime(task.start, &self.now),
            Column::Scheduled => vague_datetime(task.scheduled, &self.now),
            Column::Wait => vague_datetime(task.wait, &self.now),
            Column::End => vague_datetime(task.end, &self.now),
            Column::Until => vague_datetime(task.until, &self.now),
        }
    }

    /// Like [`TaskStore::cell`], honouring the column's format suffix
    pub fn render_cell(&self, task: &Task, spec: &ColumnSpec) -> String {
        if spec.counts_annotations() && !task.annotations.is_empty() {
            return format!("{} [{}]", task.description, task.annotations.len());
        }
        match (spec.column, spec.format.as_deref()) {
            (Column::Uuid, Some("short")) => short_uuid(&task.uuid),
            (column, _) => self.cell(task, column),
        }
    }

    /// One field for every task, in batch order
    pub fn column(&self, column: Column) -> Vec<String> {
        self.tasks.iter().map(|task| self.cell(task, column)).collect()
    }

    /// Rows of rendered cells for a report layout
    pub fn rows(&self, specs: &[ColumnSpec]) -> Vec<Vec<String>> {
        self.tasks
            .iter()
            .map(|task| specs.iter().map(|spec| self.render_cell(task, spec)).collect())
            .collect()
    }
}

/// First eight hex digits of a uuid, as the task tool abbreviates it
pub fn short_uuid(uuid: &Uuid) -> String {
    let mut short = uuid.simple().to_string();
    short.truncate(8);
    short
}

impl Index<usize> for TaskStore {
    type Output = Task;

    fn index(&self, index: usize) -> &Task {
        &self.tasks[index]
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
