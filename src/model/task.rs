use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::virtual_tag::VirtualTag;
use crate::parse::timestamp;

/// Lifecycle state reported by the task tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Deleted,
    Completed,
    Waiting,
    Recurring,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Deleted => "deleted",
            Status::Completed => "completed",
            Status::Waiting => "waiting",
            Status::Recurring => "recurring",
        }
    }

    /// Completed and deleted tasks take no part in blocking relations
    pub fn is_closed(self) -> bool {
        matches!(self, Status::Completed | Status::Deleted)
    }
}

/// A timestamped note attached to a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry: Option<DateTime<Utc>>,
    pub description: String,
}

/// One exported task record.
///
/// `id` is only unique within the current export (the tool reuses working
/// set numbers); `uuid` is the stable identity. `virtual_tags` is never read
/// from input and is filled in by [`crate::ops::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub uuid: Uuid,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recur: Option<String>,
    pub status: Status,
    #[serde(with = "timestamp")]
    pub entry: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub modified: DateTime<Utc>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub wait: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub urgency: f64,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(
        default,
        deserialize_with = "crate::parse::task_parser::deserialize_depends",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    pub depends: BTreeSet<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip)]
    pub virtual_tags: BTreeSet<VirtualTag>,
}

impl Task {
    /// Create a pending-style task with only the required fields set
    pub fn new(id: u32, uuid: Uuid, description: impl Into<String>, entry: DateTime<Utc>) -> Self {
        Task {
            id,
            uuid,
            description: description.into(),
            project: None,
            priority: None,
            recur: None,
            status: Status::Pending,
            entry,
            modified: entry,
            due: None,
            start: None,
            scheduled: None,
            wait: None,
            end: None,
            until: None,
            urgency: 0.0,
            tags: BTreeSet::new(),
            depends: BTreeSet::new(),
            annotations: Vec::new(),
            virtual_tags: BTreeSet::new(),
        }
    }

    pub fn has_virtual_tag(&self, tag: VirtualTag) -> bool {
        self.virtual_tags.contains(&tag)
    }

    /// Calendar date of `due` as seen from `tz`
    pub fn due_date<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        self.due.map(|due| due.with_timezone(tz).date_naive())
    }
}
