use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived tags computed per refresh. Each one names the `color.<key>` rule
/// that styles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VirtualTag {
    Active,
    Blocked,
    Blocking,
    Completed,
    Deleted,
    Due,
    #[serde(rename = "due.today")]
    DueToday,
    #[serde(rename = "project.none")]
    ProjectNone,
    #[serde(rename = "tag.none")]
    TagNone,
    Overdue,
    Priority,
    Project,
    Recurring,
    Scheduled,
    Tagged,
    Until,
    Waiting,
}

impl VirtualTag {
    pub const ALL: [VirtualTag; 17] = [
        VirtualTag::Active,
        VirtualTag::Blocked,
        VirtualTag::Blocking,
        VirtualTag::Completed,
        VirtualTag::Deleted,
        VirtualTag::Due,
        VirtualTag::DueToday,
        VirtualTag::ProjectNone,
        VirtualTag::TagNone,
        VirtualTag::Overdue,
        VirtualTag::Priority,
        VirtualTag::Project,
        VirtualTag::Recurring,
        VirtualTag::Scheduled,
        VirtualTag::Tagged,
        VirtualTag::Until,
        VirtualTag::Waiting,
    ];

    /// The style-rule key, e.g. `due.today` for `color.due.today`
    pub fn key(self) -> &'static str {
        match self {
            VirtualTag::Active => "active",
            VirtualTag::Blocked => "blocked",
            VirtualTag::Blocking => "blocking",
            VirtualTag::Completed => "completed",
            VirtualTag::Deleted => "deleted",
            VirtualTag::Due => "due",
            VirtualTag::DueToday => "due.today",
            VirtualTag::ProjectNone => "project.none",
            VirtualTag::TagNone => "tag.none",
            VirtualTag::Overdue => "overdue",
            VirtualTag::Priority => "priority",
            VirtualTag::Project => "project",
            VirtualTag::Recurring => "recurring",
            VirtualTag::Scheduled => "scheduled",
            VirtualTag::Tagged => "tagged",
            VirtualTag::Until => "until",
            VirtualTag::Waiting => "waiting",
        }
    }

    pub fn from_key(key: &str) -> Option<VirtualTag> {
        VirtualTag::ALL.into_iter().find(|tag| tag.key() == key)
    }
}

impl fmt::Display for VirtualTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
