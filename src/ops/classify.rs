use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDate, TimeZone};
use uuid::Uuid;

use crate::model::task::{Status, Task};
use crate::model::virtual_tag::VirtualTag;

/// Compute `virtual_tags` for every task in the batch.
///
/// `today` is the reference calendar date and `tz` the zone in which the
/// calendar date of each `due` is taken. Existing virtual tags are replaced,
/// so classifying the same batch twice gives the same result.
///
/// Dependencies are looked up by uuid within the batch; a uuid with no
/// matching task contributes nothing. `blocking`/`blocked` are only set when
/// neither the dependency nor the dependent is completed or deleted.
pub fn classify<Tz: TimeZone>(tasks: &mut [Task], due_days: i64, today: NaiveDate, tz: &Tz) {
    let by_uuid: HashMap<Uuid, usize> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| (task.uuid, idx))
        .collect();

    // (dependency, dependent) index pairs
    let mut blocking: Vec<(usize, usize)> = Vec::new();
    for (idx, task) in tasks.iter().enumerate() {
        if task.status.is_closed() {
            continue;
        }
        for dep_uuid in &task.depends {
            let Some(&dep_idx) = by_uuid.get(dep_uuid) else {
                continue;
            };
            if !tasks[dep_idx].status.is_closed() {
                blocking.push((dep_idx, idx));
            }
        }
    }

    for task in tasks.iter_mut() {
        let due_date = task.due_date(tz);
        task.virtual_tags = attribute_tags(task);
        if let Some(due_date) = due_date {
            task.virtual_tags
                .extend(due_tags(due_date, today, due_days).iter().copied());
        }
    }

    for (dep_idx, idx) in blocking {
        tasks[dep_idx].virtual_tags.insert(VirtualTag::Blocking);
        tasks[idx].virtual_tags.insert(VirtualTag::Blocked);
    }

    tracing::debug!(count = tasks.len(), %today, due_days, "classified tasks");
}

/// Tags that depend only on the task's own fields
fn attribute_tags(task: &Task) -> BTreeSet<VirtualTag> {
    let mut tags = BTreeSet::new();
    if task.start.is_some() {
        tags.insert(VirtualTag::Active);
    }
    if task.priority.is_some() {
        tags.insert(VirtualTag::Priority);
    }
    if task.tags.is_empty() {
        tags.insert(VirtualTag::TagNone);
    } else {
        tags.insert(VirtualTag::Tagged);
    }
    if task.scheduled.is_some() {
        tags.insert(VirtualTag::Scheduled);
    }
    if task.until.is_some() {
        tags.insert(VirtualTag::Until);
    }
    if task.project.is_none() {
        tags.insert(VirtualTag::ProjectNone);
    }
    match task.status {
        Status::Waiting => {
            tags.insert(VirtualTag::Waiting);
        }
        Status::Recurring => {
            tags.insert(VirtualTag::Recurring);
        }
        Status::Completed => {
            tags.insert(VirtualTag::Completed);
        }
        Status::Deleted => {
            tags.insert(VirtualTag::Deleted);
        }
        Status::Pending => {}
    }
    tags
}

/// Due bucket for a due date relative to `today`
pub fn due_tags(due_date: NaiveDate, today: NaiveDate, due_days: i64) -> &'static [VirtualTag] {
    let days = (due_date - today).num_days();
    if days < 0 {
        &[VirtualTag::Overdue]
    } else if days == 0 {
        &[VirtualTag::Due, VirtualTag::DueToday]
    } else if days <= due_days {
        &[VirtualTag::Due]
    } else {
        &[]
    }
}
