use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, de};
use uuid::Uuid;

use crate::model::task::Task;

/// Error type for reading a task export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not parse task export: {0}")]
    InvalidArray(#[source] serde_json::Error),
    #[error("could not parse task on line {line}: {source}")]
    InvalidTask {
        line: usize,
        source: serde_json::Error,
    },
}

/// Parse an export as emitted by the task tool: either one JSON array, or one
/// JSON object per line (optionally comma-terminated).
pub fn parse_export(text: &str) -> Result<Vec<Task>, ExportError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let tasks = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<Task>>(trimmed).map_err(ExportError::InvalidArray)?
    } else {
        let mut tasks = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim().trim_end_matches(',');
            if line.is_empty() {
                continue;
            }
            let task = serde_json::from_str::<Task>(line).map_err(|source| {
                ExportError::InvalidTask {
                    line: idx + 1,
                    source,
                }
            })?;
            tasks.push(task);
        }
        tasks
    };

    tracing::debug!(count = tasks.len(), "parsed task export");
    Ok(tasks)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDepends {
    List(Vec<Uuid>),
    Joined(String),
}

/// `depends` is a JSON array of uuids in current exports and a single
/// comma-joined string in older ones.
pub fn deserialize_depends<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeSet<Uuid>, D::Error> {
    match Option::<RawDepends>::deserialize(deserializer)? {
        None => Ok(BTreeSet::new()),
        Some(RawDepends::List(uuids)) => Ok(uuids.into_iter().collect()),
        Some(RawDepends::Joined(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| Uuid::parse_str(part).map_err(de::Error::custom))
            .collect(),
    }
}
