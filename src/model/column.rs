use serde::Serialize;

/// A report column the store knows how to fill.
///
/// This is a closed set: report columns naming any other field are dropped
/// when a report is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Id,
    Uuid,
    Description,
    Project,
    Priority,
    Status,
    Recur,
    Urgency,
    Tags,
    Depends,
    Entry,
    Modified,
    Due,
    Start,
    Scheduled,
    Wait,
    End,
    Until,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Uuid => "uuid",
            Column::Description => "description",
            Column::Project => "project",
            Column::Priority => "priority",
            Column::Status => "status",
            Column::Recur => "recur",
            Column::Urgency => "urgency",
            Column::Tags => "tags",
            Column::Depends => "depends",
            Column::Entry => "entry",
            Column::Modified => "modified",
            Column::Due => "due",
            Column::Start => "start",
            Column::Scheduled => "scheduled",
            Column::Wait => "wait",
            Column::End => "end",
            Column::Until => "until",
        }
    }

    /// Look up the field part of a report column name such as `due.relative`
    pub fn from_name(name: &str) -> Option<Column> {
        let field = name.split_once('.').map_or(name, |(field, _)| field);
        let column = match field {
            "id" => Column::Id,
            "uuid" => Column::Uuid,
            "description" => Column::Description,
            "project" => Column::Project,
            "priority" => Column::Priority,
            "status" => Column::Status,
            "recur" => Column::Recur,
            "urgency" => Column::Urgency,
            "tags" => Column::Tags,
            "depends" => Column::Depends,
            "entry" => Column::Entry,
            "modified" => Column::Modified,
            "due" => Column::Due,
            "start" => Column::Start,
            "scheduled" => Column::Scheduled,
            "wait" => Column::Wait,
            "end" => Column::End,
            "until" => Column::Until,
            _ => return None,
        };
        Some(column)
    }
}

/// A report column after lookup: which field, how to format it, and its header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub column: Column,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub label: String,
}

impl ColumnSpec {
    /// Parse `<field>[.<format>]`, returning `None` for fields outside [`Column`]
    pub fn parse(name: &str, label: Option<&str>) -> Option<ColumnSpec> {
        let column = Column::from_name(name)?;
        let format = name.split_once('.').map(|(_, format)| format.to_string());
        let label = match label {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => default_label(column),
        };
        Some(ColumnSpec {
            column,
            format,
            label,
        })
    }

    /// Lay out a report from its column and label lists
    pub fn from_report(columns: &[String], labels: &[String]) -> Vec<ColumnSpec> {
        columns
            .iter()
            .enumerate()
            .filter_map(|(i, name)| ColumnSpec::parse(name, labels.get(i).map(String::as_str)))
            .collect()
    }

    pub fn counts_annotations(&self) -> bool {
        self.column == Column::Description && self.format.as_deref() == Some("count")
    }
}

fn default_label(column: Column) -> String {
    let name = column.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
