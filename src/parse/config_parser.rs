use crate::model::config::{Config, ContextFilter, ReportSpec};
use crate::parse::color_parser::{ConfigError, parse_style};

/// Parse a config dump (`task show` output) into a [`Config`].
///
/// Each line is a key followed by whitespace and a value. Lines with keys
/// the engine doesn't use are skipped. A `color.<key>` line whose style spec
/// names an unknown colour fails the whole parse.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    for raw_line in text.lines() {
        let (key, value) = split_line(raw_line);
        if key.is_empty() {
            continue;
        }

        if let Some(color_key) = key.strip_prefix("color.") {
            if color_key.is_empty() {
                continue;
            }
            let rule = parse_style(value)?;
            config.colors.insert(color_key.to_string(), rule);
        } else if key == "rule.precedence.color" {
            config.precedence = split_list(value);
        } else if key == "due" {
            match value.parse::<i64>() {
                Ok(days) => config.due_days = days,
                Err(_) => tracing::debug!(value, "ignoring non-numeric due threshold"),
            }
        } else if let Some(rest) = key.strip_prefix("report.") {
            apply_report_line(&mut config, rest, value);
        } else if key == "context" {
            config.active_context = (!value.is_empty()).then(|| value.to_string());
        } else if let Some(rest) = key.strip_prefix("context.") {
            apply_context_line(&mut config, rest, value);
        }
    }

    tracing::debug!(
        rules = config.colors.len(),
        precedence = config.precedence.len(),
        due_days = config.due_days,
        reports = config.reports.len(),
        "parsed config"
    );
    Ok(config)
}

/// Split a line into its first word and the trimmed remainder
fn split_line(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((key, value)) => (key, value.trim()),
        None => (line, ""),
    }
}

/// Comma-separated list, empty entries dropped
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// `report.<name>.<attr> <value>`
fn apply_report_line(config: &mut Config, rest: &str, value: &str) {
    let Some((name, attr)) = rest.rsplit_once('.') else {
        return;
    };
    if name.is_empty() {
        return;
    }
    if !matches!(attr, "columns" | "labels" | "filter" | "description" | "sort") {
        return;
    }
    let report: &mut ReportSpec = config.reports.entry(name.to_string()).or_default();
    match attr {
        "columns" => report.columns = split_list(value),
        "labels" => report.labels = split_list(value),
        "sort" => report.sort = split_list(value),
        "filter" => report.filter = Some(value.to_string()),
        "description" => report.description = Some(value.to_string()),
        _ => {}
    }
}

/// `context.<name>.read <filter>` or the older `context.<name> <filter>`
fn apply_context_line(config: &mut Config, rest: &str, value: &str) {
    if let Some(name) = rest.strip_suffix(".read") {
        if !name.is_empty() && !name.contains('.') {
            context_entry(config, name).read = Some(value.to_string());
        }
    } else if !rest.is_empty() && !rest.contains('.') {
        context_entry(config, rest).legacy = Some(value.to_string());
    }
}

fn context_entry<'a>(config: &'a mut Config, name: &str) -> &'a mut ContextFilter {
    config.context_filters.entry(name.to_string()).or_default()
}
