use chrono::{DateTime, FixedOffset, Local};
use crossterm::tty::IsTty;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{load_refresh, read_settings, read_settings_from};
use crate::model::settings::AppSettings;
use crate::ops::projects::project_summary;
use crate::ops::report::build_report;
use crate::ops::task_store::{TaskStore, short_uuid};
use crate::tui::{self, render::plain::plain_table};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    let settings = match &cli.settings {
        Some(path) => read_settings_from(path)?,
        None => read_settings()?,
    };
    let now = reference_time(cli.now.as_deref())?;
    let store = load_refresh(&cli.export, &cli.show, now)?;

    match cli.command {
        None => cmd_report(&store, None, &settings, json),
        Some(Commands::Report(args)) => cmd_report(&store, args.name.as_deref(), &settings, json),
        Some(Commands::Tags) => cmd_tags(&store, json),
        Some(Commands::Colors) => cmd_colors(&store, json),
        Some(Commands::Contexts) => cmd_contexts(&store, json),
        Some(Commands::Projects) => cmd_projects(&store, json),
    }
}

fn reference_time(arg: Option<&str>) -> Result<DateTime<FixedOffset>, Box<dyn std::error::Error>> {
    match arg {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map_err(|e| format!("invalid --now '{}': {}", text, e).into()),
        None => Ok(Local::now().fixed_offset()),
    }
}

/// Colour is used only on a terminal, when enabled in settings and not
/// vetoed by NO_COLOR
fn use_color(settings: &AppSettings) -> bool {
    settings.ui.color && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_report(
    store: &TaskStore,
    name: Option<&str>,
    settings: &AppSettings,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = name.unwrap_or(&settings.report);
    let view = build_report(store, name, settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report_to_json(&view))?);
        return Ok(());
    }

    if std::io::stdout().is_tty() && tui::print_report(&view, use_color(settings))? {
        return Ok(());
    }
    print!("{}", tui::render_plain(&view, settings.ui.description_width));
    Ok(())
}

fn cmd_tags(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&task_tags_to_json(store))?);
        return Ok(());
    }

    let header = vec!["ID".to_string(), "UUID".to_string(), "Tags".to_string()];
    let body: Vec<Vec<String>> = store
        .iter()
        .map(|task| {
            vec![
                task.id.to_string(),
                short_uuid(&task.uuid),
                task.virtual_tags
                    .iter()
                    .map(|t| t.key())
                    .collect::<Vec<_>>()
                    .join(" "),
            ]
        })
        .collect();
    print!("{}", plain_table(&header, &body));
    Ok(())
}

fn cmd_colors(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rules = color_rules(store.config());
    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    if rules.is_empty() {
        println!("No colour rules defined.");
        return Ok(());
    }
    let header = vec!["#".to_string(), "Rule".to_string(), "Style".to_string()];
    let body: Vec<Vec<String>> = rules
        .iter()
        .map(|rule| {
            vec![
                rule.precedence
                    .map_or_else(|| "-".to_string(), |p| (p + 1).to_string()),
                format!("color.{}", rule.key),
                describe_style(&rule.style),
            ]
        })
        .collect();
    print!("{}", plain_table(&header, &body));
    Ok(())
}

fn cmd_contexts(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let contexts = store.config().contexts();
    if json {
        println!("{}", serde_json::to_string_pretty(&contexts)?);
        return Ok(());
    }

    let header = vec![" ".to_string(), "Name".to_string(), "Filter".to_string()];
    let body: Vec<Vec<String>> = contexts
        .iter()
        .map(|ctx| {
            vec![
                if ctx.is_active { "*" } else { " " }.to_string(),
                ctx.name.clone(),
                ctx.read_filter.clone(),
            ]
        })
        .collect();
    print!("{}", plain_table(&header, &body));
    Ok(())
}

fn cmd_projects(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows = project_summary(store);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let header: Vec<String> = ["Project", "Tasks", "Pending", "Completed", "Urgency"]
        .into_iter()
        .map(String::from)
        .collect();
    let body: Vec<Vec<String>> = rows.iter().map(|row| row.cells()).collect();
    print!("{}", plain_table(&header, &body));
    Ok(())
}
