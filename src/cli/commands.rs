use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tg", about = concat!("task-glance v", env!("CARGO_PKG_VERSION"), " - taskwarrior reports with virtual tags and colour rules"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task export (`task export`), or - for stdin
    #[arg(long, default_value = "-")]
    pub export: PathBuf,

    /// Config dump (`task show`)
    #[arg(long)]
    pub show: PathBuf,

    /// Settings file (default: ~/.config/task-glance/settings.toml)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Reference time as RFC 3339 (default: now, local time)
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a report (default: the one named in settings)
    Report(ReportArgs),
    /// Show the virtual tags of every task
    Tags,
    /// Show the colour rules in precedence order
    Colors,
    /// List contexts and mark the active one
    Contexts,
    /// Summarise task counts and urgency per project
    Projects,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Report name from the config dump
    pub name: Option<String>,
}
