pub mod classify;
pub mod projects;
pub mod report;
pub mod resolve;
pub mod task_store;

pub use classify::classify;
pub use projects::{ProjectSummaryRow, project_summary};
pub use report::{ReportRow, ReportView, build_report};
pub use resolve::resolve_style;
pub use task_store::{StoreError, TaskStore};
