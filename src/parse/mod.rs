pub mod color_parser;
pub mod config_parser;
pub mod task_parser;
pub mod timestamp;

pub use color_parser::{ConfigError, parse_color, parse_style};
pub use config_parser::parse_config;
pub use task_parser::{ExportError, parse_export};
