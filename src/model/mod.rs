pub mod column;
pub mod config;
pub mod settings;
pub mod style;
pub mod task;
pub mod virtual_tag;

pub use column::*;
pub use config::*;
pub use settings::*;
pub use style::*;
pub use task::*;
pub use virtual_tag::*;
