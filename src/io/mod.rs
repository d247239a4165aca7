pub mod export_io;
pub mod settings_io;

pub use export_io::{LoadError, load_refresh, read_input};
pub use settings_io::{SettingsError, read_settings, read_settings_from, settings_path};
