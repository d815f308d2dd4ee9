mod consts;
mod logging;
mod settings;

pub use consts::{ENV_API_KEY, ENV_API_SECRET};
pub use logging::init_logger;
pub use settings::{FileSettingsStore, JsonFileSettingsStore, Settings, SettingsStore};
