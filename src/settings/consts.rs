pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "jonlorusso";
pub const APP_NAME: &str = "trade";

pub const SETTINGS_FILE: &str = "settings.json";
/// JSON log in the data directory, one file without rotation
pub const LOG_FILE: &str = "trade.log";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// File log level, the console follows `RUST_LOG`
pub const FILE_LOG_DIRECTIVES: &str = "trade_cli=debug,bittrex_api=debug";

pub const ENV_API_KEY: &str = "BITTREX_APIKEY";
pub const ENV_API_SECRET: &str = "BITTREX_APISECRET";
