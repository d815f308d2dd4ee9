use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::{
    fs,
    io::{stderr, IsTerminal},
    path::{Path, PathBuf},
};
use tracing::warn;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::debug_fn},
    prelude::*,
    registry, EnvFilter,
};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_LOG_LEVEL, FILE_LOG_DIRECTIVES, LOG_FILE,
};

/// Console logs go to stderr so stdout only carries command output.
///
/// The JSON file layer is best effort: when the data directory is unusable the
/// console layer is installed alone and a warning says why.
pub fn init_logger() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let console_layer = fmt::layer()
        .with_writer(stderr)
        .with_ansi(IsTerminal::is_terminal(&stderr()))
        .with_level(true)
        .without_time()
        .compact()
        .fmt_fields({
            debug_fn(move |writer, field, value| {
                if field.name() == "message" {
                    write!(writer, "{:?}", value)?;
                }
                Ok(())
            })
        })
        .with_filter(env_filter);

    let (json_layer, file_error) = match log_directory().and_then(|dir| open_log_file(&dir)) {
        Ok(appender) => {
            let layer = fmt::layer()
                .json()
                .with_writer(appender)
                .with_target(true)
                .with_level(true)
                .flatten_event(true)
                .with_filter(EnvFilter::new(FILE_LOG_DIRECTIVES));
            (Some(layer), None)
        }
        Err(err) => (None, Some(err)),
    };

    registry().with(console_layer).with(json_layer).init();

    if let Some(err) = file_error {
        warn!("File logging disabled: {:#}", err);
    }
}

fn log_directory() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or_else(|| anyhow!("Could not determine project directories"))?;
    Ok(project_dirs.data_dir().to_path_buf())
}

/// A single `trade.log`, appended to by every run and never rotated
fn open_log_file(directory: &Path) -> Result<RollingFileAppender> {
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(directory)
        .with_context(|| format!("Failed to open {} in {}", LOG_FILE, directory.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("trade-cli-log-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_open_log_file() {
        let directory = temp_path("logs");
        open_log_file(&directory).unwrap();
        assert!(directory.join(LOG_FILE).exists());
        fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn test_open_log_file_unusable_directory() {
        // A regular file where the directory should be
        let blocker = temp_path("blocker");
        fs::write(&blocker, "").unwrap();

        let err = open_log_file(&blocker.join("logs")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create log directory"));

        fs::remove_file(&blocker).unwrap();
    }
}
