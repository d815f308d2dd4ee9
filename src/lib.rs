use anyhow::Result;
use std::{io::Write, path::PathBuf};
use tracing::{debug, info};

pub mod cli;
pub mod commands;
pub mod services;
pub mod settings;
pub mod ux;

use cli::{Cli, Commands};
use services::{ClientFactory, CredentialsResolver, DefaultClientFactory, EnvSource, ProcessEnv};
use settings::{FileSettingsStore, JsonFileSettingsStore, SettingsStore};

/// Collaborators of a run, swapped for stubs in tests
pub struct AppCtx {
    pub settings_store: Box<dyn SettingsStore>,
    pub env: Box<dyn EnvSource>,
    pub client_factory: Box<dyn ClientFactory>,
}

impl AppCtx {
    /// Settings come from `settings_path` when given, from the platform config directory otherwise
    pub fn with_defaults(settings_path: Option<PathBuf>) -> Result<Self> {
        let settings_store: Box<dyn SettingsStore> = match settings_path {
            Some(path) => Box::new(JsonFileSettingsStore::new(path)),
            None => Box::new(FileSettingsStore::new()?),
        };

        Ok(Self {
            settings_store,
            env: Box::new(ProcessEnv),
            client_factory: Box::new(DefaultClientFactory),
        })
    }
}

/// parse → resolve credentials → one remote call → render
pub async fn run(cli: Cli, ctx: &AppCtx, out: &mut dyn Write) -> Result<()> {
    let command = match cli.command {
        None | Some(Commands::Help) => return commands::help::handle(out),
        Some(command) => command,
    };

    let credentials = CredentialsResolver::new(ctx.env.as_ref())
        .resolve(cli.apikey.as_deref(), cli.apisecret.as_deref())?;
    debug!("Credentials resolved");

    let settings = ctx.settings_store.load()?;
    let client = ctx.client_factory.new_client(credentials, &settings)?;

    info!(?command, "Dispatching command");
    commands::dispatch(command, client.as_ref(), out).await
}
