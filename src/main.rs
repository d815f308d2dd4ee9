use anyhow::Result;
use clap::Parser;
use std::io::stdout;

use trade_cli::{cli::Cli, commands, settings::init_logger, AppCtx};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Usage needs neither the data directory nor the settings file
    if cli.wants_help() {
        return commands::help::handle(&mut stdout());
    }

    init_logger();
    let ctx = AppCtx::with_defaults(cli.settings.clone())?;
    trade_cli::run(cli, &ctx, &mut stdout()).await?;
    Ok(())
}
