use anyhow::Result;
use clap::CommandFactory;
use std::io::Write;

use crate::cli::Cli;

/// Same text for `trade` and `trade help`
pub fn handle(out: &mut dyn Write) -> Result<()> {
    let usage = Cli::command().render_long_help();
    write!(out, "{}", usage)?;
    Ok(())
}
