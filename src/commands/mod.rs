use anyhow::Result;
use std::io::Write;

use crate::cli::Commands;
use bittrex_api::client::{trade::OrderSide, ExchangeClient};

pub mod help;
pub mod list;
pub mod order;

/// Run one command against the exchange, exactly one remote call per command
pub async fn dispatch(
    command: Commands,
    client: &dyn ExchangeClient,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Help => help::handle(out),
        Commands::Buy(args) => order::place(OrderSide::Buy, args, client, out).await,
        Commands::Sell(args) => order::place(OrderSide::Sell, args, client, out).await,
        Commands::Cancel(args) => order::cancel(args, client, out).await,
        Commands::List(_) => list::handle(client, out).await,
    }
}
