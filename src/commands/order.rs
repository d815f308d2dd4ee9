use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::cli::{CancelArgs, OrderArgs};
use bittrex_api::client::{
    trade::{order::LimitOrder, OrderSide},
    ExchangeClient,
};

pub async fn place(
    side: OrderSide,
    args: OrderArgs,
    client: &dyn ExchangeClient,
    out: &mut dyn Write,
) -> Result<()> {
    let order = LimitOrder::new(args.market, args.quantity, args.rate);

    info!(%side, market = %order.market, "Placing limit order");

    let created = client
        .place_limit_order(side, &order)
        .await
        .with_context(|| format!("Failed to place {} order on {}", side, order.market))?;

    writeln!(out, "Order created, uuid: {}", created.uuid)?;
    Ok(())
}

pub async fn cancel(args: CancelArgs, client: &dyn ExchangeClient, out: &mut dyn Write) -> Result<()> {
    client
        .cancel_order(&args.uuid)
        .await
        .with_context(|| format!("Failed to cancel order {}", args.uuid))?;

    // The exchange does not echo the uuid back, report the one requested
    writeln!(out, "Order {} cancelled.", args.uuid)?;
    Ok(())
}
