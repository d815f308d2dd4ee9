use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::ux::TextTable;
use bittrex_api::client::{trade::open_orders::OpenOrder, ExchangeClient};

pub const COLUMNS: [&str; 6] = [
    "Order Date",
    "Order ID",
    "Exchange",
    "Order Type",
    "Quantity",
    "Price",
];

/// Display pattern of the `Order Date` column
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub async fn handle(client: &dyn ExchangeClient, out: &mut dyn Write) -> Result<()> {
    let orders = client
        .get_open_orders()
        .await
        .context("Failed to list open orders")?;

    let table = render(&orders);
    if table.is_empty() {
        info!("No open orders");
    } else {
        info!(count = table.len(), "Open orders fetched");
    }

    write!(out, "{}", table)?;
    Ok(())
}

pub fn render(orders: &[OpenOrder]) -> TextTable {
    let mut table = TextTable::new(&COLUMNS);
    for order in orders {
        table.push_row(row(order));
    }
    table
}

fn row(order: &OpenOrder) -> Vec<String> {
    let opened = match order.opened_at() {
        Some(opened) => opened.format(ORDER_DATE_FORMAT).to_string(),
        None => order.opened.clone(),
    };

    vec![
        opened,
        order.order_uuid.clone(),
        order.exchange.clone(),
        order.order_type.clone(),
        order.quantity_remaining.to_string(),
        order.limit.to_string(),
    ]
}
