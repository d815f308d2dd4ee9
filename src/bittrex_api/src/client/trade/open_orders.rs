use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    client::{BittrexClient, Result},
    constants::TIMESTAMP_FORMAT,
};

const OPEN_ORDERS_ENDPOINT: &str = "market/getopenorders";

impl BittrexClient {
    /// Get all open orders of the account
    ///
    /// # Returns
    ///
    /// The open orders, oldest first as returned by the exchange
    pub async fn open_orders(&self) -> Result<Vec<OpenOrder>> {
        let orders: Vec<OpenOrder> = self
            .get_signed(OPEN_ORDERS_ENDPOINT, &[])
            .await?
            .unwrap_or_default();

        debug!(count = orders.len(), "Fetched open orders");

        Ok(orders)
    }
}

/// An order returned by `/market/getopenorders`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    pub uuid: Option<String>,
    /// Identifier used to cancel the order
    pub order_uuid: String,
    /// Market of the order (e.g BTC-LTC)
    pub exchange: String,
    /// LIMIT_BUY or LIMIT_SELL
    pub order_type: String,
    pub quantity: f64,
    pub quantity_remaining: f64,
    /// Limit price
    pub limit: f64,
    #[serde(default)]
    pub commission_paid: f64,
    #[serde(default)]
    pub price: f64,
    pub price_per_unit: Option<f64>,
    /// UTC timestamp without offset (e.g 2014-07-09T03:55:48.77)
    pub opened: String,
    pub closed: Option<String>,
    #[serde(default)]
    pub cancel_initiated: bool,
    #[serde(default)]
    pub immediate_or_cancel: bool,
    #[serde(default)]
    pub is_conditional: bool,
    pub condition: Option<String>,
    pub condition_target: Option<f64>,
}

impl OpenOrder {
    /// Parsed `Opened` timestamp, `None` when the exchange sent an unexpected format
    pub fn opened_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.opened, TIMESTAMP_FORMAT).ok()
    }
}
