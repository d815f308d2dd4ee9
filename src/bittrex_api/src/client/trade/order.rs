use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    client::{error::ApiError, BittrexClient, Result},
    types::{Market, OrderUuid, Quantity, Rate},
};

use super::OrderSide;

const CANCEL_ENDPOINT: &str = "market/cancel";

/// Parameters of a limit order, shared by both sides
#[derive(Debug, Clone, PartialEq)]
pub struct LimitOrder {
    pub market: Market,
    pub quantity: Quantity,
    pub rate: Rate,
}

impl LimitOrder {
    pub fn new(market: Market, quantity: Quantity, rate: Rate) -> Self {
        Self {
            market,
            quantity,
            rate,
        }
    }

    fn query(&self) -> [(&'static str, String); 3] {
        [
            ("market", self.market.to_string()),
            ("quantity", self.quantity.to_string()),
            ("rate", self.rate.to_string()),
        ]
    }
}

/// Result of `/market/buylimit` and `/market/selllimit`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub uuid: String,
}

impl BittrexClient {
    /// Place a limit buy order
    ///
    /// # Arguments
    ///
    /// * `order` - Market, quantity and limit price of the order
    ///
    /// # Returns
    ///
    /// The uuid assigned to the new order
    pub async fn buy_limit(&self, order: &LimitOrder) -> Result<OrderCreated> {
        self.limit(OrderSide::Buy, order).await
    }

    /// Place a limit sell order
    ///
    /// # Arguments
    ///
    /// * `order` - Market, quantity and limit price of the order
    ///
    /// # Returns
    ///
    /// The uuid assigned to the new order
    pub async fn sell_limit(&self, order: &LimitOrder) -> Result<OrderCreated> {
        self.limit(OrderSide::Sell, order).await
    }

    async fn limit(&self, side: OrderSide, order: &LimitOrder) -> Result<OrderCreated> {
        let endpoint = side.limit_endpoint();
        let created: OrderCreated = self
            .get_signed(endpoint, &order.query())
            .await?
            .ok_or(ApiError::MissingResult(endpoint))?;

        info!(
            %side,
            market = %order.market,
            quantity = order.quantity.get(),
            rate = order.rate.get(),
            uuid = %created.uuid,
            "Limit order placed"
        );

        Ok(created)
    }

    /// Cancel an open buy or sell order
    ///
    /// # Arguments
    ///
    /// * `uuid` - Uuid of the order to cancel
    pub async fn cancel(&self, uuid: &OrderUuid) -> Result<()> {
        let _: Option<serde_json::Value> = self
            .get_signed(CANCEL_ENDPOINT, &[("uuid", uuid.to_string())])
            .await?;

        info!(%uuid, "Order cancelled");

        Ok(())
    }
}
