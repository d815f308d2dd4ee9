pub mod open_orders;
pub mod order;

use std::fmt;

/// Side of a limit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Endpoint placing a limit order on this side
    pub fn limit_endpoint(&self) -> &'static str {
        match self {
            OrderSide::Buy => "market/buylimit",
            OrderSide::Sell => "market/selllimit",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}
