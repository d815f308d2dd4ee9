use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("invalid api key: must be a non-empty string")]
    ApiKey,
    #[error("invalid api secret: must be a non-empty string")]
    ApiSecret,
    #[error("invalid market: must be two alphanumeric currency codes joined by a dash (e.g. BTC-LTC)")]
    Market,
    #[error("invalid rate: must be a positive, finite number")]
    Rate,
    #[error("invalid quantity: must be a positive, finite number")]
    Quantity,
    #[error("invalid order uuid: must be a non-empty string")]
    OrderUuid,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);
impl ApiKey {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        // Signed verbatim, surrounding whitespace included
        if s.trim().is_empty() {
            Err(ValueError::ApiKey)
        } else {
            Ok(Self(s.into()))
        }
    }
}
impl FromStr for ApiKey {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.0).finish()
    }
}

/// Never printed, `Debug` is redacted
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);
impl ApiSecret {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        // Signed verbatim, surrounding whitespace included
        if s.trim().is_empty() {
            Err(ValueError::ApiSecret)
        } else {
            Ok(Self(s.into()))
        }
    }
}
impl FromStr for ApiSecret {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

/// API key and secret pair used to sign every private request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: ApiKey,
    pub api_secret: ApiSecret,
}

impl Credentials {
    pub fn new(api_key: ApiKey, api_secret: ApiSecret) -> Self {
        Self {
            api_key,
            api_secret,
        }
    }
}

/// A traded currency pair such as `BTC-LTC`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Market(String);
impl Market {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim();
        match t.split_once('-') {
            Some((base, quote))
                if !base.is_empty()
                    && !quote.is_empty()
                    && base.chars().all(|c| c.is_ascii_alphanumeric())
                    && quote.chars().all(|c| c.is_ascii_alphanumeric()) =>
            {
                Ok(Self(t.into()))
            }
            _ => Err(ValueError::Market),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for Market {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for Market {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Limit price of an order, in units of the base currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate(f64);
impl Rate {
    pub fn new(v: f64) -> Result<Self, ValueError> {
        if v.is_finite() && v > 0.0 {
            Ok(Self(v))
        } else {
            Err(ValueError::Rate)
        }
    }
    pub fn get(self) -> f64 {
        self.0
    }
}
impl FromStr for Rate {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: f64 = s.trim().parse().map_err(|_| ValueError::Rate)?;
        Self::new(v)
    }
}
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity(f64);
impl Quantity {
    pub fn new(v: f64) -> Result<Self, ValueError> {
        if v.is_finite() && v > 0.0 {
            Ok(Self(v))
        } else {
            Err(ValueError::Quantity)
        }
    }
    pub fn get(self) -> f64 {
        self.0
    }
}
impl FromStr for Quantity {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: f64 = s.trim().parse().map_err(|_| ValueError::Quantity)?;
        Self::new(v)
    }
}
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exchange-assigned order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderUuid(String);
impl OrderUuid {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim();
        if t.is_empty() {
            Err(ValueError::OrderUuid)
        } else {
            Ok(Self(t.into()))
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for OrderUuid {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for OrderUuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for OrderUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market() {
        assert_eq!(Market::new(" BTC-LTC ").unwrap().as_str(), "BTC-LTC");
        assert_eq!(Market::new("USDT-BTC").unwrap().as_str(), "USDT-BTC");
        assert_eq!(Market::new("BTCLTC"), Err(ValueError::Market));
        assert_eq!(Market::new("BTC-"), Err(ValueError::Market));
        assert_eq!(Market::new("-LTC"), Err(ValueError::Market));
        assert_eq!(Market::new("BTC-LTC-ETH"), Err(ValueError::Market));
        assert_eq!(Market::new("BTC LTC"), Err(ValueError::Market));
    }

    #[test]
    fn test_rate_and_quantity() {
        assert_eq!("10".parse::<Rate>().unwrap().get(), 10.0);
        assert_eq!("0.00012".parse::<Rate>().unwrap().to_string(), "0.00012");
        assert_eq!("0".parse::<Rate>(), Err(ValueError::Rate));
        assert_eq!("-1".parse::<Rate>(), Err(ValueError::Rate));
        assert_eq!("NaN".parse::<Rate>(), Err(ValueError::Rate));
        assert_eq!("ten".parse::<Rate>(), Err(ValueError::Rate));

        assert_eq!("1".parse::<Quantity>().unwrap().to_string(), "1");
        assert_eq!("inf".parse::<Quantity>(), Err(ValueError::Quantity));
        assert_eq!("".parse::<Quantity>(), Err(ValueError::Quantity));
    }

    #[test]
    fn test_order_uuid() {
        assert_eq!(
            OrderUuid::new("ec810bf0-76ae-4ce7-8b2f-5576bf38d3e2")
                .unwrap()
                .as_str(),
            "ec810bf0-76ae-4ce7-8b2f-5576bf38d3e2"
        );
        assert_eq!(OrderUuid::new("X").unwrap().as_str(), "X");
        assert_eq!(OrderUuid::new("   "), Err(ValueError::OrderUuid));
    }

    #[test]
    fn test_secret_is_redacted() {
        let credentials = Credentials::new(
            ApiKey::new("my-key").unwrap(),
            ApiSecret::new("my-secret").unwrap(),
        );
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("my-key"));
        assert!(!debug.contains("my-secret"));
        assert_eq!(ApiSecret::new(""), Err(ValueError::ApiSecret));
        assert_eq!(ApiKey::new(" "), Err(ValueError::ApiKey));
    }

    #[test]
    fn test_credentials_kept_verbatim() {
        assert_eq!(ApiSecret::new(" s3cret ").unwrap().as_ref(), " s3cret ");
        assert_eq!(ApiKey::new("key\t").unwrap().as_ref(), "key\t");
        assert_eq!(ApiSecret::new("\t \n"), Err(ValueError::ApiSecret));
    }
}
