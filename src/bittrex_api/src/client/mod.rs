pub mod error;
pub mod trade;

use std::time::Duration;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::Url;
use serde::{de::DeserializeOwned, Deserialize};
use sha2::Sha512;
use tracing::debug;

use self::{
    error::ApiError,
    trade::{
        open_orders::OpenOrder,
        order::{LimitOrder, OrderCreated},
        OrderSide,
    },
};
use crate::{
    constants::{BASE_URL, REQUEST_TIMEOUT_SECS, SIGNATURE_HEADER},
    types::{ApiSecret, Credentials, OrderUuid},
};

pub type Result<T> = std::result::Result<T, ApiError>;

type HmacSha512 = Hmac<Sha512>;

/// The remote operations the CLI relies on. Each call is a single signed request.
#[async_trait]
pub trait ExchangeClient: Send + Sync {
    /// Place a limit order and return the uuid the exchange assigned to it
    async fn place_limit_order(&self, side: OrderSide, order: &LimitOrder)
        -> Result<OrderCreated>;

    async fn cancel_order(&self, uuid: &OrderUuid) -> Result<()>;

    /// All open orders of the account, across every market
    async fn get_open_orders(&self) -> Result<Vec<OpenOrder>>;
}

pub struct BittrexClient {
    /// The client used to make requests to the Bittrex API.
    client: reqwest::Client,
    /// Key and secret used to sign every request.
    credentials: Credentials,
    /// API root without trailing slash, e.g. `https://bittrex.com/api/v1.1`
    base_url: String,
}

impl BittrexClient {
    pub fn new(credentials: Credentials) -> Result<BittrexClient> {
        Self::with_base_url(credentials, BASE_URL)
    }

    /// Build a client against another API root, such as a sandbox
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<BittrexClient> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(BittrexClient {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a signed GET request to a private endpoint and unwrap the response envelope.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Path relative to the API root (e.g. `market/buylimit`)
    /// * `params` - Query parameters appended after `apikey` and `nonce`
    ///
    /// # Returns
    ///
    /// The `result` field of the envelope, which the exchange may leave null
    async fn get_signed<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, String)],
    ) -> Result<Option<T>> {
        let nonce = chrono::Utc::now().timestamp_millis();
        let url = signed_url(&self.base_url, endpoint, &self.credentials, nonce, params)?;
        let signature = sign(&self.credentials.api_secret, url.as_str())?;

        debug!(endpoint, nonce, "Sending signed request");

        let response = self
            .client
            .get(url)
            .header(SIGNATURE_HEADER, signature)
            .send()
            .await?;

        let status_code = response.status();
        let body = response.text().await?;

        debug!(endpoint, status = status_code.as_u16(), "Received response");

        parse_response(endpoint, status_code.as_u16(), &body)
    }
}

#[async_trait]
impl ExchangeClient for BittrexClient {
    async fn place_limit_order(
        &self,
        side: OrderSide,
        order: &LimitOrder,
    ) -> Result<OrderCreated> {
        match side {
            OrderSide::Buy => self.buy_limit(order).await,
            OrderSide::Sell => self.sell_limit(order).await,
        }
    }

    async fn cancel_order(&self, uuid: &OrderUuid) -> Result<()> {
        self.cancel(uuid).await
    }

    async fn get_open_orders(&self) -> Result<Vec<OpenOrder>> {
        self.open_orders().await
    }
}

/// Response envelope shared by every endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    result: Option<T>,
}

/// Build the request URL: `{base}/{endpoint}?apikey=..&nonce=..&<params>`.
///
/// The signature covers this exact string, so parameter order matters.
fn signed_url(
    base_url: &str,
    endpoint: &str,
    credentials: &Credentials,
    nonce: i64,
    params: &[(&str, String)],
) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/{}", base_url, endpoint))
        .map_err(|e| ApiError::Url(e.to_string()))?;

    url.query_pairs_mut()
        .append_pair("apikey", credentials.api_key.as_ref())
        .append_pair("nonce", &nonce.to_string())
        .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));

    Ok(url)
}

/// Lowercase hex HMAC-SHA512 of `uri` keyed by the API secret, sent as the `apisign` header
fn sign(secret: &ApiSecret, uri: &str) -> Result<String> {
    let mut mac = HmacSha512::new_from_slice(secret.as_ref().as_bytes())
        .map_err(|e| ApiError::Signing(e.to_string()))?;
    mac.update(uri.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn parse_response<T: DeserializeOwned>(
    endpoint: &'static str,
    status: u16,
    body: &str,
) -> Result<Option<T>> {
    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        // Gateways answer errors with HTML pages, report the status rather than the parse failure
        Err(_) if !(200..300).contains(&status) => {
            return Err(ApiError::Status {
                endpoint,
                status,
                body: body.to_string(),
            })
        }
        Err(source) => return Err(ApiError::Decode { endpoint, source }),
    };

    if !envelope.success {
        let message = envelope
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("{} request was rejected", endpoint));
        debug!(endpoint, %message, "Request rejected by the exchange");
        return Err(ApiError::Rejected(message));
    }

    Ok(envelope.result)
}
