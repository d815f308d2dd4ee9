use anyhow::{Context, Result};
use tracing::debug;

use crate::settings::Settings;
use bittrex_api::{
    client::{BittrexClient, ExchangeClient},
    types::Credentials,
};

pub trait ClientFactory {
    fn new_client(
        &self,
        credentials: Credentials,
        settings: &Settings,
    ) -> Result<Box<dyn ExchangeClient>>;
}

pub struct DefaultClientFactory;
impl ClientFactory for DefaultClientFactory {
    fn new_client(
        &self,
        credentials: Credentials,
        settings: &Settings,
    ) -> Result<Box<dyn ExchangeClient>> {
        let client = match settings.api_url.as_deref() {
            Some(api_url) => BittrexClient::with_base_url(credentials, api_url),
            None => bittrex_api::get_client(credentials),
        }
        .context("Failed to build the Bittrex client")?;

        debug!(base_url = client.base_url(), "Bittrex client ready");

        Ok(Box::new(client))
    }
}
