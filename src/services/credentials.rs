use anyhow::{bail, Result};
use std::env;
use tracing::debug;

use crate::settings::{ENV_API_KEY, ENV_API_SECRET};
use bittrex_api::types::{ApiKey, ApiSecret, Credentials};

pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment
pub struct ProcessEnv;
impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

pub struct CredentialsResolver<'a> {
    env: &'a dyn EnvSource,
}

impl<'a> CredentialsResolver<'a> {
    pub fn new(env: &'a dyn EnvSource) -> Self {
        Self { env }
    }

    /// Environment variables win over flags, empty values count as absent
    pub fn resolve(&self, apikey: Option<&str>, apisecret: Option<&str>) -> Result<Credentials> {
        let api_key = self.pick(ENV_API_KEY, apikey).and_then(|v| ApiKey::new(&v).ok());
        let api_secret = self
            .pick(ENV_API_SECRET, apisecret)
            .and_then(|v| ApiSecret::new(&v).ok());

        match (api_key, api_secret) {
            (Some(api_key), Some(api_secret)) => Ok(Credentials::new(api_key, api_secret)),
            _ => bail!(
                "--apikey and --apisecret must be specified. Alternatively, use environment variables: {} {}",
                ENV_API_KEY,
                ENV_API_SECRET
            ),
        }
    }

    fn pick(&self, key: &str, flag: Option<&str>) -> Option<String> {
        if let Some(value) = self.env.var(key).filter(|v| !v.trim().is_empty()) {
            debug!(source = key, "Using credential from environment");
            return Some(value);
        }
        flag.filter(|v| !v.trim().is_empty()).map(str::to_string)
    }
}
