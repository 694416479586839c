use anyhow::Context;
use ge_exchange::{GrandExchange, ItemDbClient, ItemDbConfig, RsApiClient, RsApiConfig};
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("ge_lookup/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub itemdb_url: Option<String>,
    pub rsapi_url: Option<String>,
    pub timeout: Duration,
}

impl Settings {
    /// Reads `GE_ITEMDB_URL`, `GE_RSAPI_URL` and `GE_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let timeout = match lookup("GE_TIMEOUT_SECS") {
            Some(secs) => secs
                .trim()
                .parse::<u64>()
                .with_context(|| format!("GE_TIMEOUT_SECS is not a number of seconds: {secs:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            itemdb_url: lookup("GE_ITEMDB_URL").filter(|url| !url.is_empty()),
            rsapi_url: lookup("GE_RSAPI_URL").filter(|url| !url.is_empty()),
            timeout: Duration::from_secs(timeout),
        })
    }

    pub fn grand_exchange(&self) -> anyhow::Result<GrandExchange> {
        let itemdb = ItemDbClient::with_config(
            ItemDbConfig::builder()
                .maybe_base_url(self.itemdb_url.clone())
                .timeout(self.timeout)
                .user_agent(USER_AGENT)
                .build(),
        )
        .context("Failed to build item database client")?;

        let rsapi = RsApiClient::with_config(
            RsApiConfig::builder()
                .maybe_base_url(self.rsapi_url.clone())
                .timeout(self.timeout)
                .user_agent(USER_AGENT)
                .build(),
        )
        .context("Failed to build rsapi client")?;

        Ok(GrandExchange::with_clients(itemdb, rsapi))
    }
}
