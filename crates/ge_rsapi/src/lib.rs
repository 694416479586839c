pub mod endpoints;
pub mod method;
pub mod parse;

pub use endpoints::{BASE_URL, Endpoints};
pub use parse::{ParserMode, parse_items};

use bon::Builder;
use ge_shared_models::BasicItemInfo;
use image::DynamicImage;
use method::{Items, Search};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, ClientBuilder, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ge_shared_models::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Error decoding response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error decoding image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Not found: {0}")]
    NotFound(Url),
    #[error("rsapi error: {0}")]
    Remote(String),
}

#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct RsApiConfig {
    #[builder(default = BASE_URL.to_string())]
    pub base_url: String,
    #[builder(default = Duration::from_secs(30))]
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for RsApiConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Client for the unofficial rsapi.net Grand Exchange mirror.
#[derive(Debug, Clone)]
pub struct RsApiClient {
    reqwest: Client,
    endpoints: Endpoints,
}

impl RsApiClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_config(RsApiConfig::default())
    }

    pub fn with_config(config: RsApiConfig) -> Result<Self, Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json, image/png"));
        if let Some(user_agent) = &config.user_agent {
            default_headers.insert(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(|e| {
                    ge_shared_models::Error::invalid(format!("invalid user agent: {e}"))
                })?,
            );
        }

        let reqwest = ClientBuilder::new()
            .default_headers(default_headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            reqwest,
            endpoints: Endpoints::new(config.base_url),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) async fn get(&self, url: Url) -> Result<Vec<u8>, Error> {
        debug!(%url, "requesting rsapi");
        let response = self.reqwest.get(url.clone()).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url));
        }

        let body = response.error_for_status()?.bytes().await?;
        debug!(%url, bytes = body.len(), "rsapi responded");

        Ok(body.to_vec())
    }

    pub async fn call<M: method::Method>(&self, params: M::Params) -> Result<M::Response, Error> {
        let url = M::url(&self.endpoints, &params)?;
        let body = self.get(url).await?;
        M::parse(&body)
    }

    /// Looks up one or more items; `item_ids` follow `item_id` in the request.
    pub async fn item_info(
        &self,
        item_id: i32,
        item_ids: &[i32],
    ) -> Result<Vec<BasicItemInfo>, Error> {
        let mut ids = Vec::with_capacity(item_ids.len() + 1);
        ids.push(item_id);
        ids.extend_from_slice(item_ids);

        self.call::<Items>(ids).await
    }

    pub async fn items_info(
        &self,
        item_ids: impl IntoIterator<Item = i32>,
    ) -> Result<Vec<BasicItemInfo>, Error> {
        self.call::<Items>(item_ids.into_iter().collect()).await
    }

    pub async fn search_items(&self, query: &str) -> Result<Vec<BasicItemInfo>, Error> {
        self.call::<Search>(query.to_string()).await
    }

    /// Fetches and decodes an item's PNG thumbnail. Unknown ids decode to the
    /// service's placeholder image.
    pub async fn thumbnail(&self, item_id: i32) -> Result<DynamicImage, Error> {
        let url = self.endpoints.thumbnail(item_id)?;
        let body = self.get(url).await?;

        Ok(image::load_from_memory(&body)?)
    }
}
