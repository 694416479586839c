pub mod catalogue;
pub mod detail;
pub mod endpoints;
mod figure;
pub mod graph;
pub mod method;

pub use endpoints::{BASE_URL, Endpoints, ITEMS_PER_PAGE};

use bon::Builder;
use catalogue::{CategoryInfo, CategoryInfoMethod, CategoryPage, CategoryPricesMethod};
use detail::ItemDetail;
use ge_shared_models::{Category, DetailedItemInfo};
use graph::{ItemGraph, ItemGraphMethod};
use reqwest::header::{HeaderValue, USER_AGENT};
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
    #[error("Not found: {0}")]
    NotFound(Url),
}

#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct ItemDbConfig {
    #[builder(default = BASE_URL.to_string())]
    pub base_url: String,
    #[builder(default = Duration::from_secs(30))]
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ItemDbConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Client for the official Grand Exchange item database.
#[derive(Debug, Clone)]
pub struct ItemDbClient {
    reqwest: Client,
    endpoints: Endpoints,
}

impl ItemDbClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ItemDbConfig::default())
    }

    pub fn with_config(config: ItemDbConfig) -> Result<Self, Error> {
        let mut builder = ClientBuilder::new().timeout(config.timeout);
        if let Some(user_agent) = &config.user_agent {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(|e| {
                    ge_shared_models::Error::invalid(format!("invalid user agent: {e}"))
                })?,
            );
            builder = builder.default_headers(headers);
        }

        Ok(Self {
            reqwest: builder.build()?,
            endpoints: Endpoints::new(config.base_url),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) async fn get(&self, url: Url) -> Result<Vec<u8>, Error> {
        debug!(%url, "requesting item database");
        let response = self.reqwest.get(url.clone()).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url));
        }

        let body = response.error_for_status()?.bytes().await?;
        debug!(%url, bytes = body.len(), "item database responded");

        Ok(body.to_vec())
    }

    pub async fn call<M: method::Method>(&self, params: M::Params) -> Result<M::Response, Error> {
        let url = M::url(&self.endpoints, &params)?;
        let body = self.get(url).await?;
        M::parse(&body)
    }

    /// Looks up one item; `Ok(None)` when the database has no such item.
    pub async fn item_detail(&self, item_id: i32) -> Result<Option<DetailedItemInfo>, Error> {
        match self.call::<ItemDetail>(item_id).await {
            Ok(item) => Ok(Some(item)),
            Err(Error::NotFound(url)) => {
                debug!(%url, item_id, "item not in database");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn item_graph(&self, item_id: i32) -> Result<ItemGraph, Error> {
        self.call::<ItemGraphMethod>(item_id).await
    }

    pub async fn category_info(&self, category: Category) -> Result<CategoryInfo, Error> {
        self.call::<CategoryInfoMethod>(category).await
    }

    pub async fn category_prices(
        &self,
        category: Category,
        alpha: char,
        page: u32,
    ) -> Result<CategoryPage, Error> {
        self.call::<CategoryPricesMethod>((category, alpha, page)).await
    }
}
