//! One entry point over both Grand Exchange services.
//!
//! Detailed records with price trends come from the official item database;
//! batch lookups, search and thumbnails come from rsapi.net.

pub use ge_itemdb::catalogue::{AlphaCount, CategoryInfo, CategoryPage};
pub use ge_itemdb::graph::ItemGraph;
pub use ge_itemdb::{ItemDbClient, ItemDbConfig};
pub use ge_rsapi::{RsApiClient, RsApiConfig};
pub use ge_shared_models::{
    BasicItemInfo, Category, DetailedItemInfo, ItemInfo, PercentChangeTrend, PriceChangeTrend,
    PriceTrend, Trend,
};

use image::DynamicImage;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ItemDb(#[from] ge_itemdb::Error),
    #[error(transparent)]
    RsApi(#[from] ge_rsapi::Error),
}

#[derive(Debug, Clone)]
pub struct GrandExchange {
    itemdb: ItemDbClient,
    rsapi: RsApiClient,
}

impl GrandExchange {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            itemdb: ItemDbClient::new()?,
            rsapi: RsApiClient::new()?,
        })
    }

    pub fn with_clients(itemdb: ItemDbClient, rsapi: RsApiClient) -> Self {
        Self { itemdb, rsapi }
    }

    pub fn itemdb(&self) -> &ItemDbClient {
        &self.itemdb
    }

    pub fn rsapi(&self) -> &RsApiClient {
        &self.rsapi
    }

    /// Full record from the official database, `None` for unknown ids.
    pub async fn ge_item_info(&self, item_id: i32) -> Result<Option<DetailedItemInfo>, Error> {
        Ok(self.itemdb.item_detail(item_id).await?)
    }

    /// Basic record from rsapi.net, `None` when the service knows no such item.
    pub async fn item_info(&self, item_id: i32) -> Result<Option<BasicItemInfo>, Error> {
        let items = self.rsapi.item_info(item_id, &[]).await?;
        if items.is_empty() {
            debug!(item_id, "no item returned");
        }

        Ok(items.into_iter().next())
    }

    pub async fn item_infos(
        &self,
        item_id: i32,
        item_ids: &[i32],
    ) -> Result<Vec<BasicItemInfo>, Error> {
        Ok(self.rsapi.item_info(item_id, item_ids).await?)
    }

    pub async fn item_infos_from(
        &self,
        item_ids: impl IntoIterator<Item = i32>,
    ) -> Result<Vec<BasicItemInfo>, Error> {
        Ok(self.rsapi.items_info(item_ids).await?)
    }

    pub async fn search_items(&self, query: &str) -> Result<Vec<BasicItemInfo>, Error> {
        Ok(self.rsapi.search_items(query).await?)
    }

    pub async fn thumbnail(&self, item_id: i32) -> Result<DynamicImage, Error> {
        Ok(self.rsapi.thumbnail(item_id).await?)
    }

    pub async fn item_graph(&self, item_id: i32) -> Result<ItemGraph, Error> {
        Ok(self.itemdb.item_graph(item_id).await?)
    }

    pub async fn category_info(&self, category: Category) -> Result<CategoryInfo, Error> {
        Ok(self.itemdb.category_info(category).await?)
    }

    pub async fn category_prices(
        &self,
        category: Category,
        alpha: char,
        page: u32,
    ) -> Result<CategoryPage, Error> {
        Ok(self.itemdb.category_prices(category, alpha, page).await?)
    }
}
