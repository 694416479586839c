use crate::endpoints::ITEMS_PER_PAGE;
use crate::figure::{RawFigure, required, trend_figure};
use crate::method::Method;
use crate::{Endpoints, Error};
use ge_shared_models::wire::first_value;
use ge_shared_models::{BasicItemInfo, Category, Scalar, parse_price};
use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaCount {
    pub letter: char,
    pub items: u32,
}

/// How many items a category holds under each starting letter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    #[serde(default)]
    pub alpha: Vec<AlphaCount>,
}

impl CategoryInfo {
    pub fn items_for(&self, letter: char) -> Option<u32> {
        self.alpha
            .iter()
            .find(|count| count.letter == letter)
            .map(|count| count.items)
    }

    pub fn pages_for(&self, letter: char) -> Option<u32> {
        self.items_for(letter)
            .map(|items| items.div_ceil(ITEMS_PER_PAGE))
    }
}

pub fn parse_category_info(body: &[u8]) -> Result<CategoryInfo, Error> {
    Ok(first_value(body)?)
}

pub struct CategoryInfoMethod;

impl Method for CategoryInfoMethod {
    type Params = Category;
    type Response = CategoryInfo;

    fn url(endpoints: &Endpoints, category: &Category) -> Result<Url, Error> {
        endpoints.category_info(*category)
    }

    fn parse(body: &[u8]) -> Result<CategoryInfo, Error> {
        parse_category_info(body)
    }
}

#[derive(Deserialize, Debug)]
struct PricesResponse {
    #[serde(default)]
    total: u32,
    #[serde(default)]
    items: Vec<RawListing>,
}

#[derive(Deserialize, Debug)]
struct RawListing {
    id: Option<Scalar>,
    name: Option<String>,
    description: Option<String>,
    current: Option<RawFigure>,
}

/// One page of a category listing.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    total: u32,
    items: Vec<BasicItemInfo>,
}

impl CategoryPage {
    /// Items matching the letter across every page.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn items(&self) -> &[BasicItemInfo] {
        &self.items
    }

    pub fn into_items(self) -> Vec<BasicItemInfo> {
        self.items
    }
}

/// Parses a `catalogue/items.json` body. Listing entries carry the same
/// `current` trend object as item details; its price becomes the item price.
pub fn parse_category_prices(body: &[u8]) -> Result<CategoryPage, Error> {
    let raw = first_value::<PricesResponse>(body)?;

    let items = raw
        .items
        .into_iter()
        .map(|listing| -> Result<BasicItemInfo, Error> {
            let (_, price) =
                trend_figure(&required("current", listing.current)?, "price", parse_price)?;
            Ok(BasicItemInfo::new(
                required("id", listing.id)?.to_id("id")?,
                required("name", listing.name)?,
                price,
                required("description", listing.description)?,
            )?)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(CategoryPage {
        total: raw.total,
        items,
    })
}

pub struct CategoryPricesMethod;

impl Method for CategoryPricesMethod {
    type Params = (Category, char, u32);
    type Response = CategoryPage;

    fn url(
        endpoints: &Endpoints,
        (category, alpha, page): &(Category, char, u32),
    ) -> Result<Url, Error> {
        endpoints.category_prices(*category, *alpha, *page)
    }

    fn parse(body: &[u8]) -> Result<CategoryPage, Error> {
        parse_category_prices(body)
    }
}
