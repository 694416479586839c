use crate::Error;
use ge_shared_models::Category;
use reqwest::Url;

pub const BASE_URL: &str = "http://services.runescape.com/m=itemdb_rs/api/";

/// Items listed per page by `catalogue/items.json`.
pub const ITEMS_PER_PAGE: u32 = 12;

const SERVICE_GRAPH: &str = "graph/";
const SERVICE_CATALOGUE: &str = "catalogue/";

/// Request addresses for the official item database API.
///
/// Every builder validates its arguments before producing a URL, so a bad
/// id or page never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `catalogue/detail.json?item={id}`
    pub fn item_detail(&self, item_id: i32) -> Result<Url, Error> {
        check_item_id(item_id)?;
        self.join(format!("{SERVICE_CATALOGUE}detail.json?item={item_id}"))
    }

    /// `graph/{id}.json`
    pub fn item_graph(&self, item_id: i32) -> Result<Url, Error> {
        check_item_id(item_id)?;
        self.join(format!("{SERVICE_GRAPH}{item_id}.json"))
    }

    /// `catalogue/category.json?category={id}`
    pub fn category_info(&self, category: Category) -> Result<Url, Error> {
        self.join(format!(
            "{SERVICE_CATALOGUE}category.json?category={}",
            category.id()
        ))
    }

    /// `catalogue/items.json?category={id}&alpha={letter}&page={page}`, pages
    /// counting from one.
    pub fn category_prices(&self, category: Category, alpha: char, page: u32) -> Result<Url, Error> {
        if !alpha.is_alphabetic() {
            return Err(invalid(format!("invalid alpha ({alpha:?})")));
        }
        if page == 0 {
            return Err(invalid(format!("invalid page ({page})")));
        }

        self.join(format!(
            "{SERVICE_CATALOGUE}items.json?category={}&alpha={alpha}&page={page}",
            category.id()
        ))
    }

    fn join(&self, path: String) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{path}", self.base))?)
    }
}

fn check_item_id(item_id: i32) -> Result<(), Error> {
    if item_id < 0 {
        return Err(invalid(format!("invalid itemId ({item_id})")));
    }
    Ok(())
}

fn invalid(message: String) -> Error {
    ge_shared_models::Error::InvalidArgument(message).into()
}
