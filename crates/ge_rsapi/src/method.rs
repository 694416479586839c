use crate::parse::{ParserMode, parse_items};
use crate::{Endpoints, Error};
use ge_shared_models::BasicItemInfo;
use reqwest::Url;

pub trait Method {
    type Params;
    type Response;

    fn url(endpoints: &Endpoints, params: &Self::Params) -> Result<Url, Error>;

    fn parse(body: &[u8]) -> Result<Self::Response, Error>;
}

/// Batch lookup by item ids.
pub struct Items;

impl Method for Items {
    type Params = Vec<i32>;
    type Response = Vec<BasicItemInfo>;

    fn url(endpoints: &Endpoints, item_ids: &Vec<i32>) -> Result<Url, Error> {
        endpoints.items(item_ids.iter().copied())
    }

    fn parse(body: &[u8]) -> Result<Vec<BasicItemInfo>, Error> {
        parse_items(body, ParserMode::ItemInfo)
    }
}

/// Free-text item search.
pub struct Search;

impl Method for Search {
    type Params = String;
    type Response = Vec<BasicItemInfo>;

    fn url(endpoints: &Endpoints, query: &String) -> Result<Url, Error> {
        endpoints.search(query)
    }

    fn parse(body: &[u8]) -> Result<Vec<BasicItemInfo>, Error> {
        parse_items(body, ParserMode::Search)
    }
}
