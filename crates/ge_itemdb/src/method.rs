use crate::{Endpoints, Error};
use reqwest::Url;

/// One endpoint of the item database: how to address it and how to read
/// what comes back.
pub trait Method {
    type Params;
    type Response;

    fn url(endpoints: &Endpoints, params: &Self::Params) -> Result<Url, Error>;

    fn parse(body: &[u8]) -> Result<Self::Response, Error>;
}
