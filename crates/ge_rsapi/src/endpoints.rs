use crate::Error;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Url;

pub const BASE_URL: &str = "http://rsapi.net/ge/";

const SERVICE_SEARCH: &str = "search/";
const SERVICE_ITEM: &str = "item/";
const SERVICE_THUMBNAIL: &str = "thumbnail/";
const FORMAT: &str = ".format";

/// Everything that may not appear raw in a URI path segment. Path
/// punctuation such as parentheses stays as typed; the service rejects
/// those itself.
const PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'=')
    .remove(b'/')
    .remove(b'@');

/// Request addresses for the rsapi.net Grand Exchange mirror.
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

    /// `search/{query}.format`
    pub fn search(&self, query: &str) -> Result<Url, Error> {
        if query.is_empty() {
            return Err(invalid("query empty".to_string()));
        }

        self.join(format!(
            "{SERVICE_SEARCH}{}{FORMAT}",
            utf8_percent_encode(query, PATH)
        ))
    }

    /// `item/{first},{rest...}.format`
    pub fn item(&self, item_id: i32, item_ids: &[i32]) -> Result<Url, Error> {
        self.items(std::iter::once(item_id).chain(item_ids.iter().copied()))
    }

    /// `item/{id1},...,{idN}.format`, keeping order and duplicates.
    pub fn items(&self, item_ids: impl IntoIterator<Item = i32>) -> Result<Url, Error> {
        let mut joined = String::new();
        for (index, item_id) in item_ids.into_iter().enumerate() {
            if item_id < 0 {
                return Err(invalid(format!("invalid itemIds[{index}] ({item_id})")));
            }
            if index > 0 {
                joined.push(',');
            }
            joined.push_str(&item_id.to_string());
        }

        if joined.is_empty() {
            return Err(invalid("itemIds empty".to_string()));
        }

        self.join(format!("{SERVICE_ITEM}{joined}{FORMAT}"))
    }

    /// `thumbnail/{id}`. Unknown ids still get an image: the service answers
    /// with its placeholder picture.
    pub fn thumbnail(&self, item_id: i32) -> Result<Url, Error> {
        if item_id < 0 {
            return Err(invalid(format!("invalid itemId ({item_id})")));
        }

        self.join(format!("{SERVICE_THUMBNAIL}{item_id}"))
    }

    fn join(&self, path: String) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{path}", self.base))?)
    }
}

fn invalid(message: String) -> Error {
    ge_shared_models::Error::InvalidArgument(message).into()
}
