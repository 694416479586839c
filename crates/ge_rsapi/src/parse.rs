use crate::Error;
use ge_shared_models::wire::first_value;
use ge_shared_models::{BasicItemInfo, Scalar, parse_price};
use serde::Deserialize;
use serde_with::{Map, serde_as};
use tracing::warn;

/// Prefix of the error message the service uses for "nothing matched".
pub const NO_ITEMS: &str = "No item(s)";

/// The two response shapes differ only in how `items` is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserMode {
    /// `item/…` responses: `items` is an object keyed by item id.
    ItemInfo,
    /// `search/…` responses: `items` is an array.
    Search,
}

#[derive(Deserialize, Debug)]
struct RawItem {
    id: Option<Scalar>,
    name: Option<String>,
    price: Option<Scalar>,
    description: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Debug)]
struct ItemInfoResponse {
    error: Option<String>,
    #[serde_as(as = "Option<Map<_, _>>")]
    items: Option<Vec<(String, RawItem)>>,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    error: Option<String>,
    items: Option<Vec<RawItem>>,
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, ge_shared_models::Error> {
    value.ok_or_else(|| ge_shared_models::Error::missing(field))
}

fn item(raw: RawItem) -> Result<BasicItemInfo, ge_shared_models::Error> {
    BasicItemInfo::new(
        required("id", raw.id)?.to_id("id")?,
        required("name", raw.name)?,
        parse_price(&required("price", raw.price)?.text())?,
        required("description", raw.description)?,
    )
}

/// Parses an rsapi.net item or search response into items, in response
/// order.
///
/// A "No item(s) ..." error from the service is an empty result; any other
/// error message fails the call. Only the first JSON value is read.
pub fn parse_items(body: &[u8], mode: ParserMode) -> Result<Vec<BasicItemInfo>, Error> {
    let (error, items) = match mode {
        ParserMode::ItemInfo => {
            let response = first_value::<ItemInfoResponse>(body)?;
            let items = response
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|(_, item)| item)
                .collect::<Vec<_>>();
            (response.error, items)
        }
        ParserMode::Search => {
            let response = first_value::<SearchResponse>(body)?;
            (response.error, response.items.unwrap_or_default())
        }
    };

    if let Some(message) = error {
        if message.starts_with(NO_ITEMS) {
            return Ok(Vec::new());
        }
        warn!(%message, "rsapi reported an error");
        return Err(Error::Remote(message));
    }

    Ok(items
        .into_iter()
        .map(item)
        .collect::<Result<Vec<_>, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ge_shared_models::ItemInfo;

    #[test]
    fn parses_search_results() {
        let body = br#"{"items":[{"id":1042,"name":"Partyhat","price":"2.1m","description":"A hat."}]}"#;
        let items = parse_items(body, ParserMode::Search).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), 1042);
        assert_eq!(items[0].name(), "Partyhat");
        assert_eq!(items[0].price(), 2_100_000);
        assert_eq!(items[0].description(), "A hat.");
    }

    #[test]
    fn search_keeps_response_order() {
        let body = br#"{"items":[
            {"id":"3","name":"C","price":"30","description":"c"},
            {"id":"1","name":"A","price":"10","description":"a"},
            {"id":"2","name":"B","price":"20","description":"b"}
        ]}"#;
        let ids: Vec<i32> = parse_items(body, ParserMode::Search)
            .unwrap()
            .iter()
            .map(|item| item.id())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn parses_keyed_item_info() {
        let body = br#"{"items":{
            "5":{"id":5,"name":"Five","price":"1.5k","description":"five"},
            "5":{"id":5,"name":"Five","price":"1.5k","description":"five"},
            "3":{"id":3,"name":"Three","price":"250k","description":"three"}
        }}"#;
        let items = parse_items(body, ParserMode::ItemInfo).unwrap();

        let ids: Vec<i32> = items.iter().map(|item| item.id()).collect();
        assert_eq!(ids, vec![5, 5, 3]);
        assert_eq!(items[0].price(), 1_500);
        assert_eq!(items[2].price(), 250_000);
    }

    #[test]
    fn no_items_sentinel_is_empty() {
        let body = br#"{"error":"No item(s) found"}"#;
        assert!(parse_items(body, ParserMode::Search).unwrap().is_empty());
        assert!(parse_items(body, ParserMode::ItemInfo).unwrap().is_empty());
    }

    #[test]
    fn other_errors_are_fatal() {
        let body = br#"{"error":"Invalid search query"}"#;
        match parse_items(body, ParserMode::Search) {
            Err(Error::Remote(message)) => assert_eq!(message, "Invalid search query"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn ignores_trailing_bytes() {
        let body = br#"{"items":[{"id":1,"name":"A","price":"10","description":"a"}]} <!-- cached -->"#;
        assert_eq!(parse_items(body, ParserMode::Search).unwrap().len(), 1);
    }

    #[test]
    fn invalid_items_fail_the_call() {
        let body = br#"{"items":[{"id":1,"name":"A","price":"lots","description":"a"}]}"#;
        assert!(matches!(
            parse_items(body, ParserMode::Search),
            Err(Error::Model(ge_shared_models::Error::Format(_)))
        ));

        let body = br#"{"items":[{"id":1,"name":"A","price":"0","description":"a"}]}"#;
        assert!(matches!(
            parse_items(body, ParserMode::Search),
            Err(Error::Model(ge_shared_models::Error::InvalidArgument(_)))
        ));
    }

    #[test]
    fn missing_items_is_empty() {
        assert!(parse_items(b"{}", ParserMode::Search).unwrap().is_empty());
    }

    #[test]
    fn error_wins_over_items() {
        let body = br#"{"items":[{"id":1,"name":"A","price":"10","description":"a"}],"error":"Database offline"}"#;
        match parse_items(body, ParserMode::Search) {
            Err(Error::Remote(message)) => assert_eq!(message, "Database offline"),
            other => panic!("unexpected result: {other:?}"),
        }

        let body = br#"{"items":{"1":{"id":1,"name":"A","price":"10","description":"a"}},"error":"No item(s) found"}"#;
        assert!(parse_items(body, ParserMode::ItemInfo).unwrap().is_empty());
    }

    #[test]
    fn repeated_item_keys_are_rejected() {
        let body = br#"{"items":[{"id":1,"name":"A","price":"10","price":"20","description":"a"}]}"#;
        assert!(matches!(
            parse_items(body, ParserMode::Search),
            Err(Error::Json(_))
        ));
    }
}
