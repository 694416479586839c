use ge_exchange::{
    Error, GrandExchange, ItemDbClient, ItemDbConfig, ItemInfo, RsApiClient, RsApiConfig,
};
use mockito::Matcher;

fn grand_exchange(itemdb: &mockito::Server, rsapi: &mockito::Server) -> GrandExchange {
    GrandExchange::with_clients(
        ItemDbClient::with_config(ItemDbConfig::builder().base_url(itemdb.url()).build())
            .expect("Failed to build item database client"),
        RsApiClient::with_config(RsApiConfig::builder().base_url(rsapi.url()).build())
            .expect("Failed to build rsapi client"),
    )
}

#[tokio::test]
async fn unknown_official_item_is_absent() {
    let mut itemdb = mockito::Server::new_async().await;
    let rsapi = mockito::Server::new_async().await;
    let _mock = itemdb
        .mock("GET", Matcher::Regex(r"^/catalogue/detail\.json".to_string()))
        .with_status(404)
        .create_async()
        .await;

    let ge = grand_exchange(&itemdb, &rsapi);
    let item = ge.ge_item_info(31337).await.expect("404 is not an error");

    assert!(item.is_none());
}

#[tokio::test]
async fn single_item_lookup_takes_first_result() {
    let itemdb = mockito::Server::new_async().await;
    let mut rsapi = mockito::Server::new_async().await;
    let _found = rsapi
        .mock("GET", "/item/1042.format")
        .with_status(200)
        .with_body(r#"{"items":{"1042":{"id":1042,"name":"Partyhat","price":"2.1m","description":"A hat."}}}"#)
        .create_async()
        .await;
    let _missing = rsapi
        .mock("GET", "/item/7.format")
        .with_status(200)
        .with_body(r#"{"error":"No item(s) found"}"#)
        .create_async()
        .await;

    let ge = grand_exchange(&itemdb, &rsapi);

    let item = ge
        .item_info(1042)
        .await
        .expect("Failed to fetch item")
        .expect("Item should exist");
    assert_eq!(item.name(), "Partyhat");
    assert_eq!(item.price(), 2_100_000);

    assert!(ge.item_info(7).await.expect("Failed to fetch item").is_none());
}

#[tokio::test]
async fn errors_keep_their_source() {
    let itemdb = mockito::Server::new_async().await;
    let rsapi = mockito::Server::new_async().await;
    let ge = grand_exchange(&itemdb, &rsapi);

    assert!(matches!(
        ge.search_items("").await,
        Err(Error::RsApi(ge_rsapi::Error::Model(
            ge_shared_models::Error::InvalidArgument(_)
        )))
    ));
    assert!(matches!(
        ge.item_graph(-1).await,
        Err(Error::ItemDb(ge_itemdb::Error::Model(
            ge_shared_models::Error::InvalidArgument(_)
        )))
    ));
}
