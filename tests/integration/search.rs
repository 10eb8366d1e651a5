//! Search endpoints.

use super::common::get_client;
use pipedrive_api::rest::ItemSearchOptions;
use pipedrive_api::SearchOptions;

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_search_deals() {
    let client = get_client();

    let page = client
        .deals()
        .search(&SearchOptions::new("integration").limit(5))
        .await
        .expect("search should succeed");
    assert!(page.items.len() <= 5);
}

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_search_empty_term_is_rejected() {
    let client = get_client();

    let err = client
        .persons()
        .search(&SearchOptions::new(""))
        .await
        .expect_err("empty term should be rejected");
    assert!(err.is_api_error());
}

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_item_search() {
    let client = get_client();

    client
        .item_search(&ItemSearchOptions::new("integration").limit(5))
        .await
        .expect("item search should succeed");
}
