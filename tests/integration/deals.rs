//! Deal lifecycle against the live API.

use super::common::{get_client, unique_name};
use pipedrive_api::{Deal, ListOptions};
use pipedrive_api::rest::DealStatus;

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_deal_crud() {
    let client = get_client();
    let deals = client.deals();

    let title = unique_name("Integration deal");
    let created = deals
        .create(&Deal::new(&title))
        .await
        .expect("create should succeed");
    let id = created.id.expect("created deal should have an id");
    assert_eq!(created.title.as_deref(), Some(title.as_str()));

    let fetched = deals.get(id).await.expect("get should succeed");
    assert_eq!(fetched.id, Some(id));

    let changes = Deal {
        status: Some(DealStatus::Won),
        ..Default::default()
    };
    let updated = deals.update(id, &changes).await.expect("update should succeed");
    assert_eq!(updated.status, Some(DealStatus::Won));

    deals.delete(id).await.expect("delete should succeed");
}

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_deal_bulk_delete() {
    let client = get_client();
    let deals = client.deals();

    let mut ids = Vec::new();
    for n in 0..2 {
        let deal = deals
            .create(&Deal::new(unique_name(&format!("Bulk deal {n}"))))
            .await
            .expect("create should succeed");
        ids.push(deal.id.expect("id"));
    }

    let result = deals.delete_many(&ids).await.expect("bulk delete should succeed");
    assert!(result.is_complete(), "unconfirmed: {:?}", result.unconfirmed());
}

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_deal_not_found() {
    let client = get_client();

    let err = client
        .deals()
        .get(u32::MAX as u64)
        .await
        .expect_err("missing deal should fail");
    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_deal_list_page() {
    let client = get_client();

    let page = client
        .deals()
        .list(&ListOptions::new().limit(5))
        .await
        .expect("list should succeed");
    assert!(page.items.len() <= 5);
}
