//! Notes attached to a deal.

use super::common::{get_client, unique_name};
use pipedrive_api::{Deal, Note};

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_note_on_deal() {
    let client = get_client();

    let deal = client
        .deals()
        .create(&Deal::new(unique_name("Deal with note")))
        .await
        .expect("create deal should succeed");
    let deal_id = deal.id.expect("id");

    let note = client
        .notes()
        .create(&Note::for_deal("integration note", deal_id))
        .await
        .expect("create note should succeed");
    assert_eq!(note.deal_id, Some(deal_id));

    client
        .notes()
        .delete(note.id.expect("id"))
        .await
        .expect("delete note should succeed");
    client.deals().delete(deal_id).await.expect("delete deal should succeed");
}

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_note_without_content_is_rejected() {
    let client = get_client();

    let err = client
        .notes()
        .create(&Note::default())
        .await
        .expect_err("empty note should be rejected");
    assert_eq!(err.status(), Some(400));
    assert!(err.message().is_some());
}
