//! Person lifecycle against the live API.

use super::common::{get_client, unique_name};
use pipedrive_api::rest::ContactField;
use pipedrive_api::Person;

#[tokio::test]
#[ignore = "requires PIPEDRIVE_API_TOKEN"]
async fn test_person_crud() {
    let client = get_client();
    let persons = client.persons();

    let payload = Person {
        email: Some(vec![ContactField::primary("work", "integration@example.com")]),
        ..Person::new(unique_name("Integration person"))
    };

    let created = persons.create(&payload).await.expect("create should succeed");
    let id = created.id.expect("created person should have an id");
    assert_eq!(created.primary_email(), Some("integration@example.com"));

    let renamed = persons
        .update(id, &serde_json::json!({"name": unique_name("Renamed person")}))
        .await
        .expect("update should succeed");
    assert!(renamed
        .name
        .as_deref()
        .is_some_and(|n| n.starts_with("Renamed person")));

    persons.delete(id).await.expect("delete should succeed");
}
