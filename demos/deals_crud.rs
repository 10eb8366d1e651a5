//! Deal CRUD example
//!
//! This example demonstrates TWO approaches to working with Pipedrive data:
//! 1. Typed entities (`Deal`, `Note`)
//! 2. Dynamic serde_json::Value payloads for partial updates
//!
//! Run with: PIPEDRIVE_API_TOKEN=... cargo run --example deals_crud

use pipedrive_api::rest::{DealStatus, Reference};
use pipedrive_api::{Deal, ListOptions, Note, PipedriveRestClient, SearchOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Pipedrive Deal CRUD Examples ===\n");

    let client = PipedriveRestClient::from_env()?;

    let deal_id = example_create(&client).await?;
    example_read(&client, deal_id).await?;
    example_update(&client, deal_id).await?;
    example_note(&client, deal_id).await?;
    example_search(&client).await?;
    example_list(&client).await?;
    example_delete(&client, deal_id).await?;

    println!("\n✓ All CRUD examples completed!");

    Ok(())
}

async fn example_create(client: &PipedriveRestClient) -> Result<u64, Box<dyn std::error::Error>> {
    println!("Creating deal...");

    let deal = Deal {
        value: Some(1500.0),
        currency: Some("USD".to_string()),
        ..Deal::new("Example deal")
    };
    let created = client.deals().create(&deal).await?;
    let id = created.id.ok_or("created deal has no id")?;

    println!("✓ Created deal {id}");
    Ok(id)
}

async fn example_read(
    client: &PipedriveRestClient,
    id: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let deal = client.deals().get(id).await?;

    println!("✓ Deal {id}: {:?}", deal.title);
    if let Some(owner) = deal.user_id.as_ref().and_then(Reference::name) {
        println!("  owner: {owner}");
    }
    println!("  custom fields: {}", deal.custom_fields.len());
    Ok(())
}

async fn example_update(
    client: &PipedriveRestClient,
    id: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let typed = Deal {
        status: Some(DealStatus::Won),
        ..Default::default()
    };
    client.deals().update(id, &typed).await?;

    let dynamic = serde_json::json!({"title": "Example deal (renamed)"});
    let deal = client.deals().update(id, &dynamic).await?;

    println!("✓ Updated deal: {:?} {:?}", deal.title, deal.status);
    Ok(())
}

async fn example_note(
    client: &PipedriveRestClient,
    deal_id: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let note = client
        .notes()
        .create(&Note::for_deal("Called the customer", deal_id))
        .await?;
    println!("✓ Added note {:?}", note.id);
    Ok(())
}

async fn example_search(client: &PipedriveRestClient) -> Result<(), Box<dyn std::error::Error>> {
    let page = client
        .deals()
        .search(&SearchOptions::new("Example deal").limit(10))
        .await?;

    for hit in &page.items {
        println!("  {:.3} {}", hit.result_score, hit.item.title);
    }
    println!("✓ Search returned {} hits", page.items.len());
    Ok(())
}

async fn example_list(client: &PipedriveRestClient) -> Result<(), Box<dyn std::error::Error>> {
    let page = client.deals().list(&ListOptions::new().limit(5)).await?;
    println!(
        "✓ Listed {} deals (more: {})",
        page.items.len(),
        page.has_more()
    );
    Ok(())
}

async fn example_delete(
    client: &PipedriveRestClient,
    id: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    client.deals().delete(id).await?;
    println!("✓ Deleted deal {id}");
    Ok(())
}
