//! Error handling examples
//!
//! This example demonstrates how failures surface from the Pipedrive client:
//! - Remote failures (`ErrorKind::Api`) with status and message
//! - Rate limiting
//! - Transport failures
//! - Bulk delete policies
//!
//! The client never retries. Deciding whether to try again is up to the caller.
//!
//! Run with: PIPEDRIVE_API_TOKEN=... cargo run --example error_handling

use pipedrive_api::{BulkDeletePolicy, Error, ErrorKind, PipedriveRestClient, SearchOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Pipedrive Error Handling Examples ===\n");

    let client = PipedriveRestClient::from_env()?;

    example_not_found(&client).await;
    example_structured_error(&client).await;
    example_bulk_policies(&client).await;
    example_transport_error().await;

    println!("\n✓ All error handling examples completed!");

    Ok(())
}

fn describe(err: &Error) {
    match &err.kind {
        ErrorKind::RateLimited { rate, .. } => {
            println!("  rate limited, reset in {:?}", rate.reset_after());
        }
        ErrorKind::Api {
            status,
            message,
            failed_fields,
            ..
        } => {
            println!("  API error {status}: {message}");
            if !failed_fields.is_empty() {
                println!("  failed fields: {failed_fields:?}");
            }
        }
        _ if err.is_transport() => println!("  transport error: {err}"),
        _ => println!("  other error: {err}"),
    }
}

/// Example 1: a missing entity
async fn example_not_found(client: &PipedriveRestClient) {
    println!("Example 1: Not Found");
    println!("--------------------");

    match client.deals().get(u32::MAX as u64).await {
        Ok(deal) => println!("  unexpectedly found {:?}", deal.id),
        Err(err) if err.is_not_found() => {
            println!("✓ Deal does not exist");
            describe(&err);
        }
        Err(err) => describe(&err),
    }
    println!();
}

/// Example 2: an error object with a code and failed fields
async fn example_structured_error(client: &PipedriveRestClient) {
    println!("Example 2: Structured Error");
    println!("---------------------------");

    if let Err(err) = client.persons().search(&SearchOptions::new("")).await {
        describe(&err);
    }
    println!();
}

/// Example 3: strict and lenient bulk deletes
async fn example_bulk_policies(client: &PipedriveRestClient) {
    println!("Example 3: Bulk Delete Policies");
    println!("-------------------------------");

    match client.deals().delete_many(&[]).await {
        Ok(result) => println!("  deleted {:?}", result.deleted),
        Err(err) => describe(&err),
    }

    match client
        .deals()
        .delete_many_with(&[], BulkDeletePolicy::Lenient)
        .await
    {
        Ok(result) => {
            if let Some(err) = &result.remote_error {
                println!("✓ Lenient delete kept the rejection:");
                describe(err);
            }
        }
        Err(err) => describe(&err),
    }
    println!();
}

/// Example 4: nothing listening at the base URL
async fn example_transport_error() {
    println!("Example 4: Transport Error");
    println!("--------------------------");

    let client = match PipedriveRestClient::new("http://127.0.0.1:9", "not-a-real-token") {
        Ok(client) => client,
        Err(err) => {
            describe(&err);
            return;
        }
    };

    if let Err(err) = client.deals().get(1).await {
        describe(&err);
        assert!(!err.to_string().contains("not-a-real-token"));
    }
}
