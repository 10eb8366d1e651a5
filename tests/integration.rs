//! Integration test suite (requires a real Pipedrive company).
//!
//! Every test is ignored by default. Run them with:
//!   PIPEDRIVE_API_TOKEN=... cargo test --test integration -- --ignored --nocapture

#[path = "integration/common.rs"]
mod common;
#[path = "integration/deals.rs"]
mod deals;
#[path = "integration/notes.rs"]
mod notes;
#[path = "integration/persons.rs"]
mod persons;
#[path = "integration/search.rs"]
mod search;
