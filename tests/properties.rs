//! Property tests for shapesync.
//!
//! Properties use randomized declarations to protect the reconciliation
//! invariants and the extractors' "never panics" guarantee.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/flattening.rs"]
mod flattening;

#[path = "properties/reconciliation.rs"]
mod reconciliation;

#[path = "properties/extractors.rs"]
mod extractors;
