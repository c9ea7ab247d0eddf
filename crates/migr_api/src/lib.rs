//! Async client for the migration gateway REST API.
//!
//! A thin pass-through over the HTTP transport: each operation issues one
//! request against a fixed endpoint and returns the transport's own
//! `Result` unmodified. Status interpretation belongs to the caller.

pub mod client;

pub use client::{ApiClient, DEFAULT_API_URL};
