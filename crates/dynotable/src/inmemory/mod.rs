//! In-memory raw client for testing.
//!
//! This module provides an in-memory implementation of [`TableClient`] that
//! keeps tables in a `BTreeMap` wrapped in `Arc<Mutex<_>>` and records every
//! request it receives. Table status transitions are scripted so callers can
//! exercise the wait loops without a real service.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynotable::inmemory::MemoryClient;
//!
//! let client = MemoryClient::new().with_creating_polls(2);
//! let db = Dynotable::new().with_client(client.clone());
//! ```
//!
//! [`TableClient`]: dynotable_core::TableClient

mod client;

pub use client::{Call, MemoryClient};
