//! dynotable_core - pure data and decisions for schema-driven table management.
//!
//! Nothing in this crate performs I/O. The [`TableClient`] trait is the seam
//! through which the shell crate reaches the database service.

pub mod client;
pub mod error;
pub mod naming;
pub mod request;
pub mod schema;
pub mod waiting;

pub use client::TableClient;
pub use error::{Result, TableError};
pub use naming::{TableNaming, DEFAULT_DELIMITER};
pub use request::{
    CreateTableRequest, DeleteTableRequest, DescribeTableRequest, IndexDescription, IndexStatus,
    TableDescription, TableStatus,
};
pub use schema::{
    AttributeDefinition, AttributeType, BillingMode, KeySchemaElement, KeyType, Projection,
    ProjectionType, ProvisionedThroughput, Schema, SecondaryIndex, SseSpecification, SseType,
    StreamSpecification, StreamViewType, TableClass, Tag,
};
pub use waiting::{is_active, is_gone, is_unrecoverable, WaitPolicy};
