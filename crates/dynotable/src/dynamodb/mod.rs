//! DynamoDB raw client.
//!
//! This module provides a [`TableClient`](dynotable_core::TableClient)
//! implementation on top of `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;

pub use client::DynamoDbClient;
