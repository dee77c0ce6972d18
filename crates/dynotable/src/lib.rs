//! dynotable - schema-driven table creation on top of DynamoDB.
//!
//! A [`Dynotable`] connection carries a table-name prefix and a raw client.
//! Tables and queries built from it resolve names through the prefix, and
//! queries are awaitable:
//!
//! ```rust,ignore
//! let db = Dynotable::connect(&Config::from_env().with_prefix("foo")).await?;
//! db.create_table(Schema::from_json_str(json)?)?.wait().await?;
//! ```

pub mod cli;
pub mod config;
pub mod connection;
pub mod output;
pub mod query;
pub mod table;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

pub use config::Config;
pub use connection::Dynotable;
pub use query::{CreateTable, DropTable};
pub use table::Table;

pub use dynotable_core::{Result, Schema, TableClient, TableDescription, TableError};
