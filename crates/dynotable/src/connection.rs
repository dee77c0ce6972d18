//! The connection object: table naming, wait settings, and the raw client handle.

use std::fmt;
use std::sync::Arc;

use dynotable_core::{Result, Schema, TableClient, TableError, TableNaming, WaitPolicy};
use serde_json::Value;

use crate::config::Config;
use crate::query::{CreateTable, DropTable};
use crate::table::Table;

/// Entry point for building table queries.
///
/// Cloning is cheap; clones share the same raw client.
#[derive(Clone, Default)]
pub struct Dynotable {
    naming: TableNaming,
    wait_policy: WaitPolicy,
    raw: Option<Arc<dyn TableClient>>,
}

impl fmt::Debug for Dynotable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dynotable")
            .field("naming", &self.naming)
            .field("wait_policy", &self.wait_policy)
            .field("connected", &self.raw.is_some())
            .finish()
    }
}

impl Dynotable {
    /// Creates a disconnected instance with default naming and wait policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a disconnected instance configured from `config`.
    pub fn configured(config: &Config) -> Self {
        Self {
            naming: config.naming(),
            wait_policy: config.wait_policy(),
            raw: None,
        }
    }

    /// Connects to DynamoDB using `config`.
    #[cfg(feature = "dynamodb")]
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = crate::dynamodb::DynamoDbClient::from_config(config).await;
        tracing::debug!(
            endpoint = %config.target_display(),
            prefix = config.prefix.as_deref().unwrap_or(""),
            "Connected"
        );
        Ok(Self::configured(config).with_client(client))
    }

    /// Uses `client` as the raw client.
    pub fn with_client(mut self, client: impl TableClient + 'static) -> Self {
        self.raw = Some(Arc::new(client));
        self
    }

    pub fn with_naming(mut self, naming: TableNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_wait_policy(mut self, wait_policy: WaitPolicy) -> Self {
        self.wait_policy = wait_policy;
        self
    }

    /// The raw client, if connected.
    pub fn raw(&self) -> Option<&Arc<dyn TableClient>> {
        self.raw.as_ref()
    }

    /// Replaces the raw client. `None` disconnects.
    pub fn set_raw(&mut self, raw: Option<Arc<dyn TableClient>>) {
        self.raw = raw;
    }

    pub fn naming(&self) -> &TableNaming {
        &self.naming
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        self.wait_policy
    }

    /// Returns the raw client or fails with [`TableError::NotConnected`].
    pub(crate) fn client(&self) -> Result<Arc<dyn TableClient>> {
        self.raw.clone().ok_or(TableError::NotConnected)
    }

    /// A table whose name is prefixed.
    pub fn table(&self, name: &str) -> Table {
        Table::new(self.naming.resolve(name), self.clone())
    }

    /// A table addressed by its exact name.
    pub fn raw_table(&self, name: &str) -> Table {
        Table::new(name, self.clone())
    }

    /// Builds a create query for the table named in `schema`, with prefix.
    pub fn create_table(&self, schema: Schema) -> Result<CreateTable> {
        schema.validate()?;
        let table = self.table(schema.table_name().unwrap_or_default());
        Ok(table.create(schema))
    }

    /// Same as [`create_table`](Self::create_table), from untyped JSON.
    pub fn create_table_from_value(&self, schema: Value) -> Result<CreateTable> {
        self.create_table(Schema::from_value(schema)?)
    }

    /// Builds a create query for the table named in `schema`, without prefix.
    pub fn create_raw_table(&self, schema: Schema) -> Result<CreateTable> {
        schema.validate()?;
        let table = self.raw_table(schema.table_name().unwrap_or_default());
        Ok(table.create(schema))
    }

    /// Same as [`create_raw_table`](Self::create_raw_table), from untyped JSON.
    pub fn create_raw_table_from_value(&self, schema: Value) -> Result<CreateTable> {
        self.create_raw_table(Schema::from_value(schema)?)
    }

    pub fn drop_table(&self, name: &str) -> DropTable {
        self.table(name).drop()
    }

    pub fn drop_raw_table(&self, name: &str) -> DropTable {
        self.raw_table(name).drop()
    }

    /// Lists the tables under this connection's prefix, with the prefix removed.
    ///
    /// Without a prefix every table is listed.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        let client = self.client()?;
        let names = client.list_tables().await?;

        Ok(names
            .iter()
            .filter_map(|name| self.naming.strip(name))
            .map(str::to_string)
            .collect())
    }
}
