use dynotable_core::{DescribeTableRequest, Result, Schema, TableDescription, TableError};
use serde_json::Value;

use crate::connection::Dynotable;
use crate::query::{CreateTable, DropTable};

/// A table bound to a connection, addressed by its fully resolved name.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    connection: Dynotable,
}

impl Table {
    pub(crate) fn new(name: impl Into<String>, connection: Dynotable) -> Self {
        Self {
            name: name.into(),
            connection,
        }
    }

    /// The name the service knows this table by.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection(&self) -> &Dynotable {
        &self.connection
    }

    /// Builds a create query for this table.
    ///
    /// The schema's own `TableName` is replaced by this table's name.
    pub fn create(&self, schema: Schema) -> CreateTable {
        CreateTable::new(self.clone(), schema.with_table_name(self.name.clone()))
    }

    /// Same as [`create`](Self::create), from untyped JSON.
    pub fn create_from_value(&self, schema: Value) -> Result<CreateTable> {
        Ok(self.create(Schema::from_value(schema)?))
    }

    /// Builds a drop query for this table.
    pub fn drop(&self) -> DropTable {
        DropTable::new(self.clone())
    }

    /// Fetches the table's current description.
    pub async fn describe(&self) -> Result<TableDescription> {
        let client = self.connection.client()?;
        client
            .describe_table(&DescribeTableRequest::new(&self.name))
            .await?
            .ok_or_else(|| TableError::TableNotFound {
                table_name: self.name.clone(),
            })
    }
}
