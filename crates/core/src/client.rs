use async_trait::async_trait;

use crate::request::{
    CreateTableRequest, DeleteTableRequest, DescribeTableRequest, TableDescription,
};

use super::Result;

/// The raw database client a connection delegates to.
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Issues a table-creation request.
    async fn create_table(&self, request: &CreateTableRequest) -> Result<()>;

    /// Describes a table, returning `None` if the service reports it does not exist.
    async fn describe_table(&self, request: &DescribeTableRequest)
        -> Result<Option<TableDescription>>;

    /// Issues a table-deletion request.
    async fn delete_table(&self, request: &DeleteTableRequest) -> Result<()>;

    /// Lists every table name visible to the client.
    async fn list_tables(&self) -> Result<Vec<String>>;
}
