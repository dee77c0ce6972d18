use std::future::IntoFuture;

use dynotable_core::{CreateTableRequest, Result, Schema, TableDescription, WaitPolicy};
use futures_util::future::{BoxFuture, FutureExt};

use super::wait::wait_for_table_active;
use crate::table::Table;

/// A pending table creation.
#[derive(Debug, Clone)]
pub struct CreateTable {
    table: Table,
    schema: Schema,
    wait: Option<WaitPolicy>,
}

impl CreateTable {
    pub(crate) fn new(table: Table, schema: Schema) -> Self {
        Self {
            table,
            schema,
            wait: None,
        }
    }

    /// The table this query creates.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The exact request that will be sent.
    pub fn request(&self) -> CreateTableRequest {
        CreateTableRequest::from_schema(self.schema.clone(), self.table.name())
    }

    /// Waits for the table to become active after creating it, using the
    /// connection's wait policy.
    pub fn wait(self) -> Self {
        let policy = self.table.connection().wait_policy();
        self.wait_with(policy)
    }

    /// Waits for the table to become active using `policy`.
    pub fn wait_with(mut self, policy: WaitPolicy) -> Self {
        self.wait = Some(policy);
        self
    }

    /// Sends the create request, then polls until active if requested.
    ///
    /// Resolves to the active table's description when waiting, `None` otherwise.
    pub async fn exec(self) -> Result<Option<TableDescription>> {
        let client = self.table.connection().client()?;
        let request = self.request();

        tracing::debug!(table = %request.table_name, "Creating table");
        client.create_table(&request).await?;

        let description = match self.wait {
            Some(policy) => {
                Some(wait_for_table_active(client.as_ref(), &request.table_name, policy).await?)
            }
            None => None,
        };

        tracing::info!(
            table = %request.table_name,
            waited = self.wait.is_some(),
            "Table created"
        );
        Ok(description)
    }
}

impl IntoFuture for CreateTable {
    type Output = Result<Option<TableDescription>>;
    type IntoFuture = BoxFuture<'static, Result<Option<TableDescription>>>;

    fn into_future(self) -> Self::IntoFuture {
        self.exec().boxed()
    }
}
