use std::future::IntoFuture;

use dynotable_core::{DeleteTableRequest, Result, WaitPolicy};
use futures_util::future::{BoxFuture, FutureExt};

use super::wait::wait_for_table_gone;
use crate::table::Table;

/// A pending table deletion.
#[derive(Debug, Clone)]
pub struct DropTable {
    table: Table,
    wait: Option<WaitPolicy>,
}

impl DropTable {
    pub(crate) fn new(table: Table) -> Self {
        Self { table, wait: None }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Waits until the service no longer knows the table.
    pub fn wait(self) -> Self {
        let policy = self.table.connection().wait_policy();
        self.wait_with(policy)
    }

    pub fn wait_with(mut self, policy: WaitPolicy) -> Self {
        self.wait = Some(policy);
        self
    }

    /// Sends the delete request, then polls until gone if requested.
    pub async fn exec(self) -> Result<()> {
        let client = self.table.connection().client()?;
        let table_name = self.table.name();

        tracing::debug!(table = table_name, "Deleting table");
        client
            .delete_table(&DeleteTableRequest::new(table_name))
            .await?;

        if let Some(policy) = self.wait {
            wait_for_table_gone(client.as_ref(), table_name, policy).await?;
        }

        tracing::info!(table = table_name, waited = self.wait.is_some(), "Table deleted");
        Ok(())
    }
}

impl IntoFuture for DropTable {
    type Output = Result<()>;
    type IntoFuture = BoxFuture<'static, Result<()>>;

    fn into_future(self) -> Self::IntoFuture {
        self.exec().boxed()
    }
}
