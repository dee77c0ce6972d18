//! In-memory client implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dynotable_core::{
    CreateTableRequest, DeleteTableRequest, DescribeTableRequest, Result, TableClient,
    TableDescription, TableError, TableStatus,
};

/// A request received by a [`MemoryClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateTable(CreateTableRequest),
    DescribeTable(DescribeTableRequest),
    DeleteTable(DeleteTableRequest),
    ListTables,
}

#[derive(Debug)]
struct MemoryTable {
    status: TableStatus,
    /// Describe calls left before the current transitional status resolves.
    remaining_polls: u32,
}

#[derive(Debug)]
struct MemoryState {
    tables: BTreeMap<String, MemoryTable>,
    calls: Vec<Call>,
    creating_polls: u32,
    deleting_polls: u32,
    failure: Option<TableError>,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            tables: BTreeMap::new(),
            calls: Vec::new(),
            creating_polls: 1,
            deleting_polls: 1,
            failure: None,
        }
    }
}

impl MemoryState {
    /// Records `call`, then fails it if a failure was queued.
    fn record(&mut self, call: Call) -> Result<()> {
        self.calls.push(call);
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// In-memory table service.
///
/// Cloning yields a handle to the same state. Newly created tables report
/// `CREATING` for a configurable number of describe calls (default 1) before
/// turning `ACTIVE`; deleted tables report `DELETING` the same way before
/// disappearing.
#[derive(Debug, Clone, Default)]
pub struct MemoryClient {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryClient {
    /// Creates an empty client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many describe calls report `CREATING` after a create.
    ///
    /// # Panics
    ///
    /// Panics if the client has already been cloned.
    pub fn with_creating_polls(self, polls: u32) -> Self {
        self.configure(|state| state.creating_polls = polls)
    }

    /// Sets how many describe calls report `DELETING` after a delete.
    ///
    /// # Panics
    ///
    /// Panics if the client has already been cloned.
    pub fn with_deleting_polls(self, polls: u32) -> Self {
        self.configure(|state| state.deleting_polls = polls)
    }

    fn configure(mut self, apply: impl FnOnce(&mut MemoryState)) -> Self {
        match Arc::get_mut(&mut self.state) {
            Some(state) => apply(state.get_mut()),
            None => panic!("MemoryClient must be configured before it is cloned"),
        }
        self
    }

    /// Forces the status of an existing table; later describes report it as-is.
    pub async fn set_table_status(&self, table_name: &str, status: TableStatus) {
        if let Some(table) = self.state.lock().await.tables.get_mut(table_name) {
            table.status = status;
            table.remaining_polls = 0;
        }
    }

    /// Makes the next call of any kind fail with `error`.
    pub async fn fail_next(&self, error: TableError) {
        self.state.lock().await.failure = Some(error);
    }

    /// Every request received so far, oldest first.
    pub async fn calls(&self) -> Vec<Call> {
        self.state.lock().await.calls.clone()
    }

    pub async fn last_create_request(&self) -> Option<CreateTableRequest> {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::CreateTable(request) => Some(request.clone()),
                _ => None,
            })
    }

    pub async fn last_describe_request(&self) -> Option<DescribeTableRequest> {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::DescribeTable(request) => Some(request.clone()),
                _ => None,
            })
    }

    pub async fn describe_count(&self) -> usize {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|call| matches!(call, Call::DescribeTable(_)))
            .count()
    }

    /// Current status of a table without counting as a describe call.
    pub async fn table_status(&self, table_name: &str) -> Option<TableStatus> {
        self.state
            .lock()
            .await
            .tables
            .get(table_name)
            .map(|table| table.status)
    }
}

#[async_trait]
impl TableClient for MemoryClient {
    async fn create_table(&self, request: &CreateTableRequest) -> Result<()> {
        let mut state = self.state.lock().await;
        state.record(Call::CreateTable(request.clone()))?;

        if state.tables.contains_key(&request.table_name) {
            return Err(TableError::TableAlreadyExists {
                table_name: request.table_name.clone(),
            });
        }

        let remaining_polls = state.creating_polls;
        state.tables.insert(
            request.table_name.clone(),
            MemoryTable {
                status: TableStatus::Creating,
                remaining_polls,
            },
        );
        Ok(())
    }

    async fn describe_table(
        &self,
        request: &DescribeTableRequest,
    ) -> Result<Option<TableDescription>> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        state.record(Call::DescribeTable(request.clone()))?;

        let Some(table) = state.tables.get_mut(&request.table_name) else {
            return Ok(None);
        };

        if table.remaining_polls > 0 {
            table.remaining_polls -= 1;
        } else {
            match table.status {
                TableStatus::Creating | TableStatus::Updating => {
                    table.status = TableStatus::Active;
                }
                TableStatus::Deleting => {
                    state.tables.remove(&request.table_name);
                    return Ok(None);
                }
                _ => {}
            }
        }

        Ok(Some(TableDescription::new(
            request.table_name.clone(),
            table.status,
        )))
    }

    async fn delete_table(&self, request: &DeleteTableRequest) -> Result<()> {
        let mut state = self.state.lock().await;
        state.record(Call::DeleteTable(request.clone()))?;

        let remaining_polls = state.deleting_polls;
        match state.tables.get_mut(&request.table_name) {
            Some(table) => {
                table.status = TableStatus::Deleting;
                table.remaining_polls = remaining_polls;
                Ok(())
            }
            None => Err(TableError::TableNotFound {
                table_name: request.table_name.clone(),
            }),
        }
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let mut state = self.state.lock().await;
        state.record(Call::ListTables)?;
        Ok(state.tables.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynotable_core::Schema;

    fn request(name: &str) -> CreateTableRequest {
        CreateTableRequest::from_schema(Schema::default(), name)
    }

    #[tokio::test]
    async fn test_create_then_describe_transitions_to_active() {
        let client = MemoryClient::new();
        client.create_table(&request("foo.Table")).await.unwrap();

        let describe = DescribeTableRequest::new("foo.Table");
        let first = client.describe_table(&describe).await.unwrap().unwrap();
        let second = client.describe_table(&describe).await.unwrap().unwrap();

        assert_eq!(first.table_status, TableStatus::Creating);
        assert_eq!(second.table_status, TableStatus::Active);
    }

    #[tokio::test]
    async fn test_zero_creating_polls_is_active_immediately() {
        let client = MemoryClient::new().with_creating_polls(0);
        client.create_table(&request("foo.Table")).await.unwrap();

        let description = client
            .describe_table(&DescribeTableRequest::new("foo.Table"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(description.table_status, TableStatus::Active);
    }

    #[tokio::test]
    async fn test_describe_unknown_table_is_none() {
        let client = MemoryClient::new();
        let description = client
            .describe_table(&DescribeTableRequest::new("nope"))
            .await
            .unwrap();
        assert!(description.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_create_fails() {
        let client = MemoryClient::new();
        client.create_table(&request("foo.Table")).await.unwrap();

        let err = client.create_table(&request("foo.Table")).await.unwrap_err();
        assert!(matches!(err, TableError::TableAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_delete_transitions_through_deleting() {
        let client = MemoryClient::new().with_creating_polls(0);
        client.create_table(&request("foo.Table")).await.unwrap();
        client
            .delete_table(&DeleteTableRequest::new("foo.Table"))
            .await
            .unwrap();

        assert_eq!(
            client.table_status("foo.Table").await,
            Some(TableStatus::Deleting)
        );

        let describe = DescribeTableRequest::new("foo.Table");
        let first = client.describe_table(&describe).await.unwrap();
        let second = client.describe_table(&describe).await.unwrap();

        assert_eq!(first.map(|d| d.table_status), Some(TableStatus::Deleting));
        assert!(second.is_none());
        assert_eq!(client.table_status("foo.Table").await, None);
    }

    #[tokio::test]
    async fn test_fail_next_fails_once_and_records_call() {
        let client = MemoryClient::new();
        client
            .fail_next(TableError::Connection("refused".to_string()))
            .await;

        let err = client.list_tables().await.unwrap_err();
        assert_eq!(err, TableError::Connection("refused".to_string()));
        assert!(client.list_tables().await.unwrap().is_empty());
        assert_eq!(client.calls().await, vec![Call::ListTables, Call::ListTables]);
    }

    #[test]
    #[should_panic(expected = "configured before it is cloned")]
    fn test_configuring_a_shared_client_panics() {
        let client = MemoryClient::new();
        let _shared = client.clone();

        let _ = client.with_creating_polls(3);
    }

    #[tokio::test]
    async fn test_set_table_status_sticks() {
        let client = MemoryClient::new();
        client.create_table(&request("foo.Table")).await.unwrap();
        client
            .set_table_status("foo.Table", TableStatus::Archived)
            .await;

        let description = client
            .describe_table(&DescribeTableRequest::new("foo.Table"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(description.table_status, TableStatus::Archived);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let client = MemoryClient::new();
        let other = client.clone();
        client.create_table(&request("foo.Table")).await.unwrap();

        assert_eq!(other.list_tables().await.unwrap(), vec!["foo.Table"]);
        assert!(other.last_create_request().await.is_some());
    }
}
