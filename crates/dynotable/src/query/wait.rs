//! Polling loops (Imperative Shell) around the pure wait decisions.

use dynotable_core::{
    is_active, is_gone, is_unrecoverable, DescribeTableRequest, Result, TableClient,
    TableDescription, TableError, WaitPolicy,
};

/// Polls `describe_table` until the table and all of its GSIs are active.
///
/// A table the service does not know yet is treated as still being created.
/// A table that lands in `ARCHIVED` or `INACCESSIBLE_ENCRYPTION_CREDENTIALS`
/// fails the wait immediately.
pub async fn wait_for_table_active(
    client: &dyn TableClient,
    table_name: &str,
    policy: WaitPolicy,
) -> Result<TableDescription> {
    let request = DescribeTableRequest::new(table_name);

    for attempt in 1..=policy.max_attempts {
        match client.describe_table(&request).await? {
            Some(description) if is_active(Some(&description)) => {
                tracing::debug!(table = table_name, attempt, "Table is active");
                return Ok(description);
            }
            Some(description) if is_unrecoverable(Some(&description)) => {
                tracing::warn!(
                    table = table_name,
                    status = %description.table_status,
                    "Table will not become active"
                );
                return Err(TableError::Service(format!(
                    "Table {} entered status {} while waiting to become active",
                    table_name, description.table_status
                )));
            }
            description => tracing::trace!(
                table = table_name,
                attempt,
                status = description.as_ref().map(|d| d.table_status.as_str()),
                "Waiting for table to become active"
            ),
        }

        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }

    tracing::warn!(
        table = table_name,
        attempts = policy.max_attempts,
        "Timed out waiting for table to become active"
    );
    Err(TableError::TableActivationTimeout {
        table_name: table_name.to_string(),
        attempts: policy.max_attempts,
    })
}

/// Polls `describe_table` until the service no longer knows the table.
pub async fn wait_for_table_gone(
    client: &dyn TableClient,
    table_name: &str,
    policy: WaitPolicy,
) -> Result<()> {
    let request = DescribeTableRequest::new(table_name);

    for attempt in 1..=policy.max_attempts {
        let description = client.describe_table(&request).await?;
        if is_gone(description.as_ref()) {
            tracing::debug!(table = table_name, attempt, "Table is gone");
            return Ok(());
        }

        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }

    tracing::warn!(
        table = table_name,
        attempts = policy.max_attempts,
        "Timed out waiting for table to be deleted"
    );
    Err(TableError::TableDeletionTimeout {
        table_name: table_name.to_string(),
        attempts: policy.max_attempts,
    })
}
