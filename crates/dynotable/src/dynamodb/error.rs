//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `TableError` from `dynotable_core`.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{BuildError, DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_table::DeleteTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::list_tables::ListTablesError;
use dynotable_core::TableError;

/// Map failures that never reached the service (dispatch, timeouts).
///
/// Returns `None` for errors the service itself produced.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<TableError>
where
    E: Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(TableError::Connection(
            DisplayErrorContext(err).to_string(),
        )),
        _ => None,
    }
}

/// Map a CreateTable SDK error to TableError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
    table_name: &str,
) -> TableError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => TableError::TableAlreadyExists {
            table_name: table_name.to_string(),
        },
        CreateTableError::LimitExceededException(e) => {
            TableError::LimitExceeded(e.message().unwrap_or("Table limit exceeded").to_string())
        }
        CreateTableError::InternalServerError(_) => {
            TableError::Service("DynamoDB internal server error".to_string())
        }
        err => TableError::Service(format!("CreateTable failed: {}", DisplayErrorContext(err))),
    }
}

/// Map a DescribeTable SDK error to TableError.
///
/// `ResourceNotFoundException` is handled by the caller, which reports a
/// missing table as `None`.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
) -> TableError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        DescribeTableError::InternalServerError(_) => {
            TableError::Service("DynamoDB internal server error".to_string())
        }
        err => TableError::Service(format!(
            "DescribeTable failed: {}",
            DisplayErrorContext(err)
        )),
    }
}

/// Map a DeleteTable SDK error to TableError.
pub fn map_delete_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteTableError, R>,
    table_name: &str,
) -> TableError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        DeleteTableError::ResourceNotFoundException(_) => TableError::TableNotFound {
            table_name: table_name.to_string(),
        },
        DeleteTableError::ResourceInUseException(_) => {
            TableError::Service(format!("Table '{}' is in use", table_name))
        }
        DeleteTableError::LimitExceededException(e) => {
            TableError::LimitExceeded(e.message().unwrap_or("Table limit exceeded").to_string())
        }
        DeleteTableError::InternalServerError(_) => {
            TableError::Service("DynamoDB internal server error".to_string())
        }
        err => TableError::Service(format!("DeleteTable failed: {}", DisplayErrorContext(err))),
    }
}

/// Map a ListTables SDK error to TableError.
pub fn map_list_tables_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ListTablesError, R>,
) -> TableError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        ListTablesError::InternalServerError(_) => {
            TableError::Service("DynamoDB internal server error".to_string())
        }
        err => TableError::Service(format!("ListTables failed: {}", DisplayErrorContext(err))),
    }
}

/// Map a request builder error to TableError.
pub fn map_build_error(err: BuildError) -> TableError {
    TableError::InvalidSchema(format!("Invalid request: {}", err))
}
