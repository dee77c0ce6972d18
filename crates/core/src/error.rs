use thiserror::Error;

/// Errors that can occur while building or executing table operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("{0}")]
    InvalidSchema(String),
    #[error("Schema is missing a `TableName`")]
    MissingTableName,
    #[error("Call .connect() before executing queries.")]
    NotConnected,
    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },
    #[error("Table '{table_name}' already exists")]
    TableAlreadyExists { table_name: String },
    #[error("Timeout waiting for table '{table_name}' to become active after {attempts} attempts")]
    TableActivationTimeout { table_name: String, attempts: u32 },
    #[error("Timeout waiting for table '{table_name}' to be deleted after {attempts} attempts")]
    TableDeletionTimeout { table_name: String, attempts: u32 },
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Service error: {0}")]
    Service(String),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
