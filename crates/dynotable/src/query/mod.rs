//! Awaitable query objects.
//!
//! Queries are built fluently and do nothing until executed, either through
//! `exec()` or by awaiting the query itself:
//!
//! ```rust,ignore
//! db.create_table(schema)?.wait().await?;
//! ```

mod create;
mod drop;
mod wait;

pub use create::CreateTable;
pub use drop::DropTable;
pub use wait::{wait_for_table_active, wait_for_table_gone};
