//! The query-execution seam.
//!
//! SQL execution lives outside this crate (the playground embeds a SQL
//! engine); the core only defines the boundary it calls through. An
//! executor reads the authoritative [`TableStore`] and either produces a
//! fresh [`ResultSet`] or fails with one human-readable message; the
//! core performs no retries and no error classification beyond that.

use crate::data::TableStore;
use crate::types::ResultSet;
use thiserror::Error;

/// A failed query execution: exactly the message the UI shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct QueryError(pub String);

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The external SQL engine, seen from the core.
pub trait QueryExecutor {
    /// Execute `sql` against the current store contents.
    fn execute(&mut self, store: &TableStore, sql: &str) -> Result<ResultSet, QueryError>;
}
