//! Table data: the authoritative store and its ingestion paths.
//!
//! The [`TableStore`] is the single owner of table schemas and rows;
//! everything the UI shows (sidebar previews, query results, charts) is a
//! derived, read-only projection. Mutations are validated here against
//! the declared column types: a bad value rejects the edit instead of
//! decaying to text.
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` which uses the `DataError`
//! type. Common errors include:
//! - `TooManyRows`: CSV input exceeds the row cap
//! - `InvalidCell`: a value does not parse as the declared column type
//! - `DuplicateTable`/`UnknownTable`: store bookkeeping failures

mod csv_parser;
mod error;
mod store;

pub use csv_parser::*;
pub use error::*;
pub use store::*;
