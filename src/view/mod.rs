//! The result-view pipeline.
//!
//! Pure stages over a result snapshot: sort, then paginate, then either
//! render the page as a table or project it into a chart series; the
//! exporter serializes the same visible page. Every stage returns a new
//! value; nothing here mutates its input, so re-running the pipeline on
//! each user event is safe and cheap.

mod chart_engine;
mod exporter;
mod paginator;
mod sorter;

pub use chart_engine::*;
pub use exporter::*;
pub use paginator::*;
pub use sorter::*;
