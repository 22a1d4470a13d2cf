//! Application-wide constants.
//!
//! Centralizes the numeric policy of the result pipeline so limits live
//! in one place instead of being scattered through the modules.

// ============================================================================
// Pagination
// ============================================================================

/// Default rows per page when no viewport has been measured yet
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Smallest page size a viewport fit may produce
pub const MIN_PAGE_SIZE: usize = 5;

/// Largest page size a viewport fit may produce
pub const MAX_PAGE_SIZE: usize = 20;

// ============================================================================
// Charts
// ============================================================================

/// Maximum distinct category values for a pie chart to be offered
pub const PIE_MAX_SLICES: usize = 10;

/// Maximum display characters for a bar/pie group label
pub const GROUP_LABEL_MAX_CHARS: usize = 20;

// ============================================================================
// Data Loading
// ============================================================================

/// Maximum number of CSV rows to load
pub const MAX_CSV_ROWS: usize = 100_000;

/// Rows sampled per column when inferring CSV column types
pub const TYPE_INFERENCE_SAMPLE: usize = 100;

/// Rows shown when previewing a table from the sidebar
pub const TABLE_PREVIEW_ROWS: usize = 7;
