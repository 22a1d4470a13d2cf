//! Result-view session state.
//!
//! One owner for everything the result pane shows: the current result
//! set, the active sort, the visible page, and any execution error.
//! User events mutate the sort and page specs; the visible page, chart
//! series, and exports are derived fresh on every read (sort, then
//! paginate, then project), so the pieces can never drift apart.

use crate::data::{DataResult, TableStore};
use crate::query::QueryExecutor;
use crate::types::{ChartType, DataColumn, PageSpec, ResultSet, SortSpec};
use crate::view::{self, ChartSeries, Page};

/// View state for one result pane.
///
/// A new result set replaces the old one wholesale and resets the sort
/// and page, whose meaning was tied to the previous data shape.
#[derive(Clone, Debug, Default)]
pub struct ResultSession {
    result: ResultSet,
    sort: SortSpec,
    page: PageSpec,
    error: Option<String>,
}

impl ResultSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Inbound events
    // ------------------------------------------------------------------

    /// Install a fresh result set (a query succeeded or a table preview
    /// was selected). Sort resets to identity, the page to 1, and any
    /// previous error is cleared.
    pub fn set_result(&mut self, result: ResultSet) {
        tracing::debug!(rows = result.row_count(), "installing result set");
        self.result = result;
        self.sort = SortSpec::none();
        self.page.page = 1;
        self.error = None;
    }

    /// Run a query through the executor. Success installs the result;
    /// failure keeps no rows and records the message for display.
    pub fn run(&mut self, executor: &mut dyn QueryExecutor, store: &TableStore, sql: &str) {
        match executor.execute(store, sql) {
            Ok(result) => self.set_result(result),
            Err(error) => {
                tracing::warn!(%error, "query failed");
                self.result = ResultSet::empty();
                self.sort = SortSpec::none();
                self.page.page = 1;
                self.error = Some(error.to_string());
            }
        }
    }

    /// Apply a header click: same column toggles direction, new column
    /// sorts ascending. Either way the view returns to page 1.
    pub fn sort_by(&mut self, column: &str) {
        self.sort.toggle(column);
        self.page.page = 1;
    }

    /// Jump to a page, clamped to `[1, max(1, total_pages)]`. The
    /// paginator itself never clamps.
    pub fn set_page(&mut self, page: usize) {
        let last = view::total_pages(self.result.row_count(), self.page.page_size).max(1);
        self.page.page = page.clamp(1, last);
    }

    /// Change the page size; the page index snaps back to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.page_size = page_size.max(1);
        self.page.page = 1;
    }

    /// Recompute the page size from the rows that fit in the viewport.
    pub fn fit_page_size(&mut self, visible_rows: usize) {
        self.page = PageSpec::fit(visible_rows);
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn result(&self) -> &ResultSet {
        &self.result
    }

    pub fn columns(&self) -> &[DataColumn] {
        &self.result.columns
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn page_spec(&self) -> PageSpec {
        self.page
    }

    /// The execution error to show instead of rows, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The visible page: sort, then slice. Derived fresh on every call.
    pub fn current_page(&self) -> Page {
        let sorted = view::sort(&self.result, &self.sort);
        view::paginate(&sorted, &self.page)
    }

    /// Chart types the visible page can support.
    pub fn available_charts(&self) -> Vec<ChartType> {
        let page = self.page_result();
        let classes = view::classify(&page);
        view::available_charts(&page, &classes)
    }

    /// Project the visible page into a chart series. Classification is
    /// recomputed here on every call, never reused across pages or
    /// result sets.
    pub fn chart_series(&self, chart_type: ChartType) -> Option<ChartSeries> {
        let page = self.page_result();
        let classes = view::classify(&page);
        view::project(chart_type, &page, &classes)
    }

    /// Export the visible page as CSV text.
    pub fn export_csv(&self) -> String {
        let page = self.current_page();
        view::to_csv(&self.result.columns, &page.rows)
    }

    /// Export the visible page as pretty-printed JSON.
    pub fn export_json(&self) -> DataResult<String> {
        let page = self.current_page();
        view::to_json(&self.result.columns, &page.rows)
    }

    /// The visible page as a result set of its own (chart input).
    fn page_result(&self) -> ResultSet {
        ResultSet::new(self.result.columns.clone(), self.current_page().rows)
    }
}
