//! Single-component tests of the pipeline stages.

mod chart_tests;
mod exporter_tests;
mod paginator_tests;
mod sorter_tests;
mod store_tests;
