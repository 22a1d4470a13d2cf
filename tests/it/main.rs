//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's
//! best practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: builders and fixtures shared across tests
//! - unit: single-component tests of the pipeline stages
//! - integration: full pipeline and session workflow tests

mod integration;
mod unit;
