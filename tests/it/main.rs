//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - helpers: Catalog and page builders shared by the tests
//! - unit: Single-controller tests
//! - integration: Multi-controller workflow tests

mod helpers;
mod integration;
mod unit;
