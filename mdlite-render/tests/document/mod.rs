//! Document format tests
//!
//! Tests for standalone page export through the format registry.

mod export;
