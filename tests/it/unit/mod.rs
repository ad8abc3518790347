//! Unit tests for resizable elements.

mod config_tests;
mod geometry_tests;
mod logging_tests;
mod perf_tests;
mod snapshot_tests;
