//! Unit tests for the interaction controllers.

mod carousel_tests;
mod perf_tests;
mod settings_watcher_tests;
mod snapshot_tests;
