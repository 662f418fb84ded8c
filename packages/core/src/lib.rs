// Library root — exposes internal modules for integration tests in `tests/`.
// Production entry point remains `src/main.rs`.

pub mod api;
pub mod db;
pub mod error;
pub mod repository;

// These modules are only needed by the binary.
// Declared pub so integration tests can reach them if needed.
pub mod cli;
pub mod config;
pub mod logging;
