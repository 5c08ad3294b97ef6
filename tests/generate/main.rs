//! End-to-end generation tests.
//!
//! These tests drive the library the way the CLI does: build a
//! configuration, generate a sheet from the bundled reference lists, export
//! it and read the output back.

mod batch_test;
mod export_test;
