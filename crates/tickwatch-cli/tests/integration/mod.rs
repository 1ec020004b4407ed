//! Integration tests for tickwatch-cli.
//!
//! These tests run `Application` end to end against an in-memory market
//! data source and capture what would go to stdout.

pub mod common;
