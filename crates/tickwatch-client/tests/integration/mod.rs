//! Integration tests for tickwatch-client.
//!
//! These tests drive `ExchangeClient` against a local HTTP server serving
//! canned exchange responses.

pub mod common;
