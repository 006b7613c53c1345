//! Common utilities for integration tests.
//!
//! This module provides shared test infrastructure for LocalStack-based
//! integration testing: client setup and package bucket fixtures.

pub mod localstack;

pub use localstack::{LocalStackTestContext, PACKAGE_KEYS};
