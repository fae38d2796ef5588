//! Common test utilities for nested-function integration tests.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
