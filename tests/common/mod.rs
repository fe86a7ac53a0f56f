//! Common test utilities for paintshop contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and config directories plus a CLI runner
//! - `fixed_store`: a store with a controllable clock
//! - Fixtures: reusable config and data constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
