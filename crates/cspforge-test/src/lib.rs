//! Shared test fixtures for CspForge crates.
//!
//! This crate provides small CSPs and puzzle instances for testing.
//! It only depends on `cspforge-core`; puzzle instances are given in the
//! raw numeric row format so the model crate can parse them itself.
//!
//! - [`csp`] - Hand-built CSPs (not-equal triangles, less-than chains, all-different)
//! - [`warehouse`] - Warehouse puzzle instances as numeric rows
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! cspforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use cspforge_test::csp::{triangle_csp, chain_csp};
//! use cspforge_test::warehouse::unique_3x3_rows;
//! ```

pub mod csp;
pub mod warehouse;

pub use csp::{all_different_csp, chain_csp, triangle_csp};
