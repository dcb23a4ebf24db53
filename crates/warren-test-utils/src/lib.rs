//! Test fixtures for Warren development.
//!
//! Hand-built grids with known layouts, shared by the route and provider
//! test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{single_cell, two_by_two};
