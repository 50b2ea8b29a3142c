//! Tagloom Core: shared errors, traits, and utilities.
//!
//! This crate has no internal Tagloom dependencies. Every other crate in
//! the workspace builds on it.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: Configuration abstraction
//! - [`util`]: File discovery, atomic writes, and path helpers

#![doc = include_str!("../README.md")]

pub mod error;
pub mod traits;
pub mod util;

pub use error::{Error, Result};
pub use traits::ConfigProvider;

pub use util::files::{write_all_atomic, write_atomic, FileInfo, FindOptions};
