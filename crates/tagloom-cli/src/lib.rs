//! Command-line front end for Tagloom.
//!
//! # Key Abstractions
//!
//! - [`TagloomCli`]: loads configuration and dispatches commands
//! - [`TagloomConfig`]: layered file/env configuration

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod tag_handlers;

pub use app::TagloomCli;
pub use cli::CliArgs;
pub use config::TagloomConfig;
