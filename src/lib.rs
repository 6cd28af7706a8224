//! HostLens Library
//!
//! This crate provides the core functionality for auditing host
//! configuration files, starting with the SSH daemon, against a fixed set of
//! security best practices.

pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod scanner;

pub use error::HostLensError;
