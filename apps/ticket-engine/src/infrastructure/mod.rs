//! Infrastructure Layer
//!
//! Adapters behind the application ports: the in-memory linked-broker cache,
//! the locale market formatter, mock collaborators for tests and
//! development, and SDK configuration.

pub mod config;
pub mod formatting;
pub mod mock;
pub mod persistence;
