//! Runtime integration for the serverless function handlers.
//!
//! This crate owns the handler bodies, the capability traits they call
//! through, environment configuration, and structured logging. Each
//! deployed function has a binary under `src/bin/` that wires AWS
//! implementations of the capabilities into the pure handler.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
