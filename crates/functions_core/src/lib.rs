//! Shared contract for the serverless function handlers.
//!
//! This crate owns the pure pieces every handler builds on: inbound event
//! envelope parsing, the route registration table, the response envelope,
//! and required-field validation. It performs no I/O and never touches an
//! SDK; runtime integration lives in `functions_lambda`.

pub mod envelope;
pub mod response;
pub mod routing;
pub mod validation;
