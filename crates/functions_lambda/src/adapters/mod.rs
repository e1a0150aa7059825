//! Capability boundaries toward the external managed services.
//!
//! Handlers receive these as injected trait objects, never as process-wide
//! singletons, so each handler is testable against in-memory fakes. The AWS
//! implementations live in [`aws`] and are wired in by the binaries.

pub mod aws;
pub mod document_store;
pub mod forecast;
pub mod identity;
pub mod object_store;
