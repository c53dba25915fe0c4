//! claimdocs-core
//!
//! Pure domain types for the claim document generator: client details,
//! field validation, document types and output naming conventions.
//! No I/O — this is the shared vocabulary of the claimdocs system.

pub mod client;
pub mod document_type;
pub mod error;
pub mod form;
pub mod naming;
pub mod summary;
pub mod validation;
