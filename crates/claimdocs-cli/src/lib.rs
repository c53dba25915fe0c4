//! claimdocs-cli library root.
//!
//! Exposes the command layer and config handling so integration tests can
//! drive a full generation action without spawning the binary.

pub mod commands;
pub mod config;
