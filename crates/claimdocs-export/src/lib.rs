//! claimdocs-export
//!
//! Renders client details into the four fixed claim documents, serializes
//! them to DOCX, bundles multi-document selections into a zip archive and
//! hands the bytes to a download sink.

pub mod archive;
pub mod document;
pub mod docx;
pub mod download;
pub mod error;
pub mod generator;
pub mod styles;
pub mod templates;
