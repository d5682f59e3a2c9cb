//! Contract for the external terms provider
//!
//! This module provides:
//! - Content URIs for the full term list and for single terms
//! - Column names and their fixed order in the terms table
//! - MIME types for directory and item URIs
//! - URI matching used by the provider adapters

pub mod models;
pub mod uri;

pub use models::*;
pub use uri::{ContentUri, UriError};
