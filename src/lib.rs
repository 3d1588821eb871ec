//! # sample-checks
//!
//! Two small, independent checks with a CLI driver on top.
//!
//! ## Modules
//!
//! - [`email`] - Validate a list of addresses against a fixed pattern
//! - [`query`] - Wrap a lookup and report a "no entries found" error
//! - [`config`] - Global and project configuration for the CLI
//! - [`ui`] - Quiet mode and output colors
//!
//! ## Example
//!
//! ```
//! use sample_checks::email::validate_emails;
//! use sample_checks::query::{result_entries, QueryError};
//!
//! assert!(validate_emails(["testuser@gmail.com"]).unwrap());
//! assert!(!validate_emails(["bad email"]).unwrap());
//!
//! assert_eq!(result_entries(), Err(QueryError::NoEntriesFound));
//! ```

pub mod config;
pub mod email;
pub mod query;
pub mod ui;
