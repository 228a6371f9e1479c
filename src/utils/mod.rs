//! Utility functions for form input handling.
//!
//! - [`url_validator`] - URL-shape validation for redirect targets
//! - [`sanitize`] - Single-line text sanitization

pub mod sanitize;
pub mod url_validator;
