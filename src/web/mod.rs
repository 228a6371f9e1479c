//! Browser-facing layer: admin screens and public pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Session cookie authentication
//! - [`routes`] - Route configuration
//! - [`forms`] - Form bodies with repeated fields
//! - [`error_page`] - HTML error responses

pub mod error_page;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
