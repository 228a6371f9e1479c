//! Data transfer objects for the JSON endpoints.

pub mod health;
