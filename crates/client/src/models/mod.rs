//! Data models for Trellix API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod alerts;
pub mod token;

pub use alerts::{AlertCollection, AlertQuery};
pub use token::TokenResponse;
