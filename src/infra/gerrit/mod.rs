//! Gerrit REST API client.
//!
//! Provides GerritClient for the change endpoints, handling Gerrit's
//! XSSI guard on every JSON response.

mod client;
pub(crate) mod error;
#[cfg(test)]
mod mock;

pub use client::{GerritClient, change_path};
pub use error::GerritError;
#[cfg(test)]
pub use mock::GerritMockServer;
