//! REST Entity Client
//!
//! HTTP bindings to the gateway's entity resources. The generic CRUD
//! operations live in `crud`; this module holds the shared plumbing.

mod crud;

pub use crud::{create, delete, get, list, partial_update, update};

use thiserror::Error;

/// Error raised by any entity request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The remote answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// An update was dispatched for an entity without an identity.
    #[error("entity has no id")]
    MissingId,
}

/// Pagination and sort parameters for collection requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}
