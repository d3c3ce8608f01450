use thiserror::Error;

/// Errors returned by the in-memory service
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The (simulated) remote call failed
    #[error("service unavailable while trying to {0}")]
    Unavailable(&'static str),

    /// No item with the given id exists on the service
    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },
}
