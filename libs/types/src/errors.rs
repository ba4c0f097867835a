//! Error types for the exchange engine
//!
//! The engine never errors across its public boundary: every failure path
//! resolves to an empty result. This taxonomy exists for the internal
//! fallible paths and for the out-of-band log report of swallowed causes.

use crate::ids::SetId;
use thiserror::Error;

/// Failures surfaced by the storage collaborator's read handles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("store returned corrupt data: {message}")]
    Corrupt { message: String },
}

/// Engine-internal errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("set not found: {set_id}")]
    SetNotFound { set_id: SetId },

    #[error("inconsistent reference: {message}")]
    InconsistentReference { message: String },
}
