//! HTTP handlers, grouped by route prefix.
//!
//! Handlers return [`Envelope`](crate::domain::Envelope) on success and
//! [`ApiError`](crate::domain::ApiError) on failure. Neither has to set
//! `blockchainAddress`; the normalizer fills whatever is left blank.

pub mod auth;
pub mod blockchain;
pub mod diagnostics;
pub mod files;
pub mod receiver;
pub mod status;
pub mod users;
pub mod wallet;

use crate::domain::{ReceiverInfo, RecordIdAllocator};
use axum::Json;
use shared_identifiers::{derive_username, seed_from_address_or_default, seed_from_record_id};

/// Request body, or defaults when it is absent or not valid JSON.
pub(crate) fn body_or_default<T: Default>(body: Option<Json<T>>) -> T {
    body.map(|Json(inner)| inner).unwrap_or_default()
}

/// Seed for a file id, or the current time when it has none.
pub(crate) fn file_seed(file_id: &str, ids: &RecordIdAllocator) -> u64 {
    seed_from_record_id(file_id).unwrap_or_else(|| ids.now_millis())
}

/// Receiver summary with a username derived from the address.
pub(crate) fn receiver_for(address: &str) -> ReceiverInfo {
    ReceiverInfo {
        address: address.to_string(),
        username: derive_username(seed_from_address_or_default(address)),
    }
}
