//! Receiver lookup and address helpers.

use crate::domain::{ApiError, ApiResult, Envelope};
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};
use shared_identifiers::{derive_username, random_address, seed_from_address_or_default};
use tracing::debug;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub blockchain_address: String,
}

#[derive(Debug, Serialize)]
pub struct ReceiverBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub data: ReceiverData,
}

/// `GET /receiver/find/:address`
///
/// Any address resolves; the username is derived from its last 8 hex digits,
/// so the same address always yields the same user.
pub async fn find(Path(address): Path<String>) -> Envelope<ReceiverBody> {
    let seed = seed_from_address_or_default(&address);
    let username = derive_username(seed);
    debug!(%address, %username, "receiver resolved");

    Envelope::ok(ReceiverBody {
        address: None,
        data: ReceiverData {
            username: Some(username),
            blockchain_address: address.clone(),
        },
    })
    .with_message("Address verified successfully")
    .with_address(address)
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressQuery {
    pub address: Option<String>,
}

/// `GET /vercel-receiver-find?address=`
///
/// Same answer as the path form; a missing or empty address is a 400.
pub async fn find_by_query(
    Query(query): Query<AddressQuery>,
) -> ApiResult<Envelope<ReceiverBody>> {
    match query.address.filter(|a| !a.trim().is_empty()) {
        Some(address) => Ok(find(Path(address)).await),
        None => Err(ApiError::bad_request("Address not found in request")),
    }
}

/// `GET /receiver/address`
pub async fn address() -> Envelope<ReceiverBody> {
    fresh("Address retrieved successfully", false)
}

/// `POST /receiver/generate`
pub async fn generate() -> Envelope<ReceiverBody> {
    fresh("New blockchain address generated", true)
}

fn fresh(message: &str, with_address: bool) -> Envelope<ReceiverBody> {
    let address = random_address();
    Envelope::ok(ReceiverBody {
        address: with_address.then(|| address.clone()),
        data: ReceiverData {
            username: None,
            blockchain_address: address.clone(),
        },
    })
    .with_message(message)
    .with_address(address)
}
