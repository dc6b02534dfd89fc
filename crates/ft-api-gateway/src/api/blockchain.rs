//! Mock chain and IPFS endpoints.
//!
//! There is no chain. Values for a file are derived from its id seed and
//! are stable across calls; everything else is random.

use super::{body_or_default, file_seed};
use crate::domain::{
    ApiError, ApiResult, Envelope, OwnershipRequest, TransactionRequest, VerifyAddressRequest,
    CONFIRMATIONS, CONFIRMED,
};
use crate::middleware::AuthenticatedUser;
use crate::router::AppState;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use shared_identifiers::{derive_identifier, is_address_shaped, random_identifier, IdentifierKind};
use tracing::{debug, info};

/// Network name reported by the status endpoint.
pub const NETWORK: &str = "Ethereum Testnet";

const BASE_BLOCK: u64 = 12_345_000;
const BASE_GAS: u64 = 21_000;
const GAS_STEP: u64 = 5_000;
const CONFIRMATION_STEP: u32 = 4;
const HOURS_BETWEEN_TRANSACTIONS: i64 = 2;
const TRANSACTION_KINDS: [&str; 3] = ["IPFS Storage", "Access Grant", "Verification"];

const IPFS_GATEWAYS: [&str; 3] = [
    "https://ipfs.io/ipfs/",
    "https://gateway.ipfs.io/ipfs/",
    "https://cloudflare-ipfs.com/ipfs/",
];

#[derive(Debug, Serialize)]
pub struct VerifyBody {
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub connected: bool,
    pub network: &'static str,
    pub block: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct TransactionBody {
    pub transaction: Transaction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipBody {
    pub is_owner: bool,
    pub verified: bool,
}

/// One entry of a file's transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub hash: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub block: u64,
    pub gas: u64,
    pub confirmations: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryBody {
    pub file_id: String,
    pub transactions: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpfsBody {
    pub file_id: String,
    pub ipfs_hash: String,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub pinned: bool,
    pub gateways: Vec<String>,
}

/// Deterministic history for a file seed: two or three entries, newest first.
pub fn transaction_history(seed: u64, now: DateTime<Utc>) -> Vec<HistoryEntry> {
    let count = (seed % 2) as usize + 2;
    (0..count)
        .map(|i| {
            let step = i as u64;
            HistoryEntry {
                hash: derive_identifier(IdentifierKind::TxHash, seed.wrapping_add(step)),
                kind: TRANSACTION_KINDS[i].to_string(),
                status: CONFIRMED.to_string(),
                timestamp: now - Duration::hours(HOURS_BETWEEN_TRANSACTIONS * i as i64),
                block: BASE_BLOCK.saturating_add(seed).saturating_add(step),
                gas: BASE_GAS + GAS_STEP * step,
                confirmations: CONFIRMATIONS - CONFIRMATION_STEP * i as u32,
            }
        })
        .collect()
}

/// Size reported for a pinned file: 1 KiB to 1 MiB.
pub fn ipfs_size(seed: u64) -> u64 {
    1024 * (1 + seed % 1024)
}

/// `POST /blockchain/verify`
pub async fn verify(body: Option<Json<VerifyAddressRequest>>) -> Envelope<VerifyBody> {
    let req = body_or_default(body);
    let valid = req.address.as_deref().is_some_and(is_address_shaped);
    Envelope::ok(VerifyBody { valid })
}

/// `GET /blockchain/status`
pub async fn status() -> Envelope<StatusBody> {
    Envelope::ok(StatusBody {
        connected: true,
        network: NETWORK,
        block: rand::thread_rng().gen_range(0..10_000_000),
    })
}

/// `POST /blockchain/transaction`
pub async fn transaction(
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    body: Option<Json<TransactionRequest>>,
) -> Envelope<TransactionBody> {
    let req = body_or_default(body);
    let transaction = Transaction {
        hash: random_identifier(IdentifierKind::TxHash),
        file_id: req.file_id,
        receiver_address: req.receiver_address,
        timestamp: Utc::now(),
    };
    info!(user_id = %user.id, hash = %transaction.hash, "transaction created");

    Envelope::ok(TransactionBody { transaction })
        .with_message("Transaction created successfully")
        .with_address(user.blockchain_address)
}

/// `POST /blockchain/verify-ownership`
pub async fn verify_ownership(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    body: Option<Json<OwnershipRequest>>,
) -> ApiResult<Envelope<OwnershipBody>> {
    let Some(file_id) = body_or_default(body).file_id else {
        return Err(ApiError::bad_request("Please provide fileId"));
    };

    let file = state
        .files
        .find_by_id(&file_id)
        .await
        .map_err(|e| state.internal(e))?
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    let is_owner = file.sender_id == user.id;
    debug!(%file_id, user_id = %user.id, is_owner, "ownership checked");
    Ok(Envelope::ok(OwnershipBody {
        is_owner,
        verified: true,
    })
    .with_address(user.blockchain_address))
}

/// `GET /blockchain/transactions/:fileId`
pub async fn transactions(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(file_id): Path<String>,
) -> Envelope<HistoryBody> {
    let seed = file_seed(&file_id, &state.ids);
    Envelope::ok(HistoryBody {
        transactions: transaction_history(seed, Utc::now()),
        file_id,
    })
    .with_address(user.blockchain_address)
}

/// `GET /ipfs/detail/:fileId`
pub async fn ipfs_detail(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(file_id): Path<String>,
) -> Envelope<IpfsBody> {
    let seed = file_seed(&file_id, &state.ids);
    let ipfs_hash = derive_identifier(IdentifierKind::ContentHash, seed);
    let gateways = IPFS_GATEWAYS
        .iter()
        .map(|base| format!("{}{}", base, ipfs_hash))
        .collect();

    Envelope::ok(IpfsBody {
        file_id,
        size: ipfs_size(seed),
        created: Utc::now(),
        pinned: true,
        gateways,
        ipfs_hash,
    })
    .with_address(user.blockchain_address)
}
