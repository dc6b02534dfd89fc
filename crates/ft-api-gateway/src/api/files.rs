//! File upload bookkeeping.
//!
//! Nothing is stored but the record. The IPFS hash, transaction hash and,
//! when the client gives none, the receiver address are all derived from the
//! file id, so they can be recomputed later.

use super::{body_or_default, file_seed, receiver_for};
use crate::domain::{
    ApiError, ApiResult, Envelope, FileField, FileRecord, ReceiverInfo, UploadRequest, CONFIRMATIONS,
    CONFIRMED, DEFAULT_FILE_SIZE,
};
use crate::middleware::AuthenticatedUser;
use crate::router::AppState;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use serde::Serialize;
use shared_identifiers::{derive_identifier, IdentifierKind};
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadBody {
    pub file: FileRecord,
    pub data: UploadData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    pub file: FileRecord,
    pub ipfs_hash: String,
    pub blockchain_transaction: String,
    pub receiver: ReceiverInfo,
}

#[derive(Debug, Serialize)]
pub struct FilesBody {
    pub files: Vec<FileRecord>,
}

/// File record with its chain status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDetail {
    #[serde(flatten)]
    pub file: FileRecord,
    pub blockchain_status: String,
}

#[derive(Debug, Serialize)]
pub struct DetailBody {
    pub file: FileDetail,
}

/// `POST /files/upload`
pub async fn upload(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    body: Option<Json<UploadRequest>>,
) -> ApiResult<Envelope<UploadBody>> {
    let req = body_or_default(body);

    let id = state.ids.next_id();
    let seed = file_seed(&id, &state.ids);
    let receiver_address = req
        .receiver_address
        .unwrap_or_else(|| derive_identifier(IdentifierKind::Address, seed));

    let record = FileRecord {
        name: req
            .filename
            .unwrap_or_else(|| format!("sample-file-{}.txt", id)),
        size: req.size.unwrap_or(DEFAULT_FILE_SIZE),
        sender_id: user.id.clone(),
        sender_address: user.blockchain_address.clone(),
        receiver_id: receiver_address.clone(),
        receiver: receiver_for(&receiver_address),
        receiver_address,
        uploaded_at: Utc::now(),
        ipfs_hash: derive_identifier(IdentifierKind::ContentHash, seed),
        blockchain_transaction: derive_identifier(IdentifierKind::TxHash, seed),
        status: CONFIRMED.to_string(),
        confirmations: CONFIRMATIONS,
        id,
    };

    let record = state.files.add(record).await.map_err(|e| state.internal(e))?;
    info!(
        file_id = %record.id,
        sender = %record.sender_id,
        receiver = %record.receiver_address,
        "file uploaded"
    );

    let data = UploadData {
        file: record.clone(),
        ipfs_hash: record.ipfs_hash.clone(),
        blockchain_transaction: record.blockchain_transaction.clone(),
        receiver: record.receiver.clone(),
    };
    Ok(Envelope::created(UploadBody { file: record, data })
        .with_message("File uploaded successfully")
        .with_address(user.blockchain_address))
}

/// `GET /files/sent`
pub async fn sent(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> ApiResult<Envelope<FilesBody>> {
    let files = state
        .files
        .find_by_field(FileField::SenderId, &user.id)
        .await
        .map_err(|e| state.internal(e))?;
    Ok(Envelope::ok(FilesBody { files }).with_address(user.blockchain_address))
}

/// `GET /files/received`
pub async fn received(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> ApiResult<Envelope<FilesBody>> {
    let files = state
        .files
        .find_by_field(FileField::ReceiverAddress, &user.blockchain_address)
        .await
        .map_err(|e| state.internal(e))?;
    Ok(Envelope::ok(FilesBody { files }).with_address(user.blockchain_address))
}

/// `GET /files/detail/:fileId`
pub async fn detail(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(file_id): Path<String>,
) -> ApiResult<Envelope<DetailBody>> {
    let mut file = state
        .files
        .find_by_id(&file_id)
        .await
        .map_err(|e| state.internal(e))?
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    let seed = file_seed(&file.id, &state.ids);
    if file.receiver_address.is_empty() {
        file.receiver_address = derive_identifier(IdentifierKind::Address, seed);
    }
    file.ipfs_hash = derive_identifier(IdentifierKind::ContentHash, seed);
    file.blockchain_transaction = derive_identifier(IdentifierKind::TxHash, seed);
    file.receiver = receiver_for(&file.receiver_address);
    file.confirmations = CONFIRMATIONS;

    Ok(Envelope::ok(DetailBody {
        file: FileDetail {
            file,
            blockchain_status: CONFIRMED.to_string(),
        },
    })
    .with_address(user.blockchain_address))
}
