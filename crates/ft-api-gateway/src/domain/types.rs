//! Core records and request bodies.
//!
//! Request bodies are deliberately lenient: every field is optional and blank
//! strings count as absent, so handlers decide what "missing" means.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Prefix of every bearer token handed out by the gateway.
pub const TOKEN_PREFIX: &str = "auth-token-";

/// Status reported for every mock transaction.
pub const CONFIRMED: &str = "Confirmed";

/// Fixed confirmation count of a "mined" transaction.
pub const CONFIRMATIONS: u32 = 24;

/// Size reported when an upload does not say.
pub const DEFAULT_FILE_SIZE: u64 = 1024;

/// Token for a user id.
pub fn token_for(user_id: &str) -> String {
    format!("{}{}", TOKEN_PREFIX, user_id)
}

/// Registered account. The password is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub blockchain_address: String,
}

impl User {
    /// Fields safe to return to a client
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            blockchain_address: self.blockchain_address.clone(),
        }
    }
}

/// User as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub blockchain_address: String,
}

/// Receiver summary attached to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverInfo {
    pub address: String,
    pub username: String,
}

/// Bookkeeping for an "uploaded" file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub sender_id: String,
    pub sender_address: String,
    pub receiver_id: String,
    pub receiver_address: String,
    pub uploaded_at: DateTime<Utc>,
    pub ipfs_hash: String,
    pub blockchain_transaction: String,
    pub status: String,
    pub confirmations: u32,
    pub receiver: ReceiverInfo,
}

/// `POST /auth/register`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
}

/// `POST /auth/login`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
}

/// `POST /files/upload`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub receiver_address: Option<String>,
}

/// `POST /blockchain/verify`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyAddressRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
}

/// `POST /blockchain/transaction`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub receiver_address: Option<String>,
}

/// `POST /blockchain/verify-ownership`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_id: Option<String>,
}

/// Accepts a string or number; null, blank strings and other types become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts a positive integer or a numeric string; anything else becomes `None`.
fn lenient_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let size = match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(size.filter(|s| *s > 0))
}
