//! Diagnostic endpoints that echo an address at several nesting levels.

use super::wallet::AddressPair;
use crate::domain::{Envelope, Environment};
use crate::router::AppState;
use crate::VERSION;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use shared_identifiers::random_address;
use std::collections::BTreeMap;
use tracing::debug;

/// Address used by `GET /blockchain-static`
pub const STATIC_ADDRESS: &str = "0xabcdef1234567890abcdef1234567890abcdef12";

#[derive(Debug, Serialize)]
pub struct RequestInfo {
    pub path: String,
    pub method: String,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugBody {
    pub timestamp: DateTime<Utc>,
    pub request_info: RequestInfo,
    pub environment: Environment,
    pub api_version: &'static str,
    pub address_test: AddressPair,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDebugBody {
    pub address_data: AddressPair,
    pub address_direct_property: String,
    pub blockchain_address_direct_property: String,
    pub has_blockchain_address_property: bool,
}

/// Body with the address repeated at arbitrary nesting levels
#[derive(Debug, Serialize)]
pub struct NestedBody {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

/// `GET /debug`
pub async fn debug_info(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Envelope<DebugBody> {
    debug!(path = %uri.path(), "debug endpoint");
    // Values that are not visible ASCII are left out
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    Envelope::ok(DebugBody {
        timestamp: Utc::now(),
        request_info: RequestInfo {
            path: uri.path().to_string(),
            method: method.to_string(),
            headers,
        },
        environment: state.config.runtime.environment,
        api_version: VERSION,
        address_test: AddressPair::new(&random_address()),
    })
    .with_message("API is working properly")
}

/// `GET /debug/address`
pub async fn debug_address() -> Envelope<AddressDebugBody> {
    let pair = AddressPair::new(&random_address());
    Envelope::ok(AddressDebugBody {
        address_direct_property: pair.address.clone(),
        blockchain_address_direct_property: pair.blockchain_address.clone(),
        has_blockchain_address_property: true,
        address_data: pair,
    })
    .with_message("Address debug information")
}

/// `GET /diagnostic/blockchain-address`
pub async fn blockchain_address() -> Envelope<NestedBody> {
    let address = random_address();
    nested(
        &address,
        json!({
            "timestamp": Utc::now(),
            "data": {"blockchainAddress": address, "value": "test"},
            "user": {"blockchainAddress": address, "id": "test"},
            "test": {"nestedData": {"blockchainAddress": address}},
        }),
    )
    .with_message("Blockchain address diagnostic information")
}

/// `GET /check-blockchain-address`
pub async fn check_blockchain_address() -> Envelope<NestedBody> {
    let address = random_address();
    nested(&address, levels(&address))
        .with_message("Check if you can access blockchainAddress from this response")
}

/// `GET /direct-test`
pub async fn direct_test() -> Envelope<NestedBody> {
    let address = random_address();
    let mut body = levels(&address);
    body["info"] = json!("Testing to see if this resolves blockchainAddress issues");
    body["timestamp"] = json!(Utc::now());
    nested(&address, body).with_message("This is a direct response from the gateway")
}

/// `GET /blockchain-static`
pub async fn blockchain_static() -> Envelope<NestedBody> {
    let entry = json!({"blockchainAddress": STATIC_ADDRESS});
    nested(
        STATIC_ADDRESS,
        json!({
            "timestamp": Utc::now(),
            "address": STATIC_ADDRESS,
            "data": entry,
            "user": entry,
            "nested": {"blockchainAddress": STATIC_ADDRESS, "deeper": entry},
            "items": [entry, entry],
        }),
    )
}

/// `GET /blockchain-vercel-test`
pub async fn deployment_test() -> Envelope<NestedBody> {
    let address = random_address();
    nested(&address, json!({"timestamp": Utc::now().timestamp_millis()}))
        .with_message("Deployment test")
}

/// `address`, `user`, `data` and `nested.level1.level2`, each carrying the address
fn levels(address: &str) -> Value {
    let entry = json!({"blockchainAddress": address});
    json!({
        "address": address,
        "user": entry,
        "data": entry,
        "nested": {"level1": {"level2": entry}},
    })
}

fn nested(address: &str, body: Value) -> Envelope<NestedBody> {
    let fields = match body {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    Envelope::ok(NestedBody { fields }).with_address(address)
}
