//! Wallet connection mocks.
//!
//! Each call makes up a fresh address; nothing is stored.

use super::blockchain::NETWORK;
use crate::domain::Envelope;
use crate::router::AppState;
use axum::extract::State;
use serde::Serialize;
use shared_identifiers::random_address;
use tracing::debug;

const BALANCE: &str = "0.5 ETH";
const GAS_PRICE: &str = "20 Gwei";

/// `{address, blockchainAddress}` pair nested in several responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPair {
    pub address: String,
    pub blockchain_address: String,
}

impl AddressPair {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            blockchain_address: address.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConnectBody {
    pub data: AddressPair,
}

#[derive(Debug, Serialize)]
pub struct TokenBody {
    pub token: String,
    pub address: String,
    pub data: AddressPair,
}

#[derive(Debug, Serialize)]
pub struct ChainConnectBody {
    pub connected: bool,
    pub address: String,
    pub network: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChainAuthBody {
    pub authenticated: bool,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct UserChainBody {
    pub address: String,
    pub network: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfoBody {
    pub address: String,
    pub network: &'static str,
    pub is_connected: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDataBody {
    pub user: AddressPair,
    pub network: &'static str,
    pub is_connected: bool,
    pub balance: &'static str,
    pub gas_price: &'static str,
}

/// `POST /wallet/connect`
pub async fn connect() -> Envelope<ConnectBody> {
    let address = random_address();
    debug!(%address, "wallet connected");
    Envelope::ok(ConnectBody {
        data: AddressPair::new(&address),
    })
    .with_address(address)
}

/// `POST /blockchain/token`
pub async fn token(State(state): State<AppState>) -> Envelope<TokenBody> {
    let address = random_address();
    Envelope::ok(TokenBody {
        token: format!("blockchain-token-{}", state.ids.now_millis()),
        address: address.clone(),
        data: AddressPair::new(&address),
    })
    .with_address(address)
}

/// `POST /blockchain/connect`
pub async fn chain_connect() -> Envelope<ChainConnectBody> {
    let address = random_address();
    Envelope::ok(ChainConnectBody {
        connected: true,
        address: address.clone(),
        network: NETWORK,
    })
    .with_address(address)
}

/// `POST /blockchain/auth`
pub async fn chain_auth() -> Envelope<ChainAuthBody> {
    let address = random_address();
    Envelope::ok(ChainAuthBody {
        authenticated: true,
        address: address.clone(),
    })
    .with_address(address)
}

/// `GET` and `POST /user/blockchain`
pub async fn user_chain() -> Envelope<UserChainBody> {
    let address = random_address();
    Envelope::ok(UserChainBody {
        address: address.clone(),
        network: NETWORK,
        status: "connected",
    })
    .with_address(address)
}

/// `GET /blockchain`
pub async fn chain_info() -> Envelope<ChainInfoBody> {
    let address = random_address();
    Envelope::ok(ChainInfoBody {
        address: address.clone(),
        network: NETWORK,
        is_connected: true,
    })
    .with_address(address)
}

/// `GET /blockchain/data`
///
/// No top-level address is set; the normalizer copies one into `user`.
pub async fn chain_data() -> Envelope<ChainDataBody> {
    Envelope::ok(ChainDataBody {
        user: AddressPair::new(&random_address()),
        network: NETWORK,
        is_connected: true,
        balance: BALANCE,
        gas_price: GAS_PRICE,
    })
}
