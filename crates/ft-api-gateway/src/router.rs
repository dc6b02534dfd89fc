//! Route table and shared handler state.

use crate::adapters::InMemoryRepository;
use crate::api::{auth, blockchain, diagnostics, files, receiver, status, users, wallet};
use crate::domain::{ApiError, FileRecord, GatewayConfig, RecordIdAllocator, RepositoryError, User};
use crate::middleware::AuthLayer;
use crate::ports::Repository;
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;

/// Endpoints listed by the 404 responder
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /status",
    "POST /auth/register",
    "POST /auth/login",
    "POST /files/upload",
    "GET /files/sent",
    "GET /files/received",
    "GET /files/detail/:fileId",
    "GET /user",
    "GET /user/info",
    "GET /user/:id",
    "GET /user/address",
    "GET /user/generateAddress",
    "GET /user/blockchain",
    "POST /user/blockchain",
    "GET /address",
    "GET /generateAddress",
    "GET /receiver/find/:address",
    "GET /receiver/address",
    "POST /receiver/generate",
    "GET /vercel-receiver-find?address=",
    "POST /wallet/connect",
    "GET /blockchain",
    "POST /blockchain/connect",
    "POST /blockchain/auth",
    "POST /blockchain/token",
    "GET /blockchain/data",
    "POST /blockchain/verify",
    "GET /blockchain/status",
    "GET /blockchain/address",
    "POST /blockchain/transaction",
    "POST /blockchain/verify-ownership",
    "GET /blockchain/transactions/:fileId",
    "GET /ipfs/detail/:fileId",
    "GET /debug",
    "GET /debug/address",
    "GET /diagnostic/blockchain-address",
    "GET /check-blockchain-address",
    "GET /blockchain-static",
    "GET /blockchain-vercel-test",
    "GET /direct-test",
];

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn Repository<User>>,
    pub files: Arc<dyn Repository<FileRecord>>,
    pub ids: Arc<RecordIdAllocator>,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    /// State backed by fresh in-memory repositories
    pub fn in_memory(config: GatewayConfig) -> Self {
        Self {
            users: Arc::new(InMemoryRepository::<User>::new()),
            files: Arc::new(InMemoryRepository::<FileRecord>::new()),
            ids: Arc::new(RecordIdAllocator::default()),
            config: Arc::new(config),
        }
    }

    /// Map a storage failure to a 500
    pub fn internal(&self, err: RepositoryError) -> ApiError {
        ApiError::internal(err.to_string(), self.config.expose_error_details())
    }
}

/// Build the application router (routes, auth and fallback; no global middleware).
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/files/upload", endpoint(post(files::upload)))
        .route("/files/sent", endpoint(get(files::sent)))
        .route("/files/received", endpoint(get(files::received)))
        .route("/files/detail/:file_id", endpoint(get(files::detail)))
        .route("/user", endpoint(get(users::profile)))
        .route("/user/info", endpoint(get(users::info)))
        .route("/blockchain/transaction", endpoint(post(blockchain::transaction)))
        .route("/blockchain/verify-ownership", endpoint(post(blockchain::verify_ownership)))
        .route("/blockchain/transactions/:file_id", endpoint(get(blockchain::transactions)))
        .route("/ipfs/detail/:file_id", endpoint(get(blockchain::ipfs_detail)))
        .route_layer(AuthLayer::new(Arc::clone(&state.users)));

    let public = Router::new()
        .route("/", endpoint(get(status::root)))
        .route("/health", endpoint(get(status::health)))
        .route("/status", endpoint(get(status::status)))
        .route("/auth/register", endpoint(post(auth::register)))
        .route("/auth/login", endpoint(post(auth::login)))
        .route("/user/address", endpoint(get(users::generate_address)))
        .route("/user/generateAddress", endpoint(get(users::generate_address)))
        .route("/user/blockchain", endpoint(get(wallet::user_chain).post(wallet::user_chain)))
        .route("/user/:id", endpoint(get(users::by_id)))
        .route("/address", endpoint(get(users::generate_address)))
        .route("/generateAddress", endpoint(get(users::generate_address)))
        .route("/receiver/find/:address", endpoint(get(receiver::find)))
        .route("/receiver/address", endpoint(get(receiver::address)))
        .route("/receiver/generate", endpoint(post(receiver::generate)))
        .route("/vercel-receiver-find", endpoint(get(receiver::find_by_query)))
        .route("/wallet/connect", endpoint(post(wallet::connect)))
        .route("/blockchain", endpoint(get(wallet::chain_info)))
        .route("/blockchain/connect", endpoint(post(wallet::chain_connect)))
        .route("/blockchain/auth", endpoint(post(wallet::chain_auth)))
        .route("/blockchain/token", endpoint(post(wallet::token)))
        .route("/blockchain/data", endpoint(get(wallet::chain_data)))
        .route("/blockchain/verify", endpoint(post(blockchain::verify)))
        .route("/blockchain/status", endpoint(get(blockchain::status)))
        .route("/blockchain/address", endpoint(get(users::generate_address)))
        .route("/debug", endpoint(get(diagnostics::debug_info)))
        .route("/debug/address", endpoint(get(diagnostics::debug_address)))
        .route("/diagnostic/blockchain-address", endpoint(get(diagnostics::blockchain_address)))
        .route("/check-blockchain-address", endpoint(get(diagnostics::check_blockchain_address)))
        .route("/blockchain-static", endpoint(get(diagnostics::blockchain_static)))
        .route("/blockchain-vercel-test", endpoint(get(diagnostics::deployment_test)))
        .route("/direct-test", endpoint(get(diagnostics::direct_test)));

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(status::not_found)
        .with_state(state)
}

/// A known path with an unsupported method answers like an unknown path.
fn endpoint(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(status::not_found)
}
