//! API Gateway service - main entry point.
//!
//! Owns the configuration and handler state, assembles the middleware stack
//! around the router and runs the HTTP server.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::domain::{FieldNormalizer, User};
use crate::middleware::{
    api_prefix::ApiPrefixService, create_cors_layer, create_panic_layer, limit::RequestLimitService,
    normalize::NormalizeService, tracing::TracingService, ApiPrefixLayer, NormalizeConfig,
    NormalizeLayer, RequestLimitLayer, TracingLayer,
};
use crate::router::{build_router, AppState};
use axum::{Router, ServiceExt as _};
use shared_identifiers::random_address;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::cors::Cors;
use tracing::{error, info};

/// Id of the pre-registered demo account
pub const DEMO_USER_ID: &str = "1";
/// Demo account username
pub const DEMO_USERNAME: &str = "testuser";
/// Demo account email
pub const DEMO_EMAIL: &str = "test@example.com";
/// Demo account password
pub const DEMO_PASSWORD: &str = "password123";

/// The fully layered gateway, ready to serve or to drive in tests
pub type GatewayApp = ApiPrefixService<
    Cors<TracingService<NormalizeService<RequestLimitService<Router>>>>,
>;

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    state: AppState,
    shutdown_tx: Option<oneshot::Sender<()>>,
    shutdown_rx: Option<oneshot::Receiver<()>>,
}

impl ApiGatewayService {
    /// Create a new API Gateway service with in-memory storage
    pub async fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        let state = AppState::in_memory(config.clone());
        Self::with_state(config, state).await
    }

    /// Create a service around existing state (custom repositories)
    pub async fn with_state(config: GatewayConfig, state: AppState) -> Result<Self, GatewayError> {
        config.validate()?;

        if config.runtime.seed_demo_user {
            seed_demo_user(&state).await?;
        }

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        Ok(Self {
            config,
            state,
            shutdown_tx: Some(shutdown_tx),
            shutdown_rx: Some(shutdown_rx),
        })
    }

    /// Handler state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The router wrapped in the full middleware stack
    pub fn app(&self) -> GatewayApp {
        let expose = self.config.expose_error_details();

        let router = build_router(self.state.clone()).layer(create_panic_layer(expose));
        // A zero bound makes the normalizer pass every body through
        let normalize_limit = if self.config.normalizer.enabled {
            self.config.limits.max_normalize_size
        } else {
            0
        };

        ServiceBuilder::new()
            .layer(ApiPrefixLayer::new(self.config.routing.strip_api_prefix))
            .layer(create_cors_layer(&self.config.cors))
            .layer(TracingLayer::new())
            .layer(NormalizeLayer::new(
                FieldNormalizer::from_config(&self.config.normalizer),
                NormalizeConfig {
                    max_body_size: normalize_limit,
                    expose_errors: expose,
                },
            ))
            .layer(RequestLimitLayer::new(self.config.limits.clone()))
            .service(router)
    }

    /// Bind the HTTP listener and serve until shutdown or a server error
    pub async fn start(&mut self) -> Result<(), GatewayError> {
        info!("Starting API Gateway...");

        let shutdown_rx = self.shutdown_rx.take().ok_or(GatewayError::AlreadyStarted)?;

        let addr = self.config.http_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| GatewayError::Bind { addr, source })?;

        info!(
            addr = %addr,
            environment = ?self.config.runtime.environment,
            "HTTP server listening"
        );

        let result = axum::serve(listener, self.app().into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
                info!("Received shutdown signal");
            })
            .await;

        if let Err(e) = result {
            error!(error = %e, "HTTP server error");
            return Err(GatewayError::Server(e));
        }

        info!("API Gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Sender that stops a running [`start`](Self::start) from another task.
    /// Take it before calling `start`.
    pub fn shutdown_handle(&mut self) -> Option<oneshot::Sender<()>> {
        self.shutdown_tx.take()
    }
}

async fn seed_demo_user(state: &AppState) -> Result<(), GatewayError> {
    if state.users.find_by_id(DEMO_USER_ID).await?.is_some() {
        return Ok(());
    }

    let user = state
        .users
        .add(User {
            id: DEMO_USER_ID.to_string(),
            username: DEMO_USERNAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
            blockchain_address: random_address(),
        })
        .await?;

    info!(user_id = %user.id, email = %user.email, "seeded demo user");
    Ok(())
}
