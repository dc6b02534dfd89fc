//! FT API Gateway - JSON REST interface for the blockchain file transfer demo.
//!
//! There is no chain behind this gateway. Addresses, transaction hashes and
//! IPFS hashes are pseudo identifiers from `shared-identifiers`, users and
//! files live in process memory, and every JSON object response is
//! guaranteed to carry a `blockchainAddress`.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    FT API GATEWAY                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  ApiPrefix → CORS → Tracing → Normalize → Limit → Panic    │
//! │                          │                                 │
//! │  ┌───────────────────────┴──────────────────────────┐      │
//! │  │                    Router                         │      │
//! │  │  public: /auth /user /receiver /blockchain ...    │      │
//! │  │  protected (AuthLayer): /files /ipfs ...          │      │
//! │  └───────────────────────┬──────────────────────────┘      │
//! │                          │                                 │
//! │  ┌───────────────────────┴──────────────────────────┐      │
//! │  │       Repository<User>, Repository<FileRecord>    │      │
//! │  │              (InMemoryRepository)                 │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use ft_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let mut service = ApiGatewayService::new(GatewayConfig::default()).await?;
//! service.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod api;
pub mod domain;
pub mod middleware;
pub mod ports;
pub mod router;
pub mod service;

// Re-exports
pub use adapters::InMemoryRepository;
pub use domain::{
    ApiError, ApiResult, ConfigError, Environment, Envelope, FieldNormalizer, FileRecord,
    GatewayConfig, GatewayError, PublicUser, RepositoryError, User,
};
pub use ports::{Record, Repository, TimeSource};
pub use router::{build_router, AppState, ENDPOINTS};
pub use service::{ApiGatewayService, GatewayApp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
