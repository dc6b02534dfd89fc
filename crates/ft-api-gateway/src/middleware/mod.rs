//! Tower middleware for the API Gateway.
//!
//! Order, outermost first:
//! 1. `api_prefix` - rewrite `/api/...` paths
//! 2. `cors` - CORS headers, `OPTIONS` short-circuit
//! 3. `tracing` - request spans
//! 4. `normalize` - outbound response normalization, so 413s are covered too
//! 5. `limit` - request body size limit
//! 6. `panic` - handler panic recovery
//!
//! `auth` is applied per route group, not globally.

pub mod api_prefix;
pub mod auth;
pub mod cors;
pub mod limit;
pub mod normalize;
pub mod panic;
pub mod tracing;

pub use api_prefix::{strip_api_prefix, ApiPrefixLayer};
pub use auth::{parse_token, AuthLayer, AuthenticatedUser, TokenError};
pub use cors::create_cors_layer;
pub use limit::RequestLimitLayer;
pub use normalize::{NormalizeConfig, NormalizeLayer};
pub use panic::{create_panic_layer, PanicResponder};
pub use self::tracing::TracingLayer;
