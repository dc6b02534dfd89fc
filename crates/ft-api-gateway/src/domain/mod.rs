//! Domain types for the API Gateway.
//!
//! Configuration, errors, stored records, the success envelope and the pure
//! response normalizer. Nothing in here touches the network.

pub mod config;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod normalizer;
pub mod records;
pub mod types;

// Re-exports for convenience
pub use config::{ConfigError, Environment, GatewayConfig, LimitsConfig, NormalizerConfig};
pub use envelope::Envelope;
pub use error::{ApiError, ApiResult, GatewayError, NormalizeError, RepositoryError};
pub use ids::RecordIdAllocator;
pub use normalizer::{is_blank, FieldNormalizer, NormalizeReport};
pub use records::{FileField, UserField};
pub use types::*;
