//! Ports (hexagonal boundaries) for the API Gateway.

pub mod outbound;

pub use outbound::{Record, Repository, SystemTimeSource, TimeSource};
