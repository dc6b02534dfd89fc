//! Outbound ports for the API Gateway.

use crate::domain::error::RepositoryError;
use async_trait::async_trait;

/// Time source trait for testability
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// System time implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            // Clock before Unix epoch
            .unwrap_or(0)
    }
}

/// A storable record with an id and a set of queryable fields.
pub trait Record: Clone + Send + Sync + 'static {
    /// Queryable field names
    type Field: Copy + Eq + std::fmt::Debug + Send + Sync + 'static;

    fn id(&self) -> &str;

    /// Value of `field`, if the record carries one
    fn field(&self, field: Self::Field) -> Option<&str>;

    /// Whether `field` matches `value`. Exact comparison unless overridden.
    fn field_matches(&self, field: Self::Field, value: &str) -> bool {
        self.field(field) == Some(value)
    }

    /// Fields whose values must be unique across the repository
    fn unique_fields() -> &'static [Self::Field] {
        &[]
    }
}

/// Append-only record storage.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Append a record; fails on a unique field collision
    async fn add(&self, record: T) -> Result<T, RepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError>;

    /// All records whose `field` equals `value`, in insertion order
    async fn find_by_field(&self, field: T::Field, value: &str) -> Result<Vec<T>, RepositoryError>;
}
