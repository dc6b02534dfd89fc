//! In-process repository.
//!
//! Records live in insertion order behind a `parking_lot::RwLock` and are
//! never updated or removed. Lookups are linear scans, which is fine for a
//! demo-sized data set.

use crate::domain::error::RepositoryError;
use crate::ports::{Record, Repository};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// Append-only repository held in memory for the life of the process.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    #[instrument(skip_all, fields(id = record.id()))]
    async fn add(&self, record: T) -> Result<T, RepositoryError> {
        // Check and push under one write lock so concurrent adds cannot race
        let mut records = self.records.write();

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(RepositoryError::Conflict {
                field: "id".to_string(),
                value: record.id().to_string(),
            });
        }

        for &field in T::unique_fields() {
            if let Some(value) = record.field(field) {
                if records.iter().any(|r| r.field_matches(field, value)) {
                    debug!(?field, "unique field collision");
                    return Err(RepositoryError::Conflict {
                        field: format!("{:?}", field).to_lowercase(),
                        value: value.to_string(),
                    });
                }
            }
        }

        records.push(record.clone());
        debug!(total = records.len(), "record added");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        Ok(self.records.read().iter().find(|r| r.id() == id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_field(&self, field: T::Field, value: &str) -> Result<Vec<T>, RepositoryError> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|r| r.field_matches(field, value))
            .cloned()
            .collect())
    }
}
