//! Thin per-resource service functions.
//!
//! Each call issues exactly one repository operation. No validation,
//! filtering or pagination happens here; repository errors propagate to the
//! caller unchanged.

use std::sync::Arc;

use crate::domain::ports::{RecordRepository, RecordRepositoryError};
use crate::domain::resource::Resource;

/// Service functions for one resource.
pub struct RecordService<E: Resource> {
    repo: Arc<dyn RecordRepository<E>>,
}

impl<E: Resource> Clone for RecordService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Resource> RecordService<E> {
    /// Create a service over `repo`.
    pub fn new(repo: Arc<dyn RecordRepository<E>>) -> Self {
        Self { repo }
    }

    /// Every row in canonical order.
    pub async fn list(&self) -> Result<Vec<E>, RecordRepositoryError> {
        self.repo.list().await
    }

    /// The row with `id`, if present.
    pub async fn find(&self, id: i32) -> Result<Option<E>, RecordRepositoryError> {
        self.repo.find(id).await
    }

    /// Insert `draft` and return the stored row.
    pub async fn create(&self, draft: E::Draft) -> Result<E, RecordRepositoryError> {
        self.repo.insert(draft).await
    }

    /// Overwrite row `id` with `draft`.
    pub async fn replace(&self, id: i32, draft: E::Draft) -> Result<Option<E>, RecordRepositoryError> {
        self.repo.replace(id, draft).await
    }
}
