//! Port for single-table record persistence.
//!
//! One repository serves one [`Resource`]. Every operation issues a single
//! statement against the backing store and returns rows unmodified.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::resource::{Resource, sort_records};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by record repository adapters.
    pub enum RecordRepositoryError {
        /// Repository connection could not be established.
        Connection => "record repository connection failed",
        /// Query failed during execution or row conversion.
        Query => "record repository query failed",
    }
}

/// Port for reading and writing rows of one table.
#[async_trait]
pub trait RecordRepository<E: Resource>: Send + Sync {
    /// Return every row in the resource's canonical order.
    async fn list(&self) -> Result<Vec<E>, RecordRepositoryError>;

    /// Return the row with `id`, if any.
    async fn find(&self, id: i32) -> Result<Option<E>, RecordRepositoryError>;

    /// Insert a row and return it with its assigned id and stamps.
    async fn insert(&self, draft: E::Draft) -> Result<E, RecordRepositoryError>;

    /// Overwrite every client-supplied column of row `id`.
    ///
    /// Returns `None` when no such row exists.
    async fn replace(&self, id: i32, draft: E::Draft) -> Result<Option<E>, RecordRepositoryError>;
}

struct Rows<E> {
    last_id: i32,
    records: Vec<E>,
}

/// Process-local repository used when no database is configured.
///
/// Ids are assigned sequentially from 1, mirroring a `SERIAL` column.
pub struct InMemoryRecordRepository<E: Resource> {
    rows: Mutex<Rows<E>>,
    clock: Arc<dyn Clock>,
}

impl<E: Resource> InMemoryRecordRepository<E> {
    /// Create an empty repository stamping rows with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rows: Mutex::new(Rows {
                last_id: 0,
                records: Vec::new(),
            }),
            clock,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Rows<E>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<E: Resource> RecordRepository<E> for InMemoryRecordRepository<E> {
    async fn list(&self) -> Result<Vec<E>, RecordRepositoryError> {
        let mut records = self.lock().records.clone();
        sort_records(&mut records);
        Ok(records)
    }

    async fn find(&self, id: i32) -> Result<Option<E>, RecordRepositoryError> {
        Ok(self.lock().records.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, draft: E::Draft) -> Result<E, RecordRepositoryError> {
        let now = self.clock.utc();
        let mut rows = self.lock();
        let id = rows
            .last_id
            .checked_add(1)
            .ok_or_else(|| RecordRepositoryError::query("id sequence exhausted"))?;
        let record = E::from_draft(id, draft, now);
        rows.last_id = id;
        rows.records.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, id: i32, draft: E::Draft) -> Result<Option<E>, RecordRepositoryError> {
        let mut rows = self.lock();
        let Some(slot) = rows.records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        *slot = slot.replace_with(draft);
        Ok(Some(slot.clone()))
    }
}
