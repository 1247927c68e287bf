//! In-memory detail store standing in for one PostgreSQL database.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{DetailPersistenceError, DetailRepository};
use crate::domain::{Detail, DetailDraft, DetailId};

#[derive(Default)]
struct StoreState {
    rows: Vec<Detail>,
    next_id: i32,
}

/// Detail store with serial identifiers starting at 1.
///
/// An unreachable store rejects every call with a connection error, which is
/// how a stopped database surfaces through the pool.
#[derive(Default)]
pub struct InMemoryDetailRepository {
    state: Mutex<StoreState>,
    unreachable: bool,
}

impl InMemoryDetailRepository {
    /// Empty, reachable store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every call fails with a connection error.
    pub fn unreachable() -> Self {
        Self {
            state: Mutex::default(),
            unreachable: true,
        }
    }

    /// Snapshot of the stored rows in insertion order.
    pub fn rows(&self) -> Vec<Detail> {
        self.lock().rows.clone()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn check_reachable(&self) -> Result<(), DetailPersistenceError> {
        if self.unreachable {
            return Err(DetailPersistenceError::connection(
                "connection refused (in-memory store marked unreachable)",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DetailRepository for InMemoryDetailRepository {
    async fn insert(&self, draft: &DetailDraft) -> Result<Detail, DetailPersistenceError> {
        self.check_reachable()?;
        let mut state = self.lock();
        state.next_id += 1;
        let detail = draft.clone().into_detail(DetailId::new(state.next_id));
        state.rows.push(detail.clone());
        Ok(detail)
    }

    async fn find_by_id(&self, id: DetailId) -> Result<Option<Detail>, DetailPersistenceError> {
        self.check_reachable()?;
        Ok(self.lock().rows.iter().find(|row| row.id() == id).cloned())
    }
}
