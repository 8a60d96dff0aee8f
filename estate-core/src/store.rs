use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// A persisted aggregate with a system-assigned integer id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;

    /// Return the entity carrying `id`. Used by stores on insert.
    fn with_id(self, id: i64) -> Self;
}

/// Persistence gateway for one entity type.
///
/// - `find_all`   → every row, ordered by id
/// - `find_by_id` → one row, `None` when absent
/// - `insert`     → store a new row and assign its id
/// - `save`       → overwrite the row with the entity's id
/// - `delete`     → remove by id, `false` when nothing was removed
///
/// Domain-specific queries live on extension traits next to the entity.
#[async_trait]
pub trait EntityStore<E>: Send + Sync
where
    E: Entity,
{
    async fn find_all(&self) -> Result<Vec<E>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<E>>;

    async fn insert(&self, entity: E) -> Result<E>;

    async fn save(&self, entity: E) -> Result<E>;

    async fn delete(&self, id: i64) -> Result<bool>;
}

/// In-process store. Ids start at 1 and are never reused.
pub struct MemoryStore<E> {
    rows: RwLock<BTreeMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<E> MemoryStore<E>
where
    E: Entity,
{
    /// Rows matching `pred`, ordered by id.
    pub async fn find_where<F>(&self, pred: F) -> Vec<E>
    where
        F: Fn(&E) -> bool,
    {
        let rows = self.rows.read().await;
        rows.values().filter(|e| pred(e)).cloned().collect()
    }
}

#[async_trait]
impl<E> EntityStore<E> for MemoryStore<E>
where
    E: Entity,
{
    async fn find_all(&self) -> Result<Vec<E>> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn insert(&self, entity: E) -> Result<E> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entity = entity.with_id(id);

        let mut rows = self.rows.write().await;
        rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn save(&self, entity: E) -> Result<E> {
        let mut rows = self.rows.write().await;
        rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&id).is_some())
    }
}
