//! Generic in-memory store for user-owned entities.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use fintrax_core::domain::{Entity, Status};
use fintrax_core::error::RepoError;
use fintrax_core::ports::Store;

/// HashMap-backed store with async RwLock, honoring the soft-delete
/// convention: deleted rows stay in the map but read as absent.
///
/// Data is lost on process restart.
pub struct MemoryStore<T: Entity> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Store<T> for MemoryStore<T> {
    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&entity.id()) {
            return Err(RepoError::Constraint(format!(
                "duplicate id: {}",
                entity.id()
            )));
        }
        rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&id)
            .filter(|row| !row.status().is_deleted())
            .cloned())
    }

    async fn list(&self, owner: Uuid) -> Result<Vec<T>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|row| row.owner_id() == owner && !row.status().is_deleted())
            .cloned()
            .collect())
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.get(&entity.id()) {
            Some(existing) if !existing.status().is_deleted() => {
                rows.insert(entity.id(), entity.clone());
                Ok(entity)
            }
            _ => Err(RepoError::NotFound),
        }
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) if !row.status().is_deleted() => {
                row.set_status(Status::Deleted);
                Ok(())
            }
            _ => Err(RepoError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrax_core::domain::Note;

    fn note(owner: Uuid) -> Note {
        Note::new(owner, "title".to_string(), "content".to_string())
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let saved = store.insert(note(owner)).await.unwrap();

        let fetched = store.get(saved.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, saved.id);
    }

    #[tokio::test]
    async fn test_list_scoped_to_owner() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.insert(note(alice)).await.unwrap();
        store.insert(note(alice)).await.unwrap();
        store.insert(note(bob)).await.unwrap();

        assert_eq!(store.list(alice).await.unwrap().len(), 2);
        assert_eq!(store.list(bob).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_soft_delete_hides_row() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let saved = store.insert(note(owner)).await.unwrap();

        store.soft_delete(saved.id).await.unwrap();

        assert!(store.get(saved.id).await.unwrap().is_none());
        assert!(store.list(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_double_delete_reports_not_found() {
        let store = MemoryStore::new();
        let saved = store.insert(note(Uuid::new_v4())).await.unwrap();
        store.soft_delete(saved.id).await.unwrap();

        assert!(matches!(
            store.soft_delete(saved.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_deleted_row_fails() {
        let store = MemoryStore::new();
        let saved = store.insert(note(Uuid::new_v4())).await.unwrap();
        store.soft_delete(saved.id).await.unwrap();

        assert!(matches!(
            store.update(saved).await,
            Err(RepoError::NotFound)
        ));
    }
}
