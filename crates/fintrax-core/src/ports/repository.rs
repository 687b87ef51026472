use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Entity, User};
use crate::error::RepoError;

/// Generic keyed store for user-owned entities, following the soft-delete
/// convention: `soft_delete` tags the row `Status::Deleted` and every read
/// filters tagged rows out. Rows are never physically erased.
#[async_trait]
pub trait Store<T: Entity>: Send + Sync {
    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Fetch an entity by id. Deleted rows read as absent.
    async fn get(&self, id: Uuid) -> Result<Option<T>, RepoError>;

    /// All non-deleted entities owned by `owner`.
    async fn list(&self, owner: Uuid) -> Result<Vec<T>, RepoError>;

    /// Replace an existing entity. Fails with `NotFound` for unknown or
    /// deleted rows.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Tag an entity deleted. Fails with `NotFound` for unknown or
    /// already-deleted rows.
    async fn soft_delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// User repository with account-specific lookups.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Save a user (create or update).
    async fn save(&self, user: User) -> Result<User, RepoError>;
}
