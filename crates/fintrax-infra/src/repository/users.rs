//! In-memory user repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use fintrax_core::domain::{User, UserStatus};
use fintrax_core::error::RepoError;
use fintrax_core::ports::UserRepository;

pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&id)
            .filter(|user| user.status != UserStatus::Deleted)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .find(|user| user.email == email && user.status != UserStatus::Deleted)
            .cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        let email_taken = rows
            .values()
            .any(|existing| existing.email == user.email && existing.id != user.id);
        if email_taken {
            return Err(RepoError::Constraint(format!(
                "email already registered: {}",
                user.email
            )));
        }
        rows.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new("name".to_string(), email.to_string(), "hash".to_string())
    }

    #[tokio::test]
    async fn test_save_and_find_by_email() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(user("a@example.com")).await.unwrap();

        let found = repo.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, saved.id);
        assert!(repo.find_by_email("b@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("a@example.com")).await.unwrap();

        assert!(matches!(
            repo.save(user("a@example.com")).await,
            Err(RepoError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn test_updating_own_row_keeps_email() {
        let repo = InMemoryUserRepository::new();
        let mut saved = repo.save(user("a@example.com")).await.unwrap();
        saved.status = UserStatus::Active;

        let updated = repo.save(saved).await.unwrap();
        assert_eq!(updated.status, UserStatus::Active);
    }
}
