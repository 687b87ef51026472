//! Application state - shared across all handlers.

use std::sync::Arc;

use fintrax_core::domain::{
    FinanceAccount, Loan, Note, Preferences, Project, Resource, Roadmap, SavingsGoal, Tag, Todo,
    TodoTag, Transaction,
};
use fintrax_core::ports::{Mailer, PasswordService, Store, TokenService, UserRepository};
use fintrax_infra::repository::{InMemoryUserRepository, MemoryStore};
use fintrax_infra::{Argon2PasswordService, JwtTokenService, LogMailer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub todos: Arc<dyn Store<Todo>>,
    pub projects: Arc<dyn Store<Project>>,
    pub roadmaps: Arc<dyn Store<Roadmap>>,
    pub tags: Arc<dyn Store<Tag>>,
    pub todo_tags: Arc<dyn Store<TodoTag>>,
    pub notes: Arc<dyn Store<Note>>,
    pub resources: Arc<dyn Store<Resource>>,
    pub finances: Arc<dyn Store<FinanceAccount>>,
    pub savings: Arc<dyn Store<SavingsGoal>>,
    pub loans: Arc<dyn Store<Loan>>,
    pub transactions: Arc<dyn Store<Transaction>>,
    pub preferences: Arc<dyn Store<Preferences>>,
    pub token_service: Arc<dyn TokenService>,
    pub password_service: Arc<dyn PasswordService>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Build the application state with in-memory implementations.
    pub fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            todos: Arc::new(MemoryStore::new()),
            projects: Arc::new(MemoryStore::new()),
            roadmaps: Arc::new(MemoryStore::new()),
            tags: Arc::new(MemoryStore::new()),
            todo_tags: Arc::new(MemoryStore::new()),
            notes: Arc::new(MemoryStore::new()),
            resources: Arc::new(MemoryStore::new()),
            finances: Arc::new(MemoryStore::new()),
            savings: Arc::new(MemoryStore::new()),
            loans: Arc::new(MemoryStore::new()),
            transactions: Arc::new(MemoryStore::new()),
            preferences: Arc::new(MemoryStore::new()),
            token_service: Arc::new(JwtTokenService::from_env()),
            password_service: Arc::new(Argon2PasswordService::new()),
            mailer: Arc::new(LogMailer::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
