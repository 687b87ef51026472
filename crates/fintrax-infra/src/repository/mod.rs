//! Persistence implementations.

mod memory;
mod users;

pub use memory::MemoryStore;
pub use users::InMemoryUserRepository;
