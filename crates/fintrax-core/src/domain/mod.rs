//! Domain entities.

mod finance;
mod loan;
mod note;
mod preferences;
mod project;
mod resource;
mod roadmap;
mod savings;
mod status;
mod tag;
mod todo;
mod transaction;
mod user;

pub use finance::FinanceAccount;
pub use loan::Loan;
pub use note::Note;
pub use preferences::Preferences;
pub use project::Project;
pub use resource::{Resource, ResourceKind};
pub use roadmap::Roadmap;
pub use savings::SavingsGoal;
pub use status::{Status, UserStatus};
pub use tag::{Tag, TodoTag};
pub use todo::Todo;
pub use transaction::{FlowKind, Transaction};
pub use user::{OTP_REGENERATION_MINUTES, OTP_VALIDITY_MINUTES, User};

use uuid::Uuid;

/// Conventions every user-owned entity follows: a stable id, an owning
/// user, and a soft-delete status.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    fn owner_id(&self) -> Uuid;

    fn status(&self) -> Status;

    fn set_status(&mut self, status: Status);
}
