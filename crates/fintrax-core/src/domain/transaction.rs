use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Status};

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FlowKind {
    Income = 1,
    Expense = 2,
}

impl From<FlowKind> for u8 {
    fn from(kind: FlowKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for FlowKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FlowKind::Income),
            2 => Ok(FlowKind::Expense),
            other => Err(format!("invalid flow kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub source: String,
    pub amount: f64,
    pub flow: FlowKind,
    pub category: String,
    pub date: DateTime<Utc>,
    pub note_id: Option<Uuid>,
    pub status: Status,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(user_id: Uuid, source: String, amount: f64, flow: FlowKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            source,
            amount,
            flow,
            category: String::new(),
            date: now,
            note_id: None,
            status: Status::NotStarted,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Signed effect of this transaction on the account balance.
    pub fn signed_amount(&self) -> f64 {
        match self.flow {
            FlowKind::Income => self.amount,
            FlowKind::Expense => -self.amount,
        }
    }
}

impl Entity for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amount_follows_flow() {
        let user = Uuid::new_v4();
        let income = Transaction::new(user, "salary".to_string(), 100.0, FlowKind::Income);
        let expense = Transaction::new(user, "rent".to_string(), 40.0, FlowKind::Expense);
        assert_eq!(income.signed_amount(), 100.0);
        assert_eq!(expense.signed_amount(), -40.0);
    }
}
