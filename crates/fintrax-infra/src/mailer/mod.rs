//! Mail delivery implementations.

use async_trait::async_trait;
use tokio::sync::Mutex;

use fintrax_core::ports::{MailError, Mailer};

/// Mailer that logs outgoing messages instead of delivering them.
///
/// Stands in when no SMTP relay is configured; sent messages are retained
/// so tests can assert on them.
#[derive(Default)]
pub struct LogMailer {
    sent: Mutex<Vec<SentMail>>,
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl LogMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far.
    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        tracing::info!(to, subject, "outgoing mail");
        self.sent.lock().await.push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_records_message() {
        let mailer = LogMailer::new();
        mailer
            .send("alice@example.com", "Verify", "code: 123456")
            .await
            .unwrap();

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "alice@example.com");
        assert!(sent[0].body.contains("123456"));
    }
}
