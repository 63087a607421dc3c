//! Mail sender trait and the log-only implementation.

use async_trait::async_trait;
use common::EmailMessage;

use crate::error::Result;

/// Note attached to receipts from [`LoggingMailSender`].
pub const LOGGED_ONLY_NOTE: &str = "Email logged - configure SMTP for actual sending";

/// Outcome of handing a message to a mail sender.
#[derive(Debug, Clone)]
pub struct SendReceipt {
    pub message_id: String,
    pub note: String,
}

/// Trait for sending email.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt>;
}

/// Logs the message instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct LoggingMailSender;

impl LoggingMailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailSender for LoggingMailSender {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            body = %message.body,
            "email request"
        );

        Ok(SendReceipt {
            message_id: format!("email-{}", common::epoch_millis()),
            note: LOGGED_ONLY_NOTE.to_string(),
        })
    }
}
