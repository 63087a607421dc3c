//! Document store trait and the log-only implementation used for the
//! monthly SharePoint report.

use async_trait::async_trait;
use common::UploadPayload;

use crate::error::Result;

/// Counts of records accepted by an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReceipt {
    pub visitors_uploaded: usize,
    pub staff_uploaded: usize,
}

/// Trait for storing a month of visitor and staff records.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn upload_month(&self, payload: &UploadPayload) -> Result<UploadReceipt>;
}

/// Logs the upload and reports the record counts without storing anything.
#[derive(Debug, Clone, Default)]
pub struct LoggingDocumentStore;

impl LoggingDocumentStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentStore for LoggingDocumentStore {
    async fn upload_month(&self, payload: &UploadPayload) -> Result<UploadReceipt> {
        tracing::info!(
            month = ?payload.month_name,
            year = ?payload.year,
            "sharepoint upload request"
        );

        Ok(UploadReceipt {
            visitors_uploaded: payload.visitor_count(),
            staff_uploaded: payload.staff_count(),
        })
    }
}
