use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/terms`. Terms are four-digit codes upstream.
#[derive(Clone)]
pub struct Terms {
    transport: Arc<Transport>,
}

impl Terms {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Current, previous and next term listing.
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::TERMS_LIST, &[]).await
    }

    pub async fn exam_schedule(&self, term: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::TERMS_EXAM_SCHEDULE, &[term])
            .await
    }

    /// Schedule for every course under a subject in a term.
    pub async fn subject_schedule(&self, term: &str, subject: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::TERMS_SUBJECT_SCHEDULE, &[term, subject])
            .await
    }

    /// Schedule for one class in a term.
    pub async fn class_schedule(
        &self,
        term: &str,
        subject: &str,
        catalog_number: &str,
    ) -> Result<Value, ApiError> {
        self.transport
            .call(
                &endpoint::TERMS_CLASS_SCHEDULE,
                &[term, subject, catalog_number],
            )
            .await
    }

    pub async fn info_sessions(&self, term: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::TERMS_INFO_SESSIONS, &[term])
            .await
    }
}
