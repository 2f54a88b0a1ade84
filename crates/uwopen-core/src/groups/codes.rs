use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/codes`: lookup tables for codes used elsewhere in the
/// API.
#[derive(Clone)]
pub struct Codes {
    transport: Arc<Transport>,
}

impl Codes {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn units(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::CODES_UNITS, &[]).await
    }

    pub async fn terms(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::CODES_TERMS, &[]).await
    }

    pub async fn groups(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::CODES_GROUPS, &[]).await
    }

    pub async fn subjects(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::CODES_SUBJECTS, &[]).await
    }

    pub async fn instructions(&self) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::CODES_INSTRUCTIONS, &[])
            .await
    }
}
