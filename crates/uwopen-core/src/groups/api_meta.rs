use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/api`: metadata about the Open Data API itself.
#[derive(Clone)]
pub struct ApiMeta {
    transport: Arc<Transport>,
}

impl ApiMeta {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Usage statistics for the supplied key.
    pub async fn usage(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::API_USAGE, &[]).await
    }

    pub async fn services(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::API_SERVICES, &[]).await
    }

    pub async fn methods(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::API_METHODS, &[]).await
    }

    pub async fn versions(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::API_VERSIONS, &[]).await
    }

    pub async fn changelog(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::API_CHANGELOG, &[]).await
    }
}
