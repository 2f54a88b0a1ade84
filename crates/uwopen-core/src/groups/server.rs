use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/server`.
#[derive(Clone)]
pub struct Server {
    transport: Arc<Transport>,
}

impl Server {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Upstream server time.
    pub async fn time(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::SERVER_TIME, &[]).await
    }

    /// Response codes the upstream can return.
    pub async fn codes(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::SERVER_CODES, &[]).await
    }
}
