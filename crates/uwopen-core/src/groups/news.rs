use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/news`.
#[derive(Clone)]
pub struct News {
    transport: Arc<Transport>,
}

impl News {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// News items across all sites.
    pub async fn all(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::NEWS_ALL, &[]).await
    }

    pub async fn by_site(&self, site: &str) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::NEWS_BY_SITE, &[site]).await
    }

    pub async fn by_site_and_id(&self, site: &str, id: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::NEWS_BY_SITE_AND_ID, &[site, id])
            .await
    }
}
