use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/services`.
#[derive(Clone)]
pub struct Services {
    transport: Arc<Transport>,
}

impl Services {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Services offered by one site.
    pub async fn by_site(&self, site: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::SERVICES_BY_SITE, &[site])
            .await
    }
}
