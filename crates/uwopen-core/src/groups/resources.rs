use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/resources`.
#[derive(Clone)]
pub struct Resources {
    transport: Arc<Transport>,
}

impl Resources {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn tutors(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::RESOURCES_TUTORS, &[]).await
    }

    pub async fn printers(&self) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::RESOURCES_PRINTERS, &[])
            .await
    }

    pub async fn infosessions(&self) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::RESOURCES_INFOSESSIONS, &[])
            .await
    }

    /// Sightings from the campus goose tracker.
    pub async fn goosewatch(&self) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::RESOURCES_GOOSEWATCH, &[])
            .await
    }
}
