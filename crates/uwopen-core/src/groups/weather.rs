use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/weather`.
#[derive(Clone)]
pub struct Weather {
    transport: Arc<Transport>,
}

impl Weather {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Current readings from the campus weather station.
    pub async fn current(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::WEATHER_CURRENT, &[]).await
    }
}
