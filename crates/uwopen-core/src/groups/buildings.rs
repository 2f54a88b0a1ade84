use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/buildings`.
#[derive(Clone)]
pub struct Buildings {
    transport: Arc<Transport>,
}

impl Buildings {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::BUILDINGS_LIST, &[]).await
    }

    /// Details for one building by its short code, e.g. `MC`.
    pub async fn details_by_code(&self, building_code: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::BUILDINGS_DETAILS_BY_CODE, &[building_code])
            .await
    }

    /// Courses scheduled in one room.
    pub async fn courses_in_room(
        &self,
        building_code: &str,
        room_number: &str,
    ) -> Result<Value, ApiError> {
        self.transport
            .call(
                &endpoint::BUILDINGS_COURSES_IN_ROOM,
                &[building_code, room_number],
            )
            .await
    }
}
