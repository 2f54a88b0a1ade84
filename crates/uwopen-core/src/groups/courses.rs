use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/courses`.
///
/// Subject short codes are uppercase upstream (`PHYS`, not `phys`) and are
/// passed through as given.
#[derive(Clone)]
pub struct Courses {
    transport: Arc<Transport>,
}

impl Courses {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// All courses offered under a subject.
    pub async fn by_subject(&self, subject: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::COURSES_BY_SUBJECT, &[subject])
            .await
    }

    /// Course information by numeric course id.
    pub async fn info_by_id(&self, course_id: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::COURSES_INFO_BY_ID, &[course_id])
            .await
    }

    /// Class schedule by class number.
    pub async fn schedule_by_id(&self, class_number: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::COURSES_SCHEDULE_BY_ID, &[class_number])
            .await
    }

    /// Course information by subject and catalog number, e.g. `PHYS 234`.
    pub async fn info_by_catalog_number(
        &self,
        subject: &str,
        catalog_number: &str,
    ) -> Result<Value, ApiError> {
        self.transport
            .call(
                &endpoint::COURSES_INFO_BY_CATALOG_NUMBER,
                &[subject, catalog_number],
            )
            .await
    }

    pub async fn schedule_by_catalog_number(
        &self,
        subject: &str,
        catalog_number: &str,
    ) -> Result<Value, ApiError> {
        self.transport
            .call(
                &endpoint::COURSES_SCHEDULE_BY_CATALOG_NUMBER,
                &[subject, catalog_number],
            )
            .await
    }

    pub async fn prerequisites_by_catalog_number(
        &self,
        subject: &str,
        catalog_number: &str,
    ) -> Result<Value, ApiError> {
        self.transport
            .call(
                &endpoint::COURSES_PREREQUISITES_BY_CATALOG_NUMBER,
                &[subject, catalog_number],
            )
            .await
    }

    pub async fn exam_schedule_by_catalog_number(
        &self,
        subject: &str,
        catalog_number: &str,
    ) -> Result<Value, ApiError> {
        self.transport
            .call(
                &endpoint::COURSES_EXAM_SCHEDULE_BY_CATALOG_NUMBER,
                &[subject, catalog_number],
            )
            .await
    }
}
