use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/foodservices`: menus, outlets, announcements and
/// WatCard acceptance.
#[derive(Clone)]
pub struct FoodServices {
    transport: Arc<Transport>,
}

impl FoodServices {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Menu for the current week.
    pub async fn menu(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::FOODSERVICES_MENU, &[]).await
    }

    pub async fn notes(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::FOODSERVICES_NOTES, &[]).await
    }

    pub async fn diets(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::FOODSERVICES_DIETS, &[]).await
    }

    pub async fn outlets(&self) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::FOODSERVICES_OUTLETS, &[])
            .await
    }

    pub async fn locations(&self) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::FOODSERVICES_LOCATIONS, &[])
            .await
    }

    /// Locations accepting WatCard payment.
    pub async fn watcard(&self) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::FOODSERVICES_WATCARD, &[])
            .await
    }

    pub async fn announcements(&self) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::FOODSERVICES_ANNOUNCEMENTS, &[])
            .await
    }

    /// Details for a single product.
    pub async fn products(&self, product_id: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::FOODSERVICES_PRODUCTS, &[product_id])
            .await
    }

    /// Menu for a specific ISO week of a year.
    pub async fn menu_dated(&self, year: &str, week: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::FOODSERVICES_MENU_DATED, &[year, week])
            .await
    }

    pub async fn notes_dated(&self, year: &str, week: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::FOODSERVICES_NOTES_DATED, &[year, week])
            .await
    }

    pub async fn announcements_dated(&self, year: &str, week: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::FOODSERVICES_ANNOUNCEMENTS_DATED, &[year, week])
            .await
    }
}
