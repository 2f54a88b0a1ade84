//! Client for the University of Waterloo Open Data API v2.
//!
//! This crate contains:
//! - URL construction for the `.json?key=` endpoint scheme
//! - The endpoint catalogue, stored as data
//! - A transport abstraction with a reqwest-backed production client
//! - Twelve service groups and the [`UwClient`] aggregate
//!
//! Responses are returned as untyped [`serde_json::Value`] trees carrying
//! the upstream `{meta, data}` envelope verbatim; callers inspect
//! `meta.status` for application-level failures.
//!
//! ```no_run
//! # async fn demo() -> Result<(), uwopen_core::ApiError> {
//! let client = uwopen_core::UwClient::new("YOUR_API_KEY");
//! let menu = client.food_services.menu().await?;
//! println!("{}", menu["data"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod groups;
pub mod http_client;
pub mod url;

pub use client::UwClient;
pub use endpoint::{Endpoint, Segment, CATALOGUE};
pub use error::ApiError;
pub use groups::{
    ApiMeta, Buildings, Codes, Courses, Events, FoodServices, News, Resources, Server, Services,
    Terms, Weather,
};
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use url::BASE_URL;
