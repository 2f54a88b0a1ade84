//! Aggregate client and the request pipeline shared by all service groups.

use std::sync::Arc;

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::groups::{
    ApiMeta, Buildings, Codes, Courses, Events, FoodServices, News, Resources, Server, Services,
    Terms, Weather,
};
use crate::http_client::{HttpClient, HttpErrorKind, HttpRequest, ReqwestHttpClient};

/// Shared request pipeline: endpoint row → URL → GET → JSON.
///
/// Holds the API key for the client's lifetime. Immutable after
/// construction; concurrent calls share it freely.
pub(crate) struct Transport {
    http: Arc<dyn HttpClient>,
    key: String,
    timeout_ms: Option<u64>,
}

impl Transport {
    pub(crate) fn new(http: Arc<dyn HttpClient>, key: String, timeout_ms: Option<u64>) -> Self {
        Self {
            http,
            key,
            timeout_ms,
        }
    }

    /// Execute one catalogue operation and return the parsed body verbatim.
    ///
    /// The HTTP status code is not inspected: the upstream reports
    /// application failures inside the envelope's `meta.status` field, which
    /// is left to the caller. A non-JSON body of any status surfaces as
    /// [`ApiError::Parse`].
    pub(crate) async fn call(
        &self,
        endpoint: &Endpoint,
        params: &[&str],
    ) -> Result<Value, ApiError> {
        let url = endpoint.url(&self.key, params)?;

        let mut request = HttpRequest::get(url);
        if let Some(timeout_ms) = self.timeout_ms {
            request = request.with_timeout_ms(timeout_ms);
        }

        let response = self.http.execute(request).await.map_err(|e| match e.kind() {
            HttpErrorKind::Connect => ApiError::Transport(e.message().to_string()),
            HttpErrorKind::Read => ApiError::Read(e.message().to_string()),
        })?;

        let parsed = serde_json::from_str(&response.body)?;
        Ok(parsed)
    }
}

/// Client for the University of Waterloo Open Data API v2.
///
/// Construct once with an API key; the twelve service groups share the key
/// and the underlying transport. The client carries no mutable state, so it
/// can be cloned and invoked from concurrent tasks without coordination.
#[derive(Clone)]
pub struct UwClient {
    transport: Arc<Transport>,
    pub food_services: FoodServices,
    pub courses: Courses,
    pub events: Events,
    pub news: News,
    pub services: Services,
    pub weather: Weather,
    pub terms: Terms,
    pub resources: Resources,
    pub codes: Codes,
    pub buildings: Buildings,
    pub api: ApiMeta,
    pub server: Server,
}

impl UwClient {
    /// Client backed by the production reqwest transport, with the
    /// transport's default timeout behaviour.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), key)
    }

    /// Client with a per-call deadline in milliseconds.
    pub fn with_timeout_ms(key: impl Into<String>, timeout_ms: u64) -> Self {
        Self::assemble(Arc::new(Transport::new(
            Arc::new(ReqwestHttpClient::new()),
            key.into(),
            Some(timeout_ms),
        )))
    }

    /// Client over a caller-supplied transport. This is the seam test stubs
    /// plug into.
    pub fn with_http_client(http: Arc<dyn HttpClient>, key: impl Into<String>) -> Self {
        Self::assemble(Arc::new(Transport::new(http, key.into(), None)))
    }

    fn assemble(transport: Arc<Transport>) -> Self {
        Self {
            food_services: FoodServices::new(Arc::clone(&transport)),
            courses: Courses::new(Arc::clone(&transport)),
            events: Events::new(Arc::clone(&transport)),
            news: News::new(Arc::clone(&transport)),
            services: Services::new(Arc::clone(&transport)),
            weather: Weather::new(Arc::clone(&transport)),
            terms: Terms::new(Arc::clone(&transport)),
            resources: Resources::new(Arc::clone(&transport)),
            codes: Codes::new(Arc::clone(&transport)),
            buildings: Buildings::new(Arc::clone(&transport)),
            api: ApiMeta::new(Arc::clone(&transport)),
            server: Server::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Invoke a catalogue row directly, outside the typed group methods.
    ///
    /// Drives dynamic callers such as the CLI. `params` fill the row's
    /// parameter segments positionally and are validated for count.
    pub async fn invoke(&self, endpoint: &Endpoint, params: &[&str]) -> Result<Value, ApiError> {
        self.transport.call(endpoint, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint;
    use crate::http_client::NoopHttpClient;

    #[tokio::test]
    async fn groups_share_one_transport() {
        let client = UwClient::with_http_client(Arc::new(NoopHttpClient), "demo");
        let value = client.weather.current().await.expect("noop returns {}");
        assert!(value.is_object());
    }

    #[tokio::test]
    async fn invoke_runs_catalogue_rows() {
        let client = UwClient::with_http_client(Arc::new(NoopHttpClient), "demo");
        let value = client
            .invoke(&endpoint::TERMS_LIST, &[])
            .await
            .expect("noop returns {}");
        assert!(value.is_object());
    }

    #[tokio::test]
    async fn invoke_validates_param_count() {
        let client = UwClient::with_http_client(Arc::new(NoopHttpClient), "demo");
        let err = client
            .invoke(&endpoint::FOODSERVICES_PRODUCTS, &[])
            .await
            .expect_err("missing product_id");
        assert!(matches!(err, ApiError::SegmentCount { .. }));
    }
}
