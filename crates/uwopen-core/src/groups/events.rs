use std::sync::Arc;

use serde_json::Value;

use crate::client::Transport;
use crate::endpoint;
use crate::error::ApiError;

/// Endpoints under `/events`.
#[derive(Clone)]
pub struct Events {
    transport: Arc<Transport>,
}

impl Events {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Events across all sites.
    pub async fn all(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::EVENTS_ALL, &[]).await
    }

    /// Events published by one site, e.g. `engineering`.
    pub async fn by_site(&self, site: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::EVENTS_BY_SITE, &[site])
            .await
    }

    pub async fn by_site_and_id(&self, site: &str, id: &str) -> Result<Value, ApiError> {
        self.transport
            .call(&endpoint::EVENTS_BY_SITE_AND_ID, &[site, id])
            .await
    }

    pub async fn holidays(&self) -> Result<Value, ApiError> {
        self.transport.call(&endpoint::EVENTS_HOLIDAYS, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    use crate::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse};
    use crate::UwClient;

    #[derive(Default)]
    struct RecordingHttpClient {
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl HttpClient for RecordingHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            Box::pin(async move { Ok(HttpResponse::ok_json("{}")) })
        }
    }

    #[tokio::test]
    async fn site_values_pass_through_unmodified() {
        let stub = Arc::new(RecordingHttpClient::default());
        let client = UwClient::with_http_client(stub.clone(), "demo");

        client
            .events
            .by_site("Engineering")
            .await
            .expect("stub succeeds");

        let requests = stub
            .requests
            .lock()
            .expect("request store should not be poisoned");
        assert_eq!(
            requests[0].url,
            "https://api.uwaterloo.ca/v2/events/Engineering.json?key=demo"
        );
    }
}
