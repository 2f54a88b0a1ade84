// Shared transport stubs for client behavior tests
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

pub use uwopen_core::{
    HttpClient, HttpError, HttpRequest, HttpResponse, UwClient, BASE_URL, CATALOGUE,
};

/// Transport stub that records every request and replays a canned outcome.
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    /// Stub answering 200 with the given body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse::ok_json(body)))
    }

    /// Stub answering the given status with the given body.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status,
            body: body.into(),
        }))
    }

    pub fn with_response(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
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
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}
