use gloo_net::http::Request;
use studio_admin::{ApiError, ApiRequest, Method, RawResponse, Transport};

/// Browser `fetch` transport for the admin API.
///
/// Only moves bytes: any HTTP status comes back as a [`RawResponse`] and the
/// controller decides what it means.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let method = request.method.as_str();
        log::debug!("{} request to: {}", method, request.url);

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| {
                    let error_msg = format!("Failed to build request: {}", e);
                    log::error!("{} {} - {}", method, request.url, error_msg);
                    ApiError::Transport(error_msg)
                })?
                .send()
                .await,
            None => builder.send().await,
        };

        let response = sent.map_err(|e| {
            log::error!("{} {} - Request failed: {}", method, request.url, e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        log::trace!("{} {} - Response status {}", method, request.url, status);

        let body = response.text().await.map_err(|e| {
            log::error!("{} {} - Failed to read body: {}", method, request.url, e);
            ApiError::Transport(e.to_string())
        })?;

        Ok(RawResponse::new(status, body))
    }
}
