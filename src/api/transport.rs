//! Gloo Transport
//!
//! `fetch`-backed transport. Every rejected fetch becomes
//! `FetchError::Network`; any response, whatever its status, is handed back.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use log::warn;
use today_cards_core::{FetchError, HttpResponse, HttpTransport, JSON_CONTENT_TYPE};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = Request::get(url).send().await.map_err(network_error)?;
        Ok(read_response(response).await)
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, FetchError> {
        let request = Request::post(url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(body)
            .map_err(|e| FetchError::Encode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        Ok(read_response(response).await)
    }
}

fn network_error(err: gloo_net::Error) -> FetchError {
    FetchError::Network(err.to_string())
}

async fn read_response(response: Response) -> HttpResponse {
    let status = response.status();
    let body = match response.text().await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("could not read body of {} response: {}", status, e);
            None
        }
    };
    HttpResponse { status, body }
}
