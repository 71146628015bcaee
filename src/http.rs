//! Request execution and response classification.
//!
//! Every operation funnels through [`Client::send`]: attach the signed
//! headers, perform the request, then normalize the outcome. Transport
//! failures are surfaced first and unmodified; completed responses go
//! through [`classify`], which understands both of the API's failure shapes.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::sign::{APIKEY_HEADER, HMAC_HEADER, REQUEST_DATE_HEADER};

/// Maximum number of body bytes to include in debug logs.
const LOG_BODY_LIMIT: usize = 256;

/// The API's generic error envelope: `{"error": ["...", ...]}`.
///
/// Success bodies do not fit this shape, so a failed decode simply means
/// "no structured error" and is not an error condition by itself.
#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: Vec<String>,
}

impl Client {
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let text = self.send(Method::GET, path, None).await?;
        parse_json(&text)
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = encode_body(body)?;
        let text = self.send(Method::POST, path, Some(payload)).await?;
        parse_json(&text)
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let payload = encode_body(body)?;
        self.send(Method::PUT, path, Some(payload)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Sign and perform one request, returning the classified response body.
    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<String> {
        let url = self.url(path);
        log::debug!("{method} {url}");

        let auth = self.auth_headers();
        let mut request = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header(APIKEY_HEADER, auth.api_key)
            .header(REQUEST_DATE_HEADER, auth.request_date)
            .header(HMAC_HEADER, auth.hmac);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;
        log::debug!("Response Body: {}", truncate_for_log(&text));

        match classify(status, &text) {
            Ok(()) => Ok(text),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("{url}: {e}");
                } else {
                    log::error!("{url}: {e}");
                }
                Err(e)
            }
        }
    }
}

/// Convert a completed response into the uniform success/failure outcome.
///
/// The API reports failures two ways, sometimes at once: an `error` array in
/// the JSON body (which can arrive under HTTP 200), or a bare non-2xx status
/// with no structured body. The structured form wins; the status code is only
/// consulted when no envelope is present.
pub(crate) fn classify(status: u16, body: &str) -> Result<()> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if !envelope.error.is_empty() {
            return Err(ClientError::Api {
                message: join_messages(&envelope.error),
            });
        }
    }

    if !(200..=299).contains(&status) {
        return Err(ClientError::HttpStatus { status });
    }

    Ok(())
}

/// A single entry is the message verbatim; multiple entries become one line
/// each, prefixed with their index.
fn join_messages(messages: &[String]) -> String {
    if messages.len() == 1 {
        return messages[0].clone();
    }

    let mut joined = String::new();
    for (idx, message) in messages.iter().enumerate() {
        joined.push_str(&format!("{idx}: {message}\n"));
    }
    joined
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    let payload = serde_json::to_string(body).map_err(|e| ClientError::Serialization {
        detail: e.to_string(),
    })?;
    log::debug!("Request Body: {payload}");
    Ok(payload)
}

pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("raw response: {}", truncate_for_log(text));
        ClientError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Truncate a response body for logging, backing off to a char boundary.
fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &body[..end], body.len())
}
