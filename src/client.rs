//! request executor
//!
//! posts json or multipart graphql requests to the configured endpoint and
//! parses the json response.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::graphql::GraphQlResponse;
use crate::upload::UploadPayload;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// blocking graphql client for saleor
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    http: reqwest::blocking::Client,
}

// client is shared across threads without locking
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

/// request body handed to the transport
#[derive(Debug)]
pub(crate) enum RequestBody {
    Json(Value),
    Multipart(UploadPayload),
}

impl RequestBody {
    fn json(query: &str, variables: Option<Value>) -> Self {
        RequestBody::Json(serde_json::json!({
            "query": query,
            "variables": variables.unwrap_or_else(|| serde_json::json!({})),
        }))
    }
}

impl Client {
    /// create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = match &config.http_client {
            Some(http) => http.clone(),
            None => {
                let mut headers = HeaderMap::new();
                let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token)).map_err(
                    |err| Error::Config(format!("invalid auth token header value: {err}")),
                )?;
                auth.set_sensitive(true);
                headers.insert(AUTHORIZATION, auth);
                headers.extend(config.extra_headers.clone());

                let mut builder = reqwest::blocking::Client::builder()
                    .default_headers(headers)
                    .user_agent(config.user_agent.clone())
                    .timeout(config.timeout)
                    .danger_accept_invalid_certs(!config.verify_ssl);
                if let Some(customize) = &config.http_client_builder {
                    builder = customize(builder);
                }
                builder.build()?
            }
        };

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// access the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// execute a graphql query with a json body
    ///
    /// `headers` are applied on top of the configured ones and win on
    /// conflicts, including `content-type`.
    pub fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<GraphQlResponse<Value>> {
        self.execute_with(RequestBody::json(query, variables), |url, body| {
            self.send(url, body, headers)
        })
    }

    /// execute a multipart upload
    ///
    /// the file handle owned by `payload` is closed when the request finishes,
    /// whatever the outcome. a caller `content-type` header is ignored so the
    /// multipart boundary is kept.
    pub fn execute_upload(
        &self,
        payload: UploadPayload,
        headers: Option<&HeaderMap>,
    ) -> Result<GraphQlResponse<Value>> {
        self.execute_with(RequestBody::Multipart(payload), |url, body| {
            self.send(url, body, headers)
        })
    }

    fn send(
        &self,
        url: Url,
        body: RequestBody,
        headers: Option<&HeaderMap>,
    ) -> Result<(StatusCode, String)> {
        let request = self.http.post(url);
        let request = match body {
            RequestBody::Json(body) => {
                let request = request.json(&body);
                match headers {
                    Some(headers) => request.headers(headers.clone()),
                    None => request,
                }
            }
            RequestBody::Multipart(payload) => {
                let mut headers = headers.cloned().unwrap_or_default();
                headers.remove(CONTENT_TYPE);
                request
                    .headers(headers)
                    .timeout(self.config.upload_timeout)
                    .multipart(payload.into_form()?)
            }
        };

        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "graphql response");
        Ok((status, text))
    }

    pub(crate) fn execute_with<F>(
        &self,
        body: RequestBody,
        send: F,
    ) -> Result<GraphQlResponse<Value>>
    where
        F: FnOnce(Url, RequestBody) -> Result<(StatusCode, String)>,
    {
        let url = self.config.endpoint.clone();
        let (status, text) = send(url, body)?;
        parse_graphql_response(status, text)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn parse_graphql_response(status: StatusCode, text: String) -> Result<GraphQlResponse<Value>> {
    if status != StatusCode::OK {
        return Err(transport_error(status, text));
    }

    Ok(serde_json::from_str(&text)?)
}

/// build a transport error from a non-200 response
///
/// uses the first graphql error entry when the body carries one, otherwise
/// falls back to the raw status and body.
fn transport_error(status: StatusCode, body: String) -> Error {
    let first = serde_json::from_str::<Value>(&body).ok().and_then(|parsed| {
        let entry = parsed.get("errors")?.as_array()?.first()?;
        let message = entry.get("message")?.as_str()?.to_string();
        let extensions = entry.get("extensions").cloned();
        Some((message, extensions))
    });

    match first {
        Some((message, extensions)) => Error::Transport {
            status: status.as_u16(),
            message: format!(
                "{message}\n extensions: {}",
                extensions.as_ref().unwrap_or(&Value::Null)
            ),
            extensions,
            body,
        },
        None => Error::Transport {
            status: status.as_u16(),
            message: format!("http status {status}: {body}"),
            extensions: None,
            body,
        },
    }
}
