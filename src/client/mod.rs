//! Client layer: the request dispatcher and the typed operation surface.

mod account;
mod call;
mod sms;
mod verify;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{ApiKey, StatusCode, ValidationError};
use crate::transport::{FirstEntry, FormParams, decode_entries, decode_envelope};

/// Base URL of the public Kavenegar REST API.
pub const DEFAULT_ENDPOINT: &str = "https://api.kavenegar.com/v1";

/// Boxed future returned by [`HttpTransport::post_form`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Status and full body of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP seam used by [`KavenegarClient`].
///
/// The default implementation uses `reqwest`; supply your own through
/// [`KavenegarClientBuilder::transport`] to record or stub requests.
pub trait HttpTransport: Send + Sync {
    /// POST `params` as `application/x-www-form-urlencoded` and read the whole body.
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`KavenegarClient`].
///
/// Every operation propagates these unchanged; nothing is retried.
pub enum KavenegarError {
    /// HTTP client / transport failure (DNS, TLS, connection reset, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-200 HTTP status with a body that is not a Kavenegar envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The server answered with a failure status in the response envelope.
    #[error("API error {}: {message}", status.as_i32())]
    Api { status: StatusCode, message: String },

    /// Response body or its `entries` could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Request parameters could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured base endpoint cannot carry path segments.
    #[error("invalid endpoint: {endpoint}")]
    InvalidEndpoint { endpoint: String },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl KavenegarError {
    /// Envelope status code, for [`KavenegarError::Api`] only.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Builder for [`KavenegarClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent or the
/// HTTP transport itself.
pub struct KavenegarClientBuilder {
    api_key: ApiKey,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl KavenegarClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the base URL; the API key and `{scope}/{method}.json` are appended to it.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport. Timeout and user-agent settings are ignored then.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`KavenegarClient`].
    pub fn build(self) -> Result<KavenegarClient, KavenegarError> {
        let endpoint = Url::parse(&self.endpoint).map_err(|_| KavenegarError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(KavenegarError::InvalidEndpoint {
                endpoint: self.endpoint,
            });
        }

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| KavenegarError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client }) as Arc<dyn HttpTransport>
            }
        };

        Ok(KavenegarClient {
            api_key: self.api_key,
            endpoint,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level Kavenegar client.
///
/// Cheap to clone; clones share the underlying HTTP connection pool. Safe to use
/// from many tasks at once, each call being one independent POST.
pub struct KavenegarClient {
    api_key: ApiKey,
    endpoint: Url,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for KavenegarClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KavenegarClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key)
            .finish()
    }
}

impl KavenegarClient {
    /// Create a client using the default endpoint and a default `reqwest` client.
    ///
    /// For more customization, use [`KavenegarClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: default_endpoint(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> KavenegarClientBuilder {
        KavenegarClientBuilder::new(api_key)
    }

    /// Call `{scope}/{method}.json` and unwrap the response envelope.
    ///
    /// Returns the envelope's `entries` decoded as `T`, or `None` when the server
    /// sent no entries. Every typed operation goes through here; use it directly
    /// for endpoints without a dedicated method.
    ///
    /// Errors:
    /// - [`KavenegarError::Transport`] when the request could not be completed,
    /// - [`KavenegarError::Api`] when the envelope reports a failure, or when the
    ///   HTTP status is not 200 and the body is still an envelope,
    /// - [`KavenegarError::HttpStatus`] for other non-200 responses,
    /// - [`KavenegarError::Parse`] for undecodable bodies.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        scope: &str,
        method: &str,
        params: Option<FormParams>,
    ) -> Result<Option<T>, KavenegarError> {
        let url = self.method_url(scope, method)?;
        let fields = params.map(FormParams::into_pairs).unwrap_or_default();
        debug!(scope, method, fields = fields.len(), "calling Kavenegar API");

        let response = self
            .http
            .post_form(url.as_str(), fields)
            .await
            .map_err(KavenegarError::Transport)?;

        debug!(scope, method, http_status = response.status, "Kavenegar API responded");
        unwrap_envelope(response)
    }

    /// Dispatch a call whose entries are a list; null entries become an empty list.
    async fn execute_list<T: DeserializeOwned>(
        &self,
        scope: &str,
        method: &str,
        params: FormParams,
    ) -> Result<Vec<T>, KavenegarError> {
        Ok(self
            .execute::<Vec<T>>(scope, method, Some(params))
            .await?
            .unwrap_or_default())
    }

    /// Dispatch a call whose entries are one object (bare or wrapped in an array).
    async fn execute_first<T: DeserializeOwned>(
        &self,
        scope: &str,
        method: &str,
        params: Option<FormParams>,
    ) -> Result<Option<T>, KavenegarError> {
        Ok(self
            .execute::<FirstEntry<T>>(scope, method, params)
            .await?
            .and_then(FirstEntry::into_inner))
    }

    fn method_url(&self, scope: &str, method: &str) -> Result<Url, KavenegarError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| KavenegarError::InvalidEndpoint {
                endpoint: self.endpoint.to_string(),
            })?
            .pop_if_empty()
            .push(self.api_key.expose())
            .push(scope)
            .push(&format!("{method}.json"));
        Ok(url)
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("Invalid default endpoint")
}

fn unwrap_envelope<T: DeserializeOwned>(
    response: HttpResponse,
) -> Result<Option<T>, KavenegarError> {
    if response.status != 200 {
        return match decode_envelope(&response.body) {
            Ok(envelope) => {
                debug!(api_status = envelope.header.status.as_i32(), "Kavenegar API rejected call");
                Err(KavenegarError::Api {
                    status: envelope.header.status,
                    message: envelope.header.message,
                })
            }
            Err(_) => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                Err(KavenegarError::HttpStatus {
                    status: response.status,
                    body,
                })
            }
        };
    }

    let envelope =
        decode_envelope(&response.body).map_err(|err| KavenegarError::Parse(Box::new(err)))?;
    if !envelope.header.status.is_success() {
        debug!(api_status = envelope.header.status.as_i32(), "Kavenegar API rejected call");
        return Err(KavenegarError::Api {
            status: envelope.header.status,
            message: envelope.header.message,
        });
    }

    decode_entries(envelope.entries).map_err(|err| KavenegarError::Parse(Box::new(err)))
}
