//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiKey, ApiSecret, SendSms, SendSmsResponse, StatusCode};

#[cfg(test)]
pub(crate) mod testing;

pub const DEFAULT_SEND_ENDPOINT: &str = "https://rest.nexmo.com/sms/json";

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
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

#[derive(Debug, Clone, PartialEq, Eq)]
/// Vonage account credentials attached to every request.
///
/// Neither part is validated: empty or malformed values are left for the provider to reject.
pub struct Credentials {
    api_key: ApiKey,
    api_secret: ApiSecret,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            api_secret: ApiSecret::new(api_secret),
        }
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
        params.push((
            ApiSecret::FIELD.to_owned(),
            self.api_secret.expose().to_owned(),
        ));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VonageClient`].
///
/// Every failure of the single send maps to one variant; none of them is retried.
pub enum SendError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error(
        "unexpected HTTP status: {status}{}",
        .body.as_deref().map(|body| format!(": {body}")).unwrap_or_default()
    )]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The provider answered without any message segment.
    #[error("response contains no message segments")]
    EmptyResponse,

    /// The provider rejected the first message segment.
    #[error(
        "provider rejected message: status {status} ({})",
        .error_text.as_deref().unwrap_or("no error text")
    )]
    Api {
        status: StatusCode,
        error_text: Option<String>,
    },

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
/// Builder for [`VonageClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct VonageClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VonageClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the `sms/json` endpoint URL.
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

    /// Build a [`VonageClient`].
    pub fn build(self) -> Result<VonageClient, SendError> {
        let endpoint = url::Url::parse(&self.endpoint).map_err(|source| {
            SendError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                source,
            }
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendError::Transport(Box::new(err)))?;

        Ok(VonageClient {
            credentials: self.credentials,
            endpoint: endpoint.into(),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Vonage SMS API client.
///
/// Form-encodes the request together with the account credentials, posts it to
/// `https://rest.nexmo.com/sms/json` by default and decodes the JSON reply.
pub struct VonageClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl VonageClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`VonageClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> VonageClientBuilder {
        VonageClientBuilder::new(credentials)
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        credentials: Credentials,
        endpoint: impl Into<String>,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one SMS. Exactly one HTTP request is made per call.
    ///
    /// Errors:
    /// - [`SendError::Transport`] when the request could not be completed,
    /// - [`SendError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`SendError::Parse`] / [`SendError::EmptyResponse`] for unusable bodies,
    /// - [`SendError::Api`] when the first segment carries a non-zero status.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, SendError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_form_params(&mut params);
        params.extend(crate::transport::encode_send_sms_form(&request));

        tracing::debug!(
            endpoint = %self.endpoint,
            from = request.from().as_str(),
            to = request.to().as_str(),
            "sending SMS"
        );

        let response = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(SendError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SendError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_send_sms_json_response(&response.body)
            .map_err(|err| SendError::Parse(Box::new(err)))?;

        let Some(first) = parsed.first() else {
            return Err(SendError::EmptyResponse);
        };

        if !first.status.is_success() {
            tracing::debug!(
                status = first.status.as_str(),
                error_text = first.error_text.as_deref(),
                "provider rejected message"
            );
            return Err(SendError::Api {
                status: first.status.clone(),
                error_text: first.error_text.clone(),
            });
        }

        Ok(parsed)
    }
}
