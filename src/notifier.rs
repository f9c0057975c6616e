//! One-shot SMS notification: send a single message and report its status.

use std::io::{self, Write};

use crate::client::{Credentials, SendError, VonageClient};
use crate::config::Config;
use crate::domain::{MessageId, SendSms, SendSmsResponse, StatusCode};

/// Outcome of an accepted send, taken from the first message segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatus {
    pub status: StatusCode,
    pub message_id: Option<MessageId>,
    pub remaining_balance: Option<String>,
    /// Number of segments the provider split the message into.
    pub segments: usize,
}

impl DeliveryStatus {
    fn from_response(response: &SendSmsResponse) -> Result<Self, SendError> {
        let first = response.first().ok_or(SendError::EmptyResponse)?;
        Ok(Self {
            status: first.status.clone(),
            message_id: first.message_id.clone(),
            remaining_balance: first.remaining_balance.clone(),
            segments: response.message_count.max(response.messages.len()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Send(#[from] SendError),
}

#[derive(Clone)]
pub struct Notifier {
    client: VonageClient,
}

impl Notifier {
    pub fn new(client: VonageClient) -> Self {
        Self { client }
    }

    /// Build a notifier whose client talks to the configured endpoint.
    pub fn from_config(config: &Config) -> Result<Self, SendError> {
        let mut builder = VonageClient::builder(config.credentials.clone());
        if let Some(endpoint) = config.endpoint.as_deref() {
            builder = builder.endpoint(endpoint);
        }
        Ok(Self::new(builder.build()?))
    }

    /// Send `request` once. There is no retry; the caller decides what to do with a failure.
    pub async fn send(&self, request: SendSms) -> Result<DeliveryStatus, SendError> {
        let response = self.client.send_sms(request).await?;
        let status = DeliveryStatus::from_response(&response)?;
        tracing::info!(
            status = status.status.as_str(),
            message_id = status.message_id.as_ref().map(MessageId::as_str),
            segments = status.segments,
            "message accepted"
        );
        Ok(status)
    }
}

/// Send one SMS with the given credentials through the default endpoint.
pub async fn send(credentials: Credentials, request: SendSms) -> Result<DeliveryStatus, SendError> {
    Notifier::new(VonageClient::new(credentials))
        .send(request)
        .await
}

/// Send the message described by `config`.
pub async fn run(config: &Config) -> Result<DeliveryStatus, Error> {
    let notifier = Notifier::from_config(config)?;
    Ok(notifier.send(config.request()).await?)
}

/// Print the outcome and return the process exit code.
///
/// Success writes `Status: <code>` to `out` and returns 0. Failure writes the error to `err`,
/// leaves `out` untouched and returns 1.
pub fn report<T, E>(
    outcome: &Result<DeliveryStatus, Error>,
    out: &mut T,
    err: &mut E,
) -> io::Result<u8>
where
    T: Write + ?Sized,
    E: Write + ?Sized,
{
    match outcome {
        Ok(status) => {
            writeln!(out, "Status: {}", status.status)?;
            Ok(0)
        }
        Err(error) => {
            writeln!(err, "error: {error}")?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::client::testing::{FakeResponse, FakeTransport, assert_param};
    use crate::domain::{MessageText, Recipient, Sender};

    use super::*;

    fn notifier(transport: FakeTransport) -> Notifier {
        Notifier::new(VonageClient::with_transport(
            Credentials::new("abc123", "s3cr3t"),
            "https://example.invalid/sms/json",
            Arc::new(transport),
        ))
    }

    fn request() -> SendSms {
        SendSms::new(
            Sender::new("447700900001"),
            Recipient::new("447700900000"),
            MessageText::new("This is a message sent from Rust!"),
        )
    }

    #[tokio::test]
    async fn success_reports_first_segment_status_and_exit_code_zero() {
        let transport = FakeTransport::new(200, r#"{"messages":[{"status":"0"}]}"#);
        let outcome = notifier(transport.clone())
            .send(request())
            .await
            .map_err(Error::from);

        let status = outcome.as_ref().unwrap();
        assert_eq!(status.status.as_str(), "0");
        assert_eq!(status.segments, 1);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report(&outcome, &mut out, &mut err).unwrap();
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "Status: 0\n");
        assert!(err.is_empty());
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn multi_segment_message_surfaces_first_segment_only() {
        let json = r#"
        {
          "message-count": "2",
          "messages": [
            {"status": "0", "message-id": "A1", "remaining-balance": "9.50"},
            {"status": "0", "message-id": "A2", "remaining-balance": "9.45"}
          ]
        }
        "#;
        let status = notifier(FakeTransport::new(200, json))
            .send(request())
            .await
            .unwrap();
        assert_eq!(status.message_id, Some(MessageId::new("A1")));
        assert_eq!(status.remaining_balance.as_deref(), Some("9.50"));
        assert_eq!(status.segments, 2);
    }

    #[tokio::test]
    async fn http_401_fails_with_non_zero_exit_and_no_status_output() {
        let transport = FakeTransport::new(401, r#"{"error":"unauthorized"}"#);
        let outcome = notifier(transport.clone())
            .send(request())
            .await
            .map_err(Error::from);
        assert!(matches!(
            outcome,
            Err(Error::Send(SendError::HttpStatus { status: 401, .. }))
        ));

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report(&outcome, &mut out, &mut err).unwrap();
        assert_ne!(code, 0);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error: unexpected HTTP status: 401: {\"error\":\"unauthorized\"}\n"
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn transient_failures_issue_exactly_one_call() {
        let failures = [
            FakeResponse::TransportError("timed out".to_owned()),
            FakeResponse::Http {
                status: 502,
                body: "bad gateway".to_owned(),
            },
            FakeResponse::Http {
                status: 200,
                body: r#"{"messages":[{"status":"5","error-text":"Internal Error"}]}"#.to_owned(),
            },
        ];

        for failure in failures {
            let transport = FakeTransport::with_response(failure);
            let result = notifier(transport.clone()).send(request()).await;
            assert!(result.is_err());
            assert_eq!(transport.calls(), 1);
        }
    }

    #[tokio::test]
    async fn request_fields_reach_the_wire_unmodified() {
        let transport = FakeTransport::new(200, r#"{"messages":[{"status":"0"}]}"#);
        let request = SendSms::new(
            Sender::new(" Acme "),
            Recipient::new("+44 (0) 7700 900000"),
            MessageText::new("  two  spaces  "),
        );
        notifier(transport.clone()).send(request).await.unwrap();

        let (_, params) = transport.last_request();
        assert_param(&params, "from", " Acme ");
        assert_param(&params, "to", "+44 (0) 7700 900000");
        assert_param(&params, "text", "  two  spaces  ");
        assert_param(&params, "api_key", "abc123");
        assert_param(&params, "api_secret", "s3cr3t");
    }

    #[test]
    fn from_config_applies_endpoint_override() {
        let config = Config::from_lookup(|var| match var {
            "SMS_ENDPOINT" => Some("http://127.0.0.1:9000/sms/json".to_owned()),
            "MESSAGE_TEXT" => None,
            _ => Some("x".to_owned()),
        })
        .unwrap();
        assert!(Notifier::from_config(&config).is_ok());

        let config = Config {
            endpoint: Some("::not a url::".to_owned()),
            ..config
        };
        assert!(matches!(
            Notifier::from_config(&config),
            Err(SendError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn http_failure_report_includes_provider_reply() {
        let outcome: Result<DeliveryStatus, Error> = Err(Error::Send(SendError::HttpStatus {
            status: 401,
            body: Some("Bad Credentials: api_key rejected".to_owned()),
        }));
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(report(&outcome, &mut out, &mut err).unwrap(), 1);
        assert!(out.is_empty());
        let stderr = String::from_utf8(err).unwrap();
        assert!(
            stderr.contains("Bad Credentials: api_key rejected"),
            "provider reply missing from stderr: {stderr:?}"
        );
    }

    #[test]
    fn config_errors_are_reported_on_stderr() {
        let outcome: Result<DeliveryStatus, Error> = Err(Error::Config(
            crate::config::ConfigError::Missing { var: "API_KEY" },
        ));
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(report(&outcome, &mut out, &mut err).unwrap(), 1);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error: API_KEY environment variable is required\n"
        );
    }
}
