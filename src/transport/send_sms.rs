use serde::Deserialize;

use crate::domain::{
    CallbackUrl, ClientRef, MessageId, MessageText, MessageType, Recipient, SendOptions, SendSms,
    SendSmsResponse, Sender, SmsSegment, StatusCode, TtlMillis,
};

const STATUS_REPORT_REQ_FIELD: &str = "status-report-req";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid message-count: {value}")]
    InvalidMessageCount { value: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SendSmsJsonResponse {
    #[serde(default)]
    message_count: Option<TransportText>,
    #[serde(default)]
    messages: Vec<SegmentJsonResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SegmentJsonResult {
    status: TransportText,
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    remaining_balance: Option<TransportText>,
    #[serde(default)]
    message_price: Option<TransportText>,
    #[serde(default)]
    network: Option<String>,
    #[serde(default)]
    client_ref: Option<String>,
    #[serde(default)]
    error_text: Option<String>,
}

/// Vonage documents these fields as strings, but numbers are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportText {
    String(String),
    Number(serde_json::Number),
}

impl TransportText {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let mut params = vec![
        (Sender::FIELD.to_owned(), request.from().as_str().to_owned()),
        (Recipient::FIELD.to_owned(), request.to().as_str().to_owned()),
        (
            MessageText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
    ];
    push_options(&mut params, request.options());
    params
}

fn push_options(params: &mut Vec<(String, String)>, options: &SendOptions) {
    if options.message_type != MessageType::Text {
        params.push((
            MessageType::FIELD.to_owned(),
            options.message_type.as_str().to_owned(),
        ));
    }
    if let Some(client_ref) = options.client_ref.as_ref() {
        params.push((ClientRef::FIELD.to_owned(), client_ref.as_str().to_owned()));
    }
    if let Some(callback) = options.callback.as_ref() {
        params.push((CallbackUrl::FIELD.to_owned(), callback.as_str().to_owned()));
    }
    if let Some(ttl) = options.ttl {
        params.push((TtlMillis::FIELD.to_owned(), ttl.value().to_string()));
    }
    if let Some(status_report_req) = options.status_report_req {
        params.push((
            STATUS_REPORT_REQ_FIELD.to_owned(),
            status_report_req.to_string(),
        ));
    }
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;

    let messages = parsed
        .messages
        .into_iter()
        .map(|segment| SmsSegment {
            status: StatusCode::new(segment.status.into_string()),
            message_id: segment.message_id.map(MessageId::new),
            to: segment.to,
            remaining_balance: segment.remaining_balance.map(TransportText::into_string),
            message_price: segment.message_price.map(TransportText::into_string),
            network: segment.network,
            client_ref: segment.client_ref,
            error_text: segment.error_text,
        })
        .collect::<Vec<_>>();

    let message_count = match parsed.message_count {
        Some(count) => {
            let value = count.into_string();
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| TransportError::InvalidMessageCount { value })?
        }
        None => messages.len(),
    };

    Ok(SendSmsResponse {
        message_count,
        messages,
    })
}
