use crate::domain::value::{MessageId, StatusCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub message_count: usize,
    pub messages: Vec<SmsSegment>,
}

impl SendSmsResponse {
    /// The first message segment, if the provider returned any.
    pub fn first(&self) -> Option<&SmsSegment> {
        self.messages.first()
    }
}

/// Result for one segment of a possibly multi-part message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsSegment {
    pub status: StatusCode,
    pub message_id: Option<MessageId>,
    pub to: Option<String>,
    pub remaining_balance: Option<String>,
    pub message_price: Option<String>,
    pub network: Option<String>,
    pub client_ref: Option<String>,
    pub error_text: Option<String>,
}
