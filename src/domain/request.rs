use crate::domain::value::{CallbackUrl, ClientRef, MessageText, Recipient, Sender, TtlMillis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    #[default]
    Text,
    Unicode,
}

impl MessageType {
    pub const FIELD: &'static str = "type";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Unicode => "unicode",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub message_type: MessageType,
    pub client_ref: Option<ClientRef>,
    pub callback: Option<CallbackUrl>,
    pub ttl: Option<TtlMillis>,
    pub status_report_req: Option<bool>,
}

/// One outbound SMS: sender, recipient and body, passed through unmodified.
#[derive(Debug, Clone)]
pub struct SendSms {
    from: Sender,
    to: Recipient,
    text: MessageText,
    options: SendOptions,
}

impl SendSms {
    pub fn new(from: Sender, to: Recipient, text: MessageText) -> Self {
        Self::with_options(from, to, text, SendOptions::default())
    }

    pub fn with_options(
        from: Sender,
        to: Recipient,
        text: MessageText,
        options: SendOptions,
    ) -> Self {
        Self {
            from,
            to,
            text,
            options,
        }
    }

    pub fn from(&self) -> &Sender {
        &self.from
    }

    pub fn to(&self) -> &Recipient {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
