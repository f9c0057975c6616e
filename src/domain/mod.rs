//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{MessageType, SendOptions, SendSms};
pub use response::{SendSmsResponse, SmsSegment};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ApiSecret, CallbackUrl, ClientRef, KnownStatusCode, MessageId, MessageText, Recipient,
    Sender, StatusCode, TtlMillis,
};
