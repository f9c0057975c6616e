//! Send a single SMS through the Vonage (Nexmo) SMS API.
//!
//! The crate follows a layered design: a domain layer of plain types, a transport
//! layer for the wire format, a client layer that performs the one HTTP call, and a
//! notifier that turns the provider response into a [`DeliveryStatus`].
//!
//! ```rust,no_run
//! use smsnotify::{Credentials, MessageText, Recipient, SendSms, Sender};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), smsnotify::SendError> {
//!     let credentials = Credentials::new("api-key", "api-secret");
//!     let request = SendSms::new(
//!         Sender::new("447700900001"),
//!         Recipient::new("447700900000"),
//!         MessageText::new("hello"),
//!     );
//!     let status = smsnotify::notifier::send(credentials, request).await?;
//!     println!("Status: {}", status.status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod notifier;
mod transport;

pub use client::{Credentials, SendError, VonageClient, VonageClientBuilder};
pub use config::{Config, ConfigError};
pub use domain::{
    ApiKey, ApiSecret, CallbackUrl, ClientRef, KnownStatusCode, MessageId, MessageText,
    MessageType, Recipient, SendOptions, SendSms, SendSmsResponse, Sender, SmsSegment, StatusCode,
    TtlMillis, ValidationError,
};
pub use notifier::{DeliveryStatus, Error, Notifier};
