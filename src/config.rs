//! Process configuration, read once at startup and passed into the notifier.

use std::env::VarError;

use crate::client::Credentials;
use crate::domain::{MessageText, Recipient, SendSms, Sender};

pub const API_KEY_VAR: &str = "API_KEY";
pub const API_SECRET_VAR: &str = "API_SECRET";
pub const FROM_NUMBER_VAR: &str = "FROM_NUMBER";
pub const TO_NUMBER_VAR: &str = "TO_NUMBER";
pub const MESSAGE_TEXT_VAR: &str = "MESSAGE_TEXT";
pub const SMS_ENDPOINT_VAR: &str = "SMS_ENDPOINT";

pub const DEFAULT_MESSAGE_TEXT: &str = "This is a message sent from Rust!";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} environment variable is required")]
    Missing { var: &'static str },

    #[error("{var} environment variable is not valid unicode")]
    NotUnicode { var: &'static str },

    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub from: Sender,
    pub to: Recipient,
    pub text: MessageText,
    /// Overrides the provider endpoint when set.
    pub endpoint: Option<String>,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    ///
    /// Variables already set in the environment win over `.env` entries.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        Self::try_from_lookup(|var| match std::env::var(var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
        })
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Values are used verbatim: empty strings count as present and nothing is trimmed.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        Self::try_from_lookup(|var| Ok(lookup(var)))
    }

    fn try_from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let mut required = |var: &'static str| -> Result<String, ConfigError> {
            lookup(var)?.ok_or(ConfigError::Missing { var })
        };

        let api_key = required(API_KEY_VAR)?;
        let api_secret = required(API_SECRET_VAR)?;
        let from = required(FROM_NUMBER_VAR)?;
        let to = required(TO_NUMBER_VAR)?;

        let text = lookup(MESSAGE_TEXT_VAR)?.unwrap_or_else(|| DEFAULT_MESSAGE_TEXT.to_owned());
        let endpoint = lookup(SMS_ENDPOINT_VAR)?;

        Ok(Self {
            credentials: Credentials::new(api_key, api_secret),
            from: Sender::new(from),
            to: Recipient::new(to),
            text: MessageText::new(text),
            endpoint,
        })
    }

    /// The message this configuration describes.
    pub fn request(&self) -> SendSms {
        SendSms::new(self.from.clone(), self.to.clone(), self.text.clone())
    }
}
