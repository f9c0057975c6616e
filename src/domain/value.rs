use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Vonage account API key (`api_key`).
///
/// Carried exactly as provided; the provider is the one to reject bad keys.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Vonage (`api_key`).
    pub const FIELD: &'static str = "api_key";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Vonage account API secret (`api_secret`).
///
/// `Debug` output is redacted so the secret never reaches logs.
pub struct ApiSecret(String);

impl ApiSecret {
    /// Form field name used by Vonage (`api_secret`).
    pub const FIELD: &'static str = "api_secret";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the secret as provided.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender of the message (`from`): a phone number or an alphanumeric sender id.
pub struct Sender(String);

impl Sender {
    /// Form field name used by Vonage (`from`).
    pub const FIELD: &'static str = "from";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number (`to`).
///
/// No normalization is applied; the value is sent byte for byte.
pub struct Recipient(String);

impl Recipient {
    /// Form field name used by Vonage (`to`).
    pub const FIELD: &'static str = "to";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS body (`text`). Whitespace is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Vonage (`text`).
    pub const FIELD: &'static str = "text";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-supplied reference echoed back in the response and receipts (`client-ref`).
///
/// Invariant: at most [`ClientRef::MAX_CHARS`] characters.
pub struct ClientRef(String);

impl ClientRef {
    /// Form field name used by Vonage (`client-ref`).
    pub const FIELD: &'static str = "client-ref";

    /// Maximum length in characters.
    pub const MAX_CHARS: usize = 100;

    /// Create a validated [`ClientRef`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ValidationError::ClientRefTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Webhook URL for delivery receipts (`callback`).
///
/// Invariant: parses as an absolute URL.
pub struct CallbackUrl(url::Url);

impl CallbackUrl {
    /// Form field name used by Vonage (`callback`).
    pub const FIELD: &'static str = "callback";

    /// Parse and validate a callback URL.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        url::Url::parse(value)
            .map(Self)
            .map_err(|_| ValidationError::InvalidUrl {
                field: Self::FIELD,
                input: value.to_owned(),
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message lifetime in milliseconds (`ttl`).
///
/// Invariant: `20_000..=604_800_000` (20 seconds to 7 days).
pub struct TtlMillis(u32);

impl TtlMillis {
    /// Form field name used by Vonage (`ttl`).
    pub const FIELD: &'static str = "ttl";

    /// Minimum allowed TTL value.
    pub const MIN: u32 = 20_000;
    /// Maximum allowed TTL value.
    pub const MAX: u32 = 604_800_000;

    /// Create a validated TTL value.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::TtlOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Provider-assigned id of one message segment (`message-id`).
pub struct MessageId(String);

impl MessageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Vonage per-segment status code.
///
/// The provider sends codes as strings (`"0"` means accepted); the value is preserved
/// as-is even when it is not a number or unknown to this crate.
pub struct StatusCode(String);

impl StatusCode {
    /// Status returned for an accepted message segment.
    pub const SUCCESS: &'static str = "0";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code exactly as returned by the provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(&self) -> Option<KnownStatusCode> {
        self.0
            .trim()
            .parse::<u16>()
            .ok()
            .and_then(KnownStatusCode::from_code)
    }

    /// Returns `true` if the provider accepted the segment.
    pub fn is_success(&self) -> bool {
        self.0.trim() == Self::SUCCESS
    }

    /// Returns `true` if the code usually indicates a transient condition.
    pub fn is_retryable(&self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if the code indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Vonage SMS API status codes.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Success,
    Throttled,
    MissingParameters,
    InvalidParameters,
    InvalidCredentials,
    InternalError,
    InvalidMessage,
    NumberBarred,
    PartnerAccountBarred,
    PartnerQuotaViolation,
    TooManyExistingBinds,
    AccountNotEnabledForHttp,
    MessageTooLong,
    InvalidSignature,
    InvalidSenderAddress,
    InvalidNetworkCode,
    InvalidCallbackUrl,
    NonWhitelistedDestination,
    SignatureAndApiSecretDisallowed,
    NumberDeactivated,
}

impl KnownStatusCode {
    /// Convert a raw Vonage status code into a known variant.
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            0 => Self::Success,
            1 => Self::Throttled,
            2 => Self::MissingParameters,
            3 => Self::InvalidParameters,
            4 => Self::InvalidCredentials,
            5 => Self::InternalError,
            6 => Self::InvalidMessage,
            7 => Self::NumberBarred,
            8 => Self::PartnerAccountBarred,
            9 => Self::PartnerQuotaViolation,
            10 => Self::TooManyExistingBinds,
            11 => Self::AccountNotEnabledForHttp,
            12 => Self::MessageTooLong,
            14 => Self::InvalidSignature,
            15 => Self::InvalidSenderAddress,
            22 => Self::InvalidNetworkCode,
            23 => Self::InvalidCallbackUrl,
            29 => Self::NonWhitelistedDestination,
            32 => Self::SignatureAndApiSecretDisallowed,
            33 => Self::NumberDeactivated,
            _ => return None,
        })
    }

    /// Whether this status is likely transient and could succeed on a later attempt.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Throttled | Self::InternalError)
    }

    /// Whether this status indicates invalid or disallowed credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::InvalidSignature | Self::SignatureAndApiSecretDisallowed
        )
    }
}
