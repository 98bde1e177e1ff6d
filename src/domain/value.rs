use std::fmt;

use chrono::{DateTime, Utc};
use phonenumber::country;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::validation::ValidationError;

#[derive(Clone)]
/// Kavenegar API key.
///
/// Invariant: non-empty after trimming. The value is kept behind [`SecretString`]
/// and never printed by `Debug`.
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "apikey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Borrow the raw key. Only the dispatcher needs this, to build request paths.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender line number (`sender`).
///
/// Invariant: non-empty after trimming. The line must belong to the account.
pub struct Sender(String);

impl Sender {
    /// Form field name used by Kavenegar (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`Sender`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender line.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated recipient phone number as sent to Kavenegar (`receptor`).
///
/// Invariant: non-empty after trimming. No normalization happens here; parse into
/// [`PhoneNumber`] first if you want E.164 output.
pub struct Receptor(String);

impl Receptor {
    /// Form field name used by Kavenegar (`receptor`).
    pub const FIELD: &'static str = "receptor";

    /// Create a validated (non-empty) receptor.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Kavenegar.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Receptor {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing use the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Region assumed for numbers without a country prefix (`0912...`).
    pub const DEFAULT_REGION: country::Id = country::Id::IR;

    /// Parse a number, assuming [`PhoneNumber::DEFAULT_REGION`] for national input.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse_with_region(Some(Self::DEFAULT_REGION), input)
    }

    /// Parse and normalize a phone number into E.164.
    pub fn parse_with_region(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Receptor::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`message`).
///
/// Invariant: non-empty after trimming. The original value, whitespace included, is kept.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Kavenegar (`message`).
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// Kavenegar message id (`messageid`), as returned by the send operations.
pub struct MessageId(i64);

impl MessageId {
    /// Form field name used by Kavenegar (`messageid`).
    pub const FIELD: &'static str = "messageid";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for MessageId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Caller-chosen correlation id (`localid`) echoed back by the server.
///
/// Invariant: non-empty after trimming.
pub struct LocalId(String);

impl LocalId {
    /// Form field name used by Kavenegar (`localid`).
    pub const FIELD: &'static str = "localid";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Dedicated inbound line number (`linenumber`) used by inbox queries.
pub struct LineNumber(String);

impl LineNumber {
    /// Form field name used by Kavenegar (`linenumber`).
    pub const FIELD: &'static str = "linenumber";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Name of a verification template defined in the Kavenegar panel (`template`).
///
/// Invariant: non-empty after trimming.
pub struct Template(String);

impl Template {
    /// Form field name used by Kavenegar (`template`).
    pub const FIELD: &'static str = "template";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template token for `token`, `token2` and `token3`.
///
/// Invariant: non-empty and free of whitespace; the server rejects spaced values
/// in these slots.
pub struct Token(String);

impl Token {
    /// Form field name of the first token (`token`).
    pub const FIELD: &'static str = "token";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::ContainsWhitespace { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template token for `token10` and `token20`, which may contain spaces.
pub struct SpacedToken(String);

impl SpacedToken {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Token::FIELD,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// Unix timestamp in seconds, as used by every Kavenegar date field.
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// Value sent when no date is given.
    pub const NONE: Self = Self(0);

    pub fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Truncate a date to whole seconds.
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value.timestamp())
    }

    /// `None` ("no date") maps to [`UnixTimestamp::NONE`].
    pub fn from_optional(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::NONE, Self::from_datetime)
    }

    /// Convert back into a date; `None` when out of chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for UnixTimestamp {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// Kavenegar API status code from the response envelope (`return.status`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// The only success code.
    pub const OK: Self = Self(200);

    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    pub fn is_success(self) -> bool {
        self == Self::OK
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Documented Kavenegar API status codes.
///
/// Unknown codes stay available through [`StatusCode`].
pub enum KnownStatusCode {
    Ok,
    IncompleteParameters,
    AccountInactive,
    OperationFailed,
    InvalidApiKey,
    MethodNotFound,
    WrongHttpMethod,
    MissingRequiredParameters,
    AccessDenied,
    ServerUnavailable,
    InvalidReceptor,
    InvalidSender,
    MessageEmptyOrTooLong,
    TooManyReceptors,
    IndexOutOfRange,
    IpNotAllowed,
    InvalidDate,
    InsufficientCredit,
    ArrayLengthMismatch,
    LinkNotAllowed,
    InvalidCharacters,
    TemplateNotFound,
    AdvancedPlanRequired,
    CallNotPossibleForCode,
    InvalidCodeStructure,
    CodeParameterMissing,
    TooManyCalls,
    OwnerOnlyTestSend,
}

impl KnownStatusCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            200 => Self::Ok,
            400 => Self::IncompleteParameters,
            401 => Self::AccountInactive,
            402 => Self::OperationFailed,
            403 => Self::InvalidApiKey,
            404 => Self::MethodNotFound,
            405 => Self::WrongHttpMethod,
            406 => Self::MissingRequiredParameters,
            407 => Self::AccessDenied,
            409 => Self::ServerUnavailable,
            411 => Self::InvalidReceptor,
            412 => Self::InvalidSender,
            413 => Self::MessageEmptyOrTooLong,
            414 => Self::TooManyReceptors,
            415 => Self::IndexOutOfRange,
            416 => Self::IpNotAllowed,
            417 => Self::InvalidDate,
            418 => Self::InsufficientCredit,
            419 => Self::ArrayLengthMismatch,
            420 => Self::LinkNotAllowed,
            422 => Self::InvalidCharacters,
            424 => Self::TemplateNotFound,
            426 => Self::AdvancedPlanRequired,
            428 => Self::CallNotPossibleForCode,
            431 => Self::InvalidCodeStructure,
            432 => Self::CodeParameterMissing,
            451 => Self::TooManyCalls,
            501 => Self::OwnerOnlyTestSend,
            _ => return None,
        })
    }

    /// Whether this status is likely transient.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::ServerUnavailable | Self::TooManyCalls)
    }

    /// Whether this status points at the API key or the account itself.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::AccountInactive | Self::InvalidApiKey | Self::AccessDenied | Self::IpNotAllowed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
/// Per-message delivery status (`status` inside send/status results).
pub struct DeliveryStatus(i32);

impl DeliveryStatus {
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }

    pub fn known(self) -> Option<KnownDeliveryStatus> {
        KnownDeliveryStatus::from_code(self.0)
    }

    /// `true` once the message reached a state that will not change any more.
    pub fn is_final(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_final())
    }
}

impl From<i64> for DeliveryStatus {
    /// Out-of-range codes saturate at the `i32` bounds.
    fn from(value: i64) -> Self {
        Self(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KnownDeliveryStatus {
    Queued,
    Scheduled,
    SentToCarrier,
    Failed,
    Delivered,
    Undelivered,
    Cancelled,
    BlockedByReceptor,
    InvalidMessageId,
}

impl KnownDeliveryStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => Self::Queued,
            2 => Self::Scheduled,
            4 | 5 => Self::SentToCarrier,
            6 => Self::Failed,
            10 => Self::Delivered,
            11 => Self::Undelivered,
            13 => Self::Cancelled,
            14 => Self::BlockedByReceptor,
            100 => Self::InvalidMessageId,
            _ => return None,
        })
    }

    pub fn is_final(self) -> bool {
        !matches!(self, Self::Queued | Self::Scheduled | Self::SentToCarrier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Where the handset stores the message (`type`). Sent as its integer value.
pub enum MessageType {
    /// Shown on screen, not stored.
    Flash,
    #[default]
    MobileMemory,
    SimMemory,
    AppMemory,
}

impl MessageType {
    /// Form field name used by Kavenegar (`type`).
    pub const FIELD: &'static str = "type";

    pub fn as_i32(self) -> i32 {
        match self {
            Self::Flash => 0,
            Self::MobileMemory => 1,
            Self::SimMemory => 2,
            Self::AppMemory => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Delivery channel for `verify/lookup` (`type`).
pub enum VerifyLookupType {
    #[default]
    Sms,
    Call,
}

impl VerifyLookupType {
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Sms => 1,
            Self::Call => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Inbox read filter (`isread`).
pub enum ReadFilter {
    #[default]
    Unread,
    Read,
}

impl ReadFilter {
    /// Form field name used by Kavenegar (`isread`).
    pub const FIELD: &'static str = "isread";

    pub fn as_i32(self) -> i32 {
        match self {
            Self::Unread => 0,
            Self::Read => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// API call logging mode for `account/config` (`apilogs`).
pub enum ApiLogs {
    JustFaults,
    Enabled,
    Disabled,
}

impl ApiLogs {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JustFaults => "justfaults",
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// On/off account setting for `account/config`.
pub enum Toggle {
    Enabled,
    Disabled,
}

impl Toggle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::Disabled }
    }
}
