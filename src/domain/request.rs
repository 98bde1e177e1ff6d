use chrono::{DateTime, Utc};

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    ApiLogs, DeliveryStatus, LineNumber, LocalId, MessageId, MessageText, MessageType,
    ReadFilter, Receptor, Sender, SpacedToken, Template, Toggle, Token, VerifyLookupType,
};

/// Upper bound on receptors per `sms/send`, `sms/sendarray` and `call/maketts` request.
pub const MAX_RECEPTORS: usize = 200;

/// Upper bound on ids per `sms/status`, `sms/select`, `sms/cancel` and
/// `sms/statuslocalmessageid` request.
pub const MAX_MESSAGE_IDS: usize = 500;

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub message_type: MessageType,
    /// Scheduled send time; `None` sends immediately.
    pub date: Option<DateTime<Utc>>,
    /// One id per receptor, or empty.
    pub local_ids: Vec<LocalId>,
}

#[derive(Debug, Clone)]
pub struct SendSms {
    sender: Sender,
    receptors: Vec<Receptor>,
    message: MessageText,
    options: SendOptions,
}

impl SendSms {
    pub fn to_one(
        sender: Sender,
        receptor: Receptor,
        message: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        Self::to_many(sender, vec![receptor], message, options)
    }

    pub fn to_many(
        sender: Sender,
        receptors: Vec<Receptor>,
        message: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        check_receptors(&receptors)?;
        check_local_ids(&options.local_ids, receptors.len())?;
        Ok(Self {
            sender,
            receptors,
            message,
            options,
        })
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn receptors(&self) -> &[Receptor] {
        &self.receptors
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// One row of an `sms/sendarray` request.
pub struct ArrayMessage {
    pub sender: Sender,
    pub receptor: Receptor,
    pub message: MessageText,
    pub message_type: MessageType,
}

impl ArrayMessage {
    pub fn new(sender: Sender, receptor: Receptor, message: MessageText) -> Self {
        Self {
            sender,
            receptor,
            message,
            message_type: MessageType::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendArrayOptions {
    pub date: Option<DateTime<Utc>>,
    /// One id per message, or empty.
    pub local_message_ids: Vec<LocalId>,
}

#[derive(Debug, Clone)]
/// Distinct messages to distinct receptors in a single call.
///
/// Rows are kept together so the sender/receptor/message/type lists sent on the
/// wire always have equal length.
pub struct SendArray {
    messages: Vec<ArrayMessage>,
    options: SendArrayOptions,
}

impl SendArray {
    pub fn new(
        messages: Vec<ArrayMessage>,
        options: SendArrayOptions,
    ) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::Empty {
                field: Receptor::FIELD,
            });
        }
        if messages.len() > MAX_RECEPTORS {
            return Err(ValidationError::TooMany {
                field: Receptor::FIELD,
                max: MAX_RECEPTORS,
                actual: messages.len(),
            });
        }
        check_local_ids(&options.local_message_ids, messages.len())?;
        Ok(Self { messages, options })
    }

    pub fn messages(&self) -> &[ArrayMessage] {
        &self.messages
    }

    pub fn options(&self) -> &SendArrayOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-empty list of message ids for status, select and cancel.
pub struct MessageIds(Vec<MessageId>);

impl MessageIds {
    pub fn new(ids: Vec<MessageId>) -> Result<Self, ValidationError> {
        check_id_count(MessageId::FIELD, ids.len())?;
        Ok(Self(ids))
    }

    pub fn one(id: MessageId) -> Self {
        Self(vec![id])
    }

    pub fn as_slice(&self) -> &[MessageId] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-empty list of local ids for `sms/statuslocalmessageid`.
pub struct LocalIds(Vec<LocalId>);

impl LocalIds {
    pub fn new(ids: Vec<LocalId>) -> Result<Self, ValidationError> {
        check_id_count(LocalId::FIELD, ids.len())?;
        Ok(Self(ids))
    }

    pub fn one(id: LocalId) -> Self {
        Self(vec![id])
    }

    pub fn as_slice(&self) -> &[LocalId] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct SelectOutbox {
    pub start: DateTime<Utc>,
    /// `None` leaves the range open-ended.
    pub end: Option<DateTime<Utc>>,
    pub sender: Option<Sender>,
}

impl SelectOutbox {
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start,
            end: None,
            sender: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LatestOutbox {
    pub page_size: u32,
    pub sender: Option<Sender>,
}

impl LatestOutbox {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            sender: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CountOutbox {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    /// Count only messages currently in this delivery status.
    pub status: Option<DeliveryStatus>,
}

impl CountOutbox {
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start,
            end: None,
            status: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CountInbox {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub line_number: LineNumber,
    pub read: ReadFilter,
}

impl CountInbox {
    pub fn since(start: DateTime<Utc>, line_number: LineNumber) -> Self {
        Self {
            start,
            end: None,
            line_number,
            read: ReadFilter::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Receive {
    pub line_number: LineNumber,
    pub read: ReadFilter,
}

impl Receive {
    pub fn new(line_number: LineNumber, read: ReadFilter) -> Self {
        Self { line_number, read }
    }
}

#[derive(Debug, Clone)]
/// Broadcast to subscribers registered under a postal code.
///
/// Start indices and counts select a slice of each carrier's subscriber list
/// (MCI and MTN), as returned by `sms/countpostalcode`.
pub struct SendByPostalCode {
    pub postal_code: u64,
    pub sender: Sender,
    pub message: MessageText,
    pub mci_start_index: u64,
    pub mci_count: u64,
    pub mtn_start_index: u64,
    pub mtn_count: u64,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
/// Account settings to change; `None` leaves a setting untouched.
pub struct AccountConfig {
    pub api_logs: Option<ApiLogs>,
    pub daily_report: Option<Toggle>,
    pub debug_mode: Option<Toggle>,
    pub default_sender: Option<Sender>,
    pub min_credit_alarm: Option<u64>,
    pub resend_failed: Option<Toggle>,
}

#[derive(Debug, Clone, Default)]
pub struct VerifyLookupOptions {
    pub token2: Option<Token>,
    pub token3: Option<Token>,
    pub token10: Option<SpacedToken>,
    pub token20: Option<SpacedToken>,
    pub lookup_type: VerifyLookupType,
}

#[derive(Debug, Clone)]
/// Templated one-time-code send to a single receptor.
pub struct VerifyLookup {
    pub receptor: Receptor,
    pub token: Token,
    pub template: Template,
    pub options: VerifyLookupOptions,
}

impl VerifyLookup {
    pub fn new(receptor: Receptor, token: Token, template: Template) -> Self {
        Self {
            receptor,
            token,
            template,
            options: VerifyLookupOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Scheduled call time; unlike SMS sends, nothing is sent when `None`.
    pub date: Option<DateTime<Utc>>,
    pub local_ids: Vec<LocalId>,
}

#[derive(Debug, Clone)]
/// Text-to-speech voice call.
pub struct CallMakeTts {
    receptors: Vec<Receptor>,
    message: MessageText,
    options: CallOptions,
}

impl CallMakeTts {
    pub fn to_one(
        receptor: Receptor,
        message: MessageText,
        options: CallOptions,
    ) -> Result<Self, ValidationError> {
        Self::to_many(vec![receptor], message, options)
    }

    pub fn to_many(
        receptors: Vec<Receptor>,
        message: MessageText,
        options: CallOptions,
    ) -> Result<Self, ValidationError> {
        check_receptors(&receptors)?;
        check_local_ids(&options.local_ids, receptors.len())?;
        Ok(Self {
            receptors,
            message,
            options,
        })
    }

    pub fn receptors(&self) -> &[Receptor] {
        &self.receptors
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &CallOptions {
        &self.options
    }
}

fn check_receptors(receptors: &[Receptor]) -> Result<(), ValidationError> {
    if receptors.is_empty() {
        return Err(ValidationError::Empty {
            field: Receptor::FIELD,
        });
    }
    if receptors.len() > MAX_RECEPTORS {
        return Err(ValidationError::TooMany {
            field: Receptor::FIELD,
            max: MAX_RECEPTORS,
            actual: receptors.len(),
        });
    }
    Ok(())
}

fn check_local_ids(local_ids: &[LocalId], expected: usize) -> Result<(), ValidationError> {
    if !local_ids.is_empty() && local_ids.len() != expected {
        return Err(ValidationError::LengthMismatch {
            field: LocalId::FIELD,
            expected,
            actual: local_ids.len(),
        });
    }
    Ok(())
}

fn check_id_count(field: &'static str, actual: usize) -> Result<(), ValidationError> {
    if actual == 0 {
        return Err(ValidationError::Empty { field });
    }
    if actual > MAX_MESSAGE_IDS {
        return Err(ValidationError::TooMany {
            field,
            max: MAX_MESSAGE_IDS,
            actual,
        });
    }
    Ok(())
}
