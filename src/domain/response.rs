use serde::Deserialize;

use crate::domain::lenient;
use crate::domain::value::{DeliveryStatus, MessageId, UnixTimestamp};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// One message as returned by the send, select and outbox operations.
pub struct SendResult {
    #[serde(rename = "messageid", deserialize_with = "lenient::int")]
    pub message_id: MessageId,
    #[serde(deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(deserialize_with = "lenient::int")]
    pub status: DeliveryStatus,
    #[serde(rename = "statustext", deserialize_with = "lenient::text")]
    pub status_text: String,
    #[serde(deserialize_with = "lenient::text")]
    pub sender: String,
    #[serde(deserialize_with = "lenient::text")]
    pub receptor: String,
    #[serde(deserialize_with = "lenient::int")]
    pub date: UnixTimestamp,
    /// Cost in rials.
    #[serde(deserialize_with = "lenient::int")]
    pub cost: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StatusResult {
    #[serde(rename = "messageid", deserialize_with = "lenient::int")]
    pub message_id: MessageId,
    #[serde(deserialize_with = "lenient::int")]
    pub status: DeliveryStatus,
    #[serde(rename = "statustext", deserialize_with = "lenient::text")]
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StatusLocalMessageIdResult {
    #[serde(rename = "messageid", deserialize_with = "lenient::int")]
    pub message_id: MessageId,
    #[serde(rename = "localid", deserialize_with = "lenient::text")]
    pub local_id: String,
    #[serde(deserialize_with = "lenient::int")]
    pub status: DeliveryStatus,
    #[serde(rename = "statustext", deserialize_with = "lenient::text")]
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CountOutboxResult {
    #[serde(rename = "startdate", deserialize_with = "lenient::int")]
    pub start_date: UnixTimestamp,
    #[serde(rename = "enddate", deserialize_with = "lenient::int")]
    pub end_date: UnixTimestamp,
    /// Total SMS parts (long messages count once per part).
    #[serde(rename = "sumpart", deserialize_with = "lenient::int")]
    pub sum_part: i64,
    #[serde(rename = "sumcount", deserialize_with = "lenient::int")]
    pub sum_count: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub cost: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CountInboxResult {
    #[serde(rename = "startdate", deserialize_with = "lenient::int")]
    pub start_date: UnixTimestamp,
    #[serde(rename = "enddate", deserialize_with = "lenient::int")]
    pub end_date: UnixTimestamp,
    #[serde(rename = "sumcount", deserialize_with = "lenient::int")]
    pub sum_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Inbound message.
pub struct ReceiveResult {
    #[serde(rename = "messageid", deserialize_with = "lenient::int")]
    pub message_id: MessageId,
    #[serde(deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(deserialize_with = "lenient::text")]
    pub sender: String,
    #[serde(deserialize_with = "lenient::text")]
    pub receptor: String,
    #[serde(deserialize_with = "lenient::int")]
    pub date: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Subscriber count of one carrier segment under a postal code.
pub struct CountPostalCodeResult {
    #[serde(deserialize_with = "lenient::text")]
    pub section: String,
    #[serde(deserialize_with = "lenient::int")]
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AccountInfoResult {
    /// Remaining credit in rials.
    #[serde(rename = "remaincredit", deserialize_with = "lenient::int")]
    pub remain_credit: i64,
    #[serde(rename = "expiredate", deserialize_with = "lenient::int")]
    pub expire_date: UnixTimestamp,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub account_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Account settings after an `account/config` call.
pub struct AccountConfigResult {
    #[serde(rename = "apilogs", deserialize_with = "lenient::text")]
    pub api_logs: String,
    #[serde(rename = "dailyreport", deserialize_with = "lenient::text")]
    pub daily_report: String,
    #[serde(rename = "debugmode", deserialize_with = "lenient::text")]
    pub debug_mode: String,
    #[serde(rename = "defaultsender", deserialize_with = "lenient::text")]
    pub default_sender: String,
    #[serde(rename = "mincreditalarm", deserialize_with = "lenient::text")]
    pub min_credit_alarm: String,
    #[serde(rename = "resendfailed", deserialize_with = "lenient::text")]
    pub resend_failed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
/// Server clock as returned by `utils/getdate`.
pub struct DateResult {
    #[serde(deserialize_with = "lenient::text")]
    pub datetime: String,
    #[serde(deserialize_with = "lenient::int")]
    pub year: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub month: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub day: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub hour: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub minute: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub second: i64,
    #[serde(rename = "unixtime", deserialize_with = "lenient::int")]
    pub unix_time: UnixTimestamp,
}
