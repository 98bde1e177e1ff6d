//! Typed Rust client for the Kavenegar SMS and voice HTTP API.
//!
//! The crate has three layers: a domain layer of validated types, a transport
//! layer for form encoding and the response envelope, and a client layer that
//! dispatches `POST {endpoint}/{apikey}/{scope}/{method}.json` calls.
//!
//! ```rust,no_run
//! use kavenegar::{ApiKey, KavenegarClient, MessageText, Receptor, SendOptions, SendSms, Sender};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kavenegar::KavenegarError> {
//!     let client = KavenegarClient::new(ApiKey::new("...")?);
//!     let request = SendSms::to_one(
//!         Sender::new("10004346")?,
//!         Receptor::new("09121234567")?,
//!         MessageText::new("hello")?,
//!         SendOptions::default(),
//!     )?;
//!     if let Some(result) = client.send_single(request).await? {
//!         println!("{} -> {}", result.message_id, result.status_text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Endpoints without a typed method can be called through
//! [`KavenegarClient::execute`] with a [`FormParams`] body.
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, DEFAULT_ENDPOINT, HttpResponse, HttpTransport, KavenegarClient,
    KavenegarClientBuilder, KavenegarError,
};
pub use domain::{
    AccountConfig, AccountConfigResult, AccountInfoResult, ApiKey, ApiLogs, ArrayMessage,
    CallMakeTts, CallOptions, CountInbox, CountInboxResult, CountOutbox, CountOutboxResult,
    CountPostalCodeResult, DateResult, DeliveryStatus, KnownDeliveryStatus, KnownStatusCode,
    LatestOutbox, LineNumber, LocalId, LocalIds, MessageId, MessageIds, MessageText, MessageType,
    PhoneNumber, ReadFilter, Receive, ReceiveResult, Receptor, SelectOutbox, SendArray,
    SendArrayOptions, SendByPostalCode, SendOptions, SendResult, SendSms, Sender, SpacedToken,
    StatusCode, StatusLocalMessageIdResult, StatusResult, Template, Toggle, Token, UnixTimestamp,
    ValidationError, VerifyLookup, VerifyLookupOptions, VerifyLookupType,
};
pub use transport::FormParams;
