//! Domain layer: strong types with validation and invariants (no I/O).

mod lenient;
mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AccountConfig, ArrayMessage, CallMakeTts, CallOptions, CountInbox, CountOutbox, LatestOutbox,
    LocalIds, MAX_MESSAGE_IDS, MAX_RECEPTORS, MessageIds, Receive, SelectOutbox, SendArray,
    SendArrayOptions, SendByPostalCode, SendOptions, SendSms, VerifyLookup, VerifyLookupOptions,
};
pub use response::{
    AccountConfigResult, AccountInfoResult, CountInboxResult, CountOutboxResult,
    CountPostalCodeResult, DateResult, ReceiveResult, SendResult, StatusLocalMessageIdResult,
    StatusResult,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ApiLogs, DeliveryStatus, KnownDeliveryStatus, KnownStatusCode, LineNumber, LocalId,
    MessageId, MessageText, MessageType, PhoneNumber, ReadFilter, Receptor, Sender, SpacedToken,
    StatusCode, Template, Toggle, Token, UnixTimestamp, VerifyLookupType,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> Sender {
        Sender::new("10004346").unwrap()
    }

    fn receptor(raw: &str) -> Receptor {
        Receptor::new(raw).unwrap()
    }

    fn text() -> MessageText {
        MessageText::new("hello").unwrap()
    }

    #[test]
    fn send_sms_requires_receptors() {
        let err = SendSms::to_many(sender(), Vec::new(), text(), SendOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: Receptor::FIELD
            }
        );
    }

    #[test]
    fn send_sms_receptor_limit_is_enforced() {
        let receptors = vec![receptor("09121234567"); MAX_RECEPTORS + 1];
        let err =
            SendSms::to_many(sender(), receptors, text(), SendOptions::default()).unwrap_err();
        assert!(matches!(err, ValidationError::TooMany { .. }));
    }

    #[test]
    fn send_sms_local_ids_must_match_receptors() {
        let options = SendOptions {
            local_ids: vec![LocalId::new("1").unwrap()],
            ..Default::default()
        };
        let err = SendSms::to_many(
            sender(),
            vec![receptor("09121234567"), receptor("09351234567")],
            text(),
            options,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                field: LocalId::FIELD,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn send_array_requires_rows() {
        let err = SendArray::new(Vec::new(), SendArrayOptions::default()).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn message_id_list_bounds() {
        assert!(MessageIds::new(Vec::new()).is_err());
        let ids = (0..=MAX_MESSAGE_IDS as i64).map(MessageId::new).collect();
        assert!(matches!(
            MessageIds::new(ids),
            Err(ValidationError::TooMany { .. })
        ));
        assert_eq!(MessageIds::one(MessageId::new(7)).as_slice().len(), 1);
        assert!(LocalIds::new(Vec::new()).is_err());
    }

    #[test]
    fn call_make_tts_requires_receptors() {
        assert!(CallMakeTts::to_many(Vec::new(), text(), CallOptions::default()).is_err());
        assert!(CallMakeTts::to_one(receptor("09121234567"), text(), CallOptions::default()).is_ok());
    }
}
