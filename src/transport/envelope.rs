use std::fmt;
use std::marker::PhantomData;

use serde::de::value::MapAccessDeserializer;
use serde::de::{DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

use crate::domain::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// `{ "return": { "status", "message" }, "entries": T }`, shared by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "return")]
    pub header: ReturnHeader,
    #[serde(default = "Option::default")]
    pub entries: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReturnHeader {
    pub status: StatusCode,
    #[serde(default)]
    pub message: String,
}

/// Parse the envelope but leave `entries` undecoded, so the header can be
/// inspected before the payload shape matters.
pub fn decode_envelope(body: &str) -> Result<Envelope<Box<RawValue>>, TransportError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode raw `entries` into the caller's payload shape.
pub fn decode_entries<T: DeserializeOwned>(
    entries: Option<Box<RawValue>>,
) -> Result<Option<T>, TransportError> {
    entries
        .map(|raw| serde_json::from_str::<T>(raw.get()))
        .transpose()
        .map_err(TransportError::from)
}

/// Payload that some endpoints return as a bare object and others as a
/// one-element array. Decodes to the object, or to the array's first element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstEntry<T>(pub Option<T>);

impl<T> FirstEntry<T> {
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FirstEntry<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FirstEntryVisitor(PhantomData))
    }
}

struct FirstEntryVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for FirstEntryVisitor<T> {
    type Value = FirstEntry<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object or an array of objects")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        T::deserialize(MapAccessDeserializer::new(map)).map(|value| FirstEntry(Some(value)))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let first = seq.next_element::<T>()?;
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(FirstEntry(first))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(FirstEntry(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryStatus, MessageId, SendResult};

    #[test]
    fn decodes_success_envelope_with_list_entries() {
        let body = r#"{"return":{"status":200,"message":"ok"},"entries":[{"messageid":111,"status":1}]}"#;
        let envelope = decode_envelope(body).unwrap();
        assert_eq!(envelope.header.status, StatusCode::new(200));
        assert_eq!(envelope.header.message, "ok");

        let entries: Vec<SendResult> = decode_entries(envelope.entries).unwrap().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message_id, MessageId::new(111));
        assert_eq!(entries[0].status, DeliveryStatus::new(1));
    }

    #[test]
    fn missing_or_null_entries_decode_to_none() {
        let envelope = decode_envelope(r#"{"return":{"status":418,"message":"bad sender"}}"#)
            .unwrap();
        assert_eq!(envelope.header.status, StatusCode::new(418));
        assert!(decode_entries::<Vec<SendResult>>(envelope.entries)
            .unwrap()
            .is_none());

        let envelope =
            decode_envelope(r#"{"return":{"status":200,"message":"ok"},"entries":null}"#)
                .unwrap();
        assert!(envelope.entries.is_none());
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        assert!(matches!(
            decode_envelope("<html>502</html>"),
            Err(TransportError::Json(_))
        ));
        assert!(decode_envelope(r#"{"entries":[]}"#).is_err());
    }

    #[test]
    fn first_entry_accepts_object_or_array() {
        let from_object: FirstEntry<SendResult> =
            serde_json::from_str(r#"{"messageid":5}"#).unwrap();
        assert_eq!(from_object.0.unwrap().message_id, MessageId::new(5));

        let from_array: FirstEntry<SendResult> =
            serde_json::from_str(r#"[{"messageid":6},{"messageid":7}]"#).unwrap();
        assert_eq!(from_array.into_inner().unwrap().message_id, MessageId::new(6));

        let empty: FirstEntry<SendResult> = serde_json::from_str("[]").unwrap();
        assert_eq!(empty, FirstEntry(None));
    }
}
