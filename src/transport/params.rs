use chrono::{DateTime, Utc};

use crate::domain::UnixTimestamp;

/// Ordered form body for one API call.
///
/// Keys are unique: inserting an existing key replaces its value in place and keeps
/// its position. Absent optional values are never inserted, so they never reach the
/// wire as empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    fields: Vec<(String, String)>,
}

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, stringified through its `Display` form.
    pub fn insert(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.fields.iter_mut().find(|(existing, _)| existing == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key.to_owned(), value)),
        }
        self
    }

    /// Insert `key` only when `value` is present.
    pub fn insert_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.fields
    }
}

/// Comma-join without a trailing delimiter.
pub fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            joined.push(',');
        }
        joined.push_str(item.as_ref());
    }
    joined
}

/// `None` encodes as `0`, any date as its Unix seconds.
pub fn encode_date(date: Option<DateTime<Utc>>) -> i64 {
    UnixTimestamp::from_optional(date).value()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn join_has_no_trailing_delimiter() {
        assert_eq!(join(["a", "b", "c"]), "a,b,c");
        assert_eq!(join(["a"]), "a");
        assert_eq!(join(Vec::<String>::new()), "");
    }

    #[test]
    fn encode_date_uses_zero_for_no_date() {
        assert_eq!(encode_date(None), 0);

        let date = Utc.with_ymd_and_hms(2015, 9, 2, 22, 25, 43).unwrap();
        let encoded = encode_date(Some(date));
        assert_eq!(encoded, 1_441_232_743);
        assert_eq!(UnixTimestamp::new(encoded).to_datetime(), Some(date));
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut params = FormParams::new();
        params.insert("sender", "1000").insert("message", "hi");
        params.insert("sender", "2000");

        assert_eq!(
            params.into_pairs(),
            vec![
                ("sender".to_owned(), "2000".to_owned()),
                ("message".to_owned(), "hi".to_owned()),
            ]
        );
    }

    #[test]
    fn absent_values_never_become_fields() {
        let mut params = FormParams::new();
        params
            .insert("token", "123456")
            .insert_opt("token2", None::<&str>)
            .insert_opt("token3", Some("x"))
            .insert("type", 1);

        let keys = params.iter().map(|(key, _)| key).collect::<Vec<_>>();
        assert_eq!(keys, vec!["token", "token3", "type"]);
        assert!(!params.contains_key("token2"));
        assert_eq!(params.get("type"), Some("1"));
        assert_eq!(params.len(), 3);
    }
}
