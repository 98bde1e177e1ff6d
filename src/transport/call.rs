use crate::domain::{CallMakeTts, LocalId, MessageText, Receptor, UnixTimestamp};

use super::html::html_encode;
use super::params::{FormParams, join};

/// Unlike SMS sends, `date` is left out entirely when no schedule is given.
pub fn encode_call_make_tts_form(request: &CallMakeTts) -> FormParams {
    let options = request.options();
    let mut params = FormParams::new();
    params
        .insert(
            Receptor::FIELD,
            join(request.receptors().iter().map(Receptor::as_str)),
        )
        .insert(MessageText::FIELD, html_encode(request.message().as_str()))
        .insert_opt(
            "date",
            options
                .date
                .map(|date| UnixTimestamp::from_datetime(date).value()),
        );
    if !options.local_ids.is_empty() {
        params.insert(
            LocalId::FIELD,
            join(options.local_ids.iter().map(LocalId::as_str)),
        );
    }
    params
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::CallOptions;

    #[test]
    fn minimal_call_has_no_date_or_local_id() {
        let request = CallMakeTts::to_many(
            vec![
                Receptor::new("09121234567").unwrap(),
                Receptor::new("09351234567").unwrap(),
            ],
            MessageText::new("کد شما 1234").unwrap(),
            CallOptions::default(),
        )
        .unwrap();

        assert_eq!(
            encode_call_make_tts_form(&request).into_pairs(),
            vec![
                ("receptor".to_owned(), "09121234567,09351234567".to_owned()),
                ("message".to_owned(), "کد شما 1234".to_owned()),
            ]
        );
    }

    #[test]
    fn scheduled_call_sends_date_and_local_ids() {
        let request = CallMakeTts::to_one(
            Receptor::new("09121234567").unwrap(),
            MessageText::new("hi").unwrap(),
            CallOptions {
                date: Some(Utc.with_ymd_and_hms(2015, 9, 2, 22, 25, 43).unwrap()),
                local_ids: vec![LocalId::new("9").unwrap()],
            },
        )
        .unwrap();

        let params = encode_call_make_tts_form(&request);
        assert_eq!(params.get("date"), Some("1441232743"));
        assert_eq!(params.get("localid"), Some("9"));
    }
}
