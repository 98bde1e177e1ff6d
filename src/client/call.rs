use crate::domain::{CallMakeTts, SendResult};
use crate::transport;

use super::{KavenegarClient, KavenegarError};

impl KavenegarClient {
    /// Place text-to-speech voice calls (`call/maketts`).
    pub async fn call_make_tts(
        &self,
        request: &CallMakeTts,
    ) -> Result<Vec<SendResult>, KavenegarError> {
        self.execute_list(
            "call",
            "maketts",
            transport::encode_call_make_tts_form(request),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::super::fake::{FakeTransport, assert_no_param, assert_param, make_client};
    use super::*;
    use crate::domain::{CallOptions, LocalId, MessageText, Receptor};

    #[tokio::test]
    async fn call_make_tts_posts_receptors_and_encoded_message() {
        let transport = FakeTransport::ok(
            r#"[{"messageid":12,"message":"code 1234","status":1,"receptor":"09121234567","cost":300}]"#,
        );
        let client = make_client(transport.clone());
        let request = CallMakeTts::to_one(
            Receptor::new("09121234567").unwrap(),
            MessageText::new("code <1234>").unwrap(),
            CallOptions::default(),
        )
        .unwrap();

        let results = client.call_make_tts(&request).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].cost, 300);

        let (url, params) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/v1/test-key/call/maketts.json")
        );
        assert_param(&params, "message", "code &lt;1234&gt;");
        assert_no_param(&params, "date");
        assert_no_param(&params, "localid");
    }

    #[tokio::test]
    async fn call_make_tts_schedules_when_date_is_set() {
        let transport = FakeTransport::ok("null");
        let client = make_client(transport.clone());
        let request = CallMakeTts::to_many(
            vec![
                Receptor::new("09121234567").unwrap(),
                Receptor::new("09351234567").unwrap(),
            ],
            MessageText::new("hello").unwrap(),
            CallOptions {
                date: Some(Utc.with_ymd_and_hms(2015, 9, 2, 22, 25, 43).unwrap()),
                local_ids: vec![LocalId::new("a").unwrap(), LocalId::new("b").unwrap()],
            },
        )
        .unwrap();

        assert!(client.call_make_tts(&request).await.unwrap().is_empty());

        let (_, params) = transport.last_request();
        assert_param(&params, "receptor", "09121234567,09351234567");
        assert_param(&params, "date", "1441232743");
        assert_param(&params, "localid", "a,b");
    }
}
