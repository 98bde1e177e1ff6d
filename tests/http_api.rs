//! End-to-end tests through the public API: the default `reqwest` transport against
//! a local mock server, and a transport supplied from outside the crate.

use std::net::TcpListener;
use std::sync::Arc;

use kavenegar::{
    ApiKey, BoxFuture, HttpResponse, HttpTransport, KavenegarClient, KavenegarError,
    KnownStatusCode, MessageId, MessageIds, MessageText, Receptor, SendOptions, SendSms, Sender,
    Template, Token, VerifyLookup,
};
use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> KavenegarClient {
    KavenegarClient::builder(ApiKey::new("test-key").unwrap())
        .endpoint(format!("{}/v1", server.uri()))
        .build()
        .unwrap()
}

fn envelope(status: i32, message: &str, entries: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "return": { "status": status, "message": message },
        "entries": entries,
    })
}

#[tokio::test]
async fn send_posts_urlencoded_form_to_keyed_path() {
    let server = MockServer::start().await;
    let entries = serde_json::json!([{
        "messageid": 8792343,
        "message": "hello",
        "status": 1,
        "statustext": "در صف ارسال",
        "sender": "1000",
        "receptor": "09121234567",
        "date": 1356619709,
        "cost": 120
    }]);

    Mock::given(method("POST"))
        .and(path("/v1/test-key/sms/send.json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "sender=1000&receptor=09121234567&message=hello&type=1&date=0",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(200, "تایید شد", entries)))
        .expect(1)
        .mount(&server)
        .await;

    let request = SendSms::to_one(
        Sender::new("1000").unwrap(),
        Receptor::new("09121234567").unwrap(),
        MessageText::new("hello").unwrap(),
        SendOptions::default(),
    )
    .unwrap();

    let result = client_for(&server)
        .send_single(request)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.message_id, MessageId::new(8_792_343));
    assert_eq!(result.status_text, "در صف ارسال");
}

#[tokio::test]
async fn verify_lookup_sends_only_present_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/test-key/verify/lookup.json"))
        .and(body_string_contains("token=852596"))
        .and(body_string_contains("type=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "تایید شد",
            serde_json::json!([{ "messageid": 1, "status": 5 }]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = VerifyLookup::new(
        Receptor::new("09121234567").unwrap(),
        Token::new("852596").unwrap(),
        Template::new("myverification").unwrap(),
    );
    let result = client_for(&server)
        .verify_lookup(&request)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.message_id, MessageId::new(1));

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body).into_owned();
    assert!(!body.contains("token2"), "unexpected body: {body}");
}

#[tokio::test]
async fn failure_envelope_with_error_status_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/test-key/sms/status.json"))
        .respond_with(ResponseTemplate::new(418).set_body_json(envelope(
            418,
            "اعتبار حساب شما کافی نیست",
            serde_json::Value::Null,
        )))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .status(&MessageIds::one(MessageId::new(5)))
        .await
        .unwrap_err();
    match err {
        KavenegarError::Api { status, message } => {
            assert_eq!(status.known(), Some(KnownStatusCode::InsufficientCredit));
            assert_eq!(message, "اعتبار حساب شما کافی نیست");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_error_page_becomes_http_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).account_info().await.unwrap_err();
    match err {
        KavenegarError::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body.as_deref(), Some("<html>Bad Gateway</html>"));
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn execute_reaches_endpoints_without_typed_method() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/test-key/utils/getdate.json"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "تایید شد",
            serde_json::json!({ "unixtime": 1441230646 }),
        )))
        .mount(&server)
        .await;

    let entries: Option<serde_json::Value> = client_for(&server)
        .execute("utils", "getdate", None)
        .await
        .unwrap();
    assert_eq!(entries.unwrap()["unixtime"], 1_441_230_646);
}

#[tokio::test]
async fn closed_port_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = KavenegarClient::builder(ApiKey::new("test-key").unwrap())
        .endpoint(format!("http://127.0.0.1:{port}/v1"))
        .build()
        .unwrap();

    let err = client.account_info().await.unwrap_err();
    assert!(
        matches!(err, KavenegarError::Transport(_)),
        "expected Transport error, got {err:?}"
    );
}

#[tokio::test]
async fn null_entries_on_single_result_call_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/test-key/verify/lookup.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            200,
            "تایید شد",
            serde_json::Value::Null,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = VerifyLookup::new(
        Receptor::new("09121234567").unwrap(),
        Token::new("852596").unwrap(),
        Template::new("myverification").unwrap(),
    );
    assert_eq!(client_for(&server).verify_lookup(&request).await.unwrap(), None);
}

/// Transport implemented outside the crate, answering every call with one body.
struct CannedTransport(&'static str);

impl HttpTransport for CannedTransport {
    fn post_form<'a>(
        &'a self,
        _url: &'a str,
        _params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>>> {
        Box::pin(async move {
            Ok(HttpResponse {
                status: 200,
                body: self.0.to_owned(),
            })
        })
    }
}

#[tokio::test]
async fn custom_transport_plugs_into_builder() {
    let client = KavenegarClient::builder(ApiKey::new("test-key").unwrap())
        .transport(Arc::new(CannedTransport(
            r#"{"return":{"status":200,"message":"ok"},"entries":[{"messageid":9,"status":"10"}]}"#,
        )))
        .build()
        .unwrap();

    let statuses = client.status(&MessageIds::one(MessageId::new(9))).await.unwrap();
    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].status.is_final());
}
