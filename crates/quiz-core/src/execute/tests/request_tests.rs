use crate::execute::decode_response;
use crate::execute::request_body;
use crate::execute::ExecuteError;
use serde_json::json;

#[test]
fn request_body_wraps_the_query() {
    let body = request_body("query {\n  version\n}").unwrap();
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"query":"query {\n  version\n}"}"#,
    );
}

#[test]
fn request_body_is_pure_ascii() {
    let body = request_body("query { search(term: \"café 🦀\") }").unwrap();

    assert!(body.is_ascii());
    assert_eq!(
        String::from_utf8(body.clone()).unwrap(),
        r#"{"query":"query { search(term: \"caf\u00e9 \ud83e\udd80\") }"}"#,
    );
    let decoded: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(decoded["query"], "query { search(term: \"café 🦀\") }");
}

#[test]
fn decode_returns_data() {
    let data = decode_response(br#"{"data": {"version": "1.0"}}"#).unwrap();
    assert_eq!(data, json!({ "version": "1.0" }));
}

#[test]
fn decode_without_data_is_null() {
    assert_eq!(decode_response(b"{}").unwrap(), serde_json::Value::Null);
}

#[test]
fn decode_with_errors_fails() {
    let result = decode_response(
        br#"{"data": {"user": null}, "errors": [{"message": "not found"}]}"#,
    );

    match result {
        Err(ExecuteError::TransportFailure { data, errors }) => {
            assert_eq!(data, json!({ "user": null }));
            assert_eq!(errors, json!([{ "message": "not found" }]));
        },
        other => panic!("expected a transport failure, got {other:?}"),
    }
}

#[test]
fn decode_rejects_malformed_json() {
    assert!(matches!(decode_response(b"<html>"), Err(ExecuteError::Json(_))));
}
