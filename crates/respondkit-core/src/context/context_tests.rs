#![allow(non_snake_case)]

use super::*;

fn fault(message: &str) -> Annotation {
    Annotation::Fault(Arc::new(std::io::Error::other(message.to_string())))
}

// Annotations tests

#[test]
fn Annotations___new___is_empty() {
    let annotations = Annotations::new();

    assert!(annotations.is_empty());
    assert_eq!(annotations.len(), 0);
}

#[test]
fn Annotations___set___stores_value_under_key() {
    let mut annotations = Annotations::new();

    annotations.set(WARN_KEY, fault("bad input"));

    assert!(annotations.contains(WARN_KEY));
    assert_eq!(
        annotations.fault(WARN_KEY).map(|e| e.to_string()),
        Some("bad input".to_string())
    );
}

#[test]
fn Annotations___set_existing_key___replaces_value() {
    let mut annotations = Annotations::new();

    annotations.set(RESPONSE_BODY_KEY, Annotation::Body(Bytes::from_static(b"first")));
    annotations.set(RESPONSE_BODY_KEY, Annotation::Body(Bytes::from_static(b"second")));

    assert_eq!(annotations.len(), 1);
    assert_eq!(
        annotations.body(RESPONSE_BODY_KEY),
        Some(&Bytes::from_static(b"second"))
    );
}

#[test]
fn Annotations___typed_getters___reject_other_variant() {
    let mut annotations = Annotations::new();
    annotations.set(ERROR_KEY, fault("db timeout"));
    annotations.set(RESPONSE_BODY_KEY, Annotation::Body(Bytes::new()));

    assert!(annotations.body(ERROR_KEY).is_none());
    assert!(annotations.fault(RESPONSE_BODY_KEY).is_none());
}

#[test]
fn Annotations___iter___preserves_insertion_order() {
    let mut annotations = Annotations::new();
    annotations.set(ERROR_KEY, fault("x"));
    annotations.set(RESPONSE_BODY_KEY, Annotation::Body(Bytes::new()));

    let keys: Vec<&str> = annotations.iter().map(|(k, _)| k).collect();

    assert_eq!(keys, vec![ERROR_KEY, RESPONSE_BODY_KEY]);
}

// RecordingContext tests

#[test]
fn RecordingContext___new___nothing_written() {
    let ctx = RecordingContext::new();

    assert!(!ctx.is_aborted());
    assert!(!ctx.is_written());
    assert!(ctx.status().is_none());
    assert!(ctx.annotations().is_empty());
}

#[test]
fn RecordingContext___abort___marks_aborted() {
    let mut ctx = RecordingContext::new();

    ctx.abort();

    assert!(ctx.is_aborted());
}

#[test]
fn RecordingContext___write_json___records_status_and_body() {
    let mut ctx = RecordingContext::new();

    ctx.write_json(
        TransportStatus::new(200),
        Bytes::from_static(br#"{"data":"ok","msg":"Success","code":200001}"#),
    );

    assert_eq!(ctx.status(), Some(TransportStatus::new(200)));
    assert_eq!(
        ctx.body_json(),
        Some(serde_json::json!({"data": "ok", "msg": "Success", "code": 200001}))
    );
}

#[test]
fn RecordingContext___body_json_invalid___returns_none() {
    let mut ctx = RecordingContext::new();

    ctx.write_json(TransportStatus::new(500), Bytes::new());

    assert!(ctx.is_written());
    assert!(ctx.body_json().is_none());
}
