#![allow(non_snake_case)]

use super::*;
use respondkit_core::{RESPONSE_BODY_KEY, WARN_KEY};
use std::sync::Arc;

#[test]
fn status_code___valid_status___maps_to_http() {
    assert_eq!(
        status_code(TransportStatus::new(404)).unwrap(),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn status_code___below_100___is_invalid() {
    let result = status_code(TransportStatus::new(0));

    assert!(matches!(result, Err(RespondError::InvalidStatus(0))));
}

#[test]
fn status_code___above_u16___is_invalid() {
    let result = status_code(TransportStatus::new(70_000));

    assert!(matches!(result, Err(RespondError::InvalidStatus(70_000))));
}

#[test]
fn HttpContext___into_response___uses_written_status_and_body() {
    let mut ctx = HttpContext::new();
    ctx.write_json(TransportStatus::new(201), Bytes::from_static(b"{}"));

    let response = ctx.into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[test]
fn HttpContext___unwritten___becomes_500() {
    let response = HttpContext::new().into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn HttpContext___invalid_status___becomes_500() {
    let mut ctx = HttpContext::new();
    ctx.write_json(TransportStatus::new(1), Bytes::new());

    let response = ctx.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn HttpContext___into_response___attaches_annotations() {
    let mut ctx = HttpContext::new();
    ctx.abort();
    ctx.set(
        WARN_KEY,
        Annotation::Fault(Arc::new(std::io::Error::other("bad input"))),
    );
    ctx.set(RESPONSE_BODY_KEY, Annotation::Body(Bytes::from_static(b"{}")));
    ctx.write_json(TransportStatus::new(400), Bytes::from_static(b"{}"));
    assert!(ctx.is_aborted());

    let response = ctx.into_response();

    let annotations = &response
        .extensions()
        .get::<ResponseAnnotations>()
        .unwrap()
        .0;
    assert!(annotations.contains(WARN_KEY));
    assert!(annotations.contains(RESPONSE_BODY_KEY));
}
