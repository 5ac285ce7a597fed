//! Status-classification dispatch table tests
//!
//! One terminal outcome per (status, envelope) pair; the HTTP status is the
//! sole dispatch key except for the 403 machine-code sub-dispatch.

use openfirme_core::{classify_status, ErrorEnvelope, OpenFirmeError};
use pretty_assertions::assert_eq;
use serde_json::json;

fn envelope(value: serde_json::Value) -> ErrorEnvelope {
    serde_json::from_value(value).unwrap()
}

#[test]
fn dispatch_table_is_exhaustive_over_statuses() {
    let plain = envelope(json!({"success": false, "message": "m", "code": "C"}));

    let cases: Vec<(u16, fn(&OpenFirmeError) -> bool)> = vec![
        (400, |e| matches!(e, OpenFirmeError::Validation { .. })),
        (401, |e| matches!(e, OpenFirmeError::Authentication { .. })),
        (403, |e| matches!(e, OpenFirmeError::Authentication { .. })),
        (404, |e| matches!(e, OpenFirmeError::NotFound { .. })),
        (429, |e| matches!(e, OpenFirmeError::RateLimit { .. })),
        (402, |e| matches!(e, OpenFirmeError::Api { status: 402, .. })),
        (500, |e| matches!(e, OpenFirmeError::Api { status: 500, .. })),
        (503, |e| matches!(e, OpenFirmeError::Api { status: 503, .. })),
    ];

    for (status, check) in cases {
        let err = classify_status(status, &plain);
        assert!(check(&err), "status {status} produced {err:?}");
    }
}

#[test]
fn credit_codes_switch_403_to_insufficient_credits() {
    for code in ["CREDITS_EXHAUSTED", "MOF_INSUFFICIENT_CREDITS"] {
        let err = classify_status(403, &envelope(json!({"success": false, "code": code})));
        assert!(
            matches!(err, OpenFirmeError::InsufficientCredits { .. }),
            "code {code} produced {err:?}"
        );
    }

    let err = classify_status(
        403,
        &envelope(json!({"success": false, "code": "SOMETHING_ELSE"})),
    );
    assert!(matches!(err, OpenFirmeError::Authentication { .. }));
}

#[test]
fn insufficient_credits_defaults_are_zero_and_one() {
    let err = classify_status(
        403,
        &envelope(json!({"success": false, "code": "CREDITS_EXHAUSTED"})),
    );
    assert_eq!(
        err,
        OpenFirmeError::InsufficientCredits {
            message: "Unknown error".to_string(),
            code: "CREDITS_EXHAUSTED".to_string(),
            available: 0,
            required: 1,
        }
    );
}

#[test]
fn rate_limit_carries_server_numbers() {
    let err = classify_status(
        429,
        &envelope(json!({
            "success": false,
            "code": "RATE_LIMITED",
            "message": "Too many requests",
            "retry_after": 12,
            "current_usage": 60,
            "limit": 60
        })),
    );
    assert_eq!(
        err,
        OpenFirmeError::RateLimit {
            message: "Too many requests".to_string(),
            code: "RATE_LIMITED".to_string(),
            retry_after: 12,
            current_usage: 60,
            limit: 60,
        }
    );
}

#[test]
fn generic_api_error_preserves_status() {
    let err = classify_status(418, &envelope(json!({"success": false})));
    match err {
        OpenFirmeError::Api { status, code, .. } => {
            assert_eq!(status, 418);
            assert_eq!(code, "UNKNOWN_ERROR");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[test]
fn classified_errors_display_their_message() {
    let err = classify_status(
        404,
        &envelope(json!({"success": false, "message": "No such company"})),
    );
    assert_eq!(err.to_string(), "Not found: No such company");
}
