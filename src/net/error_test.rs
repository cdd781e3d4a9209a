use serde_json::json;

use super::*;

// =============================================================
// Success paths
// =============================================================

#[test]
fn success_returns_parsed_value_unchanged() {
    let value = decode_response(200, r#"{"id":"1","name":"Wheat"}"#).unwrap();
    assert_eq!(value, json!({"id": "1", "name": "Wheat"}));
}

#[test]
fn success_passes_arrays_and_primitives_through() {
    assert_eq!(decode_response(200, "[1,2]").unwrap(), json!([1, 2]));
    assert_eq!(decode_response(200, "42").unwrap(), json!(42));
}

#[test]
fn success_empty_body_is_null() {
    assert_eq!(decode_response(204, "").unwrap(), serde_json::Value::Null);
}

#[test]
fn upper_2xx_statuses_are_success() {
    assert!(decode_response(299, "{}").is_ok());
}

// =============================================================
// Failure message precedence: detail > message > generic
// =============================================================

#[test]
fn failure_message_prefers_detail() {
    let err = decode_response(400, r#"{"detail":"bad receipt","message":"other"}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::RequestFailed {
            status: 400,
            message: "bad receipt".to_owned(),
        }
    );
}

#[test]
fn failure_message_falls_back_to_message_field() {
    let err = decode_response(401, r#"{"message":"invalid credentials"}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid credentials");
}

#[test]
fn failure_message_generic_when_body_has_neither() {
    let err = decode_response(403, r#"{"error":"nope"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Request failed (403)");
}

#[test]
fn empty_failure_body_uses_generic_status_message() {
    // Empty text parses to null, so only the status check fires.
    let err = decode_response(500, "").unwrap_err();
    assert_eq!(
        err,
        ApiError::RequestFailed {
            status: 500,
            message: "Request failed (500)".to_owned(),
        }
    );
}

// =============================================================
// Malformed bodies
// =============================================================

#[test]
fn non_json_body_is_malformed_with_raw_text() {
    let err = decode_response(500, "<html>oops</html>").unwrap_err();
    assert_eq!(err, ApiError::MalformedResponse("<html>oops</html>".to_owned()));
    assert_eq!(err.to_string(), "<html>oops</html>");
}

#[test]
fn malformed_check_runs_before_status_check() {
    // A non-JSON body on a failed status reports the body, not the status.
    let err = decode_response(502, "Bad Gateway").unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[test]
fn blank_unparseable_body_gets_generic_message() {
    let err = decode_response(200, "   ").unwrap_err();
    assert_eq!(
        err,
        ApiError::MalformedResponse("Invalid server response".to_owned())
    );
}

// =============================================================
// Display
// =============================================================

#[test]
fn request_failed_displays_only_the_message() {
    let err = ApiError::RequestFailed {
        status: 404,
        message: "receipt not found".to_owned(),
    };
    assert_eq!(err.to_string(), "receipt not found");
}
