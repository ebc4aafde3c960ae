use super::*;
use crate::net::contact::{ContactError, RawResponse, classify};

#[test]
fn ok_response_resets_form_and_shows_success() {
    let result = classify(RawResponse { status: 200, body: String::new() });
    let feedback = Feedback::from_result(&result);
    assert_eq!(feedback.text, SUCCESS_MESSAGE);
    assert_eq!(feedback.kind, MessageKind::Success);
    assert!(feedback.reset_form);
}

#[test]
fn validation_failure_shows_field_errors_and_keeps_fields() {
    let result = classify(RawResponse { status: 422, body: r#"{"errors":[{"message":"Email invalid"}]}"#.to_owned() });
    let feedback = Feedback::from_result(&result);
    assert_eq!(feedback.text, "Email invalid");
    assert_eq!(feedback.kind, MessageKind::Error);
    assert!(!feedback.reset_form);
}

#[test]
fn network_failure_shows_connectivity_message() {
    let feedback = Feedback::from_result(&Err(ContactError::Network("Failed to fetch".to_owned())));
    assert_eq!(feedback.text, CONNECTIVITY_ERROR_MESSAGE);
    assert_eq!(feedback.kind, MessageKind::Error);
}

#[test]
fn kind_classes_include_base_and_show() {
    assert_eq!(MessageKind::Success.classes(), ["form-message", "success", "show"]);
    assert_eq!(MessageKind::Error.classes(), ["form-message", "error", "show"]);
}
