use super::*;
use crate::net::types::{AnalysisResult, RecommendationResult};

const ANALYSIS_BODY: &str = r#"{
    "intent": "debug", "intent_conf": 80,
    "topic": "loops", "topic_conf": 70,
    "difficulty": "Beginner", "difficulty_conf": 60,
    "keywords": ["for", "while"],
    "suggestion": "practice more"
}"#;

#[test]
fn decodes_success_body() {
    let result: AnalysisResult = decode_reply(Endpoint::Analyze, ANALYSIS_BODY).unwrap();
    assert_eq!(result.topic, "loops");
    assert_eq!(result.keywords.len(), 2);
}

#[test]
fn error_field_becomes_application_error() {
    let err = decode_reply::<AnalysisResult>(Endpoint::Analyze, r#"{"error":"Query cannot be empty"}"#).unwrap_err();
    assert_eq!(
        err,
        ControllerError::Application {
            endpoint: Endpoint::Analyze,
            message: "Query cannot be empty".to_owned(),
        }
    );
}

#[test]
fn error_field_wins_over_success_fields() {
    let err = decode_reply::<RecommendationResult>(
        Endpoint::Recommend,
        r#"{"error":"Unknown inputs","next_topic":"CNN","action":"Continue","difficulty_adjustment":"Same"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ControllerError::Application { endpoint: Endpoint::Recommend, .. }));
}

#[test]
fn falsy_error_field_is_ignored() {
    let body = r#"{"error":"","next_topic":"CNN","action":"Continue","difficulty_adjustment":"Same"}"#;
    let result: RecommendationResult = decode_reply(Endpoint::Recommend, body).unwrap();
    assert_eq!(result.next_topic, "CNN");

    let body = r#"{"error":null,"next_topic":"CNN","action":"Continue","difficulty_adjustment":"Same"}"#;
    assert!(decode_reply::<RecommendationResult>(Endpoint::Recommend, body).is_ok());
}

#[test]
fn non_string_error_field_is_stringified() {
    let err = decode_reply::<AnalysisResult>(Endpoint::Analyze, r#"{"error":{"code":7}}"#).unwrap_err();
    assert_eq!(err.to_string(), r#"Error: {"code":7}"#);
}

#[test]
fn invalid_json_is_transport_error() {
    let err = decode_reply::<AnalysisResult>(Endpoint::Analyze, "<html>502</html>").unwrap_err();
    assert!(matches!(err, ControllerError::Transport { endpoint: Endpoint::Analyze, .. }));
    assert_eq!(err.to_string(), "Failed to connect to server.");
}

#[test]
fn schema_mismatch_is_transport_error() {
    let err = decode_reply::<RecommendationResult>(Endpoint::Recommend, r#"{"detail":[{"msg":"field required"}]}"#)
        .unwrap_err();
    assert!(matches!(err, ControllerError::Transport { endpoint: Endpoint::Recommend, .. }));
    assert!(err.detail().starts_with("unexpected reply shape"));
}
