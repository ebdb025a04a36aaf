use super::*;

// =============================================================
// Valid JSON text parses to its structure
// =============================================================

#[test]
fn json_object_text_parses() {
    let raw = Value::String(r#"{"response": "hello", "status": "ok"}"#.to_owned());
    let normalized = normalize_openai_response(&raw);
    assert_eq!(normalized, json!({ "response": "hello", "status": "ok" }));
}

#[test]
fn json_scalar_text_parses() {
    assert_eq!(normalize_openai_response(&Value::String("42".to_owned())), json!(42));
    assert_eq!(normalize_openai_response(&Value::String("null".to_owned())), Value::Null);
}

#[test]
fn json_array_text_parses() {
    let raw = Value::String("[1, 2, 3]".to_owned());
    assert_eq!(normalize_openai_response(&raw), json!([1, 2, 3]));
}

// =============================================================
// Non-JSON text folds into the fallback shape
// =============================================================

#[test]
fn plain_text_becomes_fallback() {
    let normalized = normalize_openai_response(&Value::String("hello".to_owned()));
    assert_eq!(normalized, json!({ "response": "hello", "status": "unknown" }));
}

#[test]
fn empty_text_becomes_fallback_with_empty_response() {
    let normalized = normalize_openai_response(&Value::String(String::new()));
    assert_eq!(normalized, json!({ "response": "", "status": "unknown" }));
}

#[test]
fn whitespace_text_becomes_fallback() {
    let normalized = normalize_openai_response(&Value::String("   ".to_owned()));
    assert_eq!(normalized, json!({ "response": "   ", "status": "unknown" }));
}

#[test]
fn truncated_json_becomes_fallback() {
    let raw = Value::String(r#"{"response": "hel"#.to_owned());
    let normalized = normalize_openai_response(&raw);
    assert_eq!(normalized["status"], "unknown");
    assert_eq!(normalized["response"], r#"{"response": "hel"#);
}

// =============================================================
// Structured input is identity
// =============================================================

#[test]
fn structured_object_is_returned_unchanged() {
    let raw = json!({ "response": "hi", "status": "restricted", "score": 0.9 });
    assert_eq!(normalize_openai_response(&raw), raw);
}

#[test]
fn null_is_returned_unchanged() {
    assert_eq!(normalize_openai_response(&Value::Null), Value::Null);
}

#[test]
fn number_is_returned_unchanged() {
    assert_eq!(normalize_openai_response(&json!(7)), json!(7));
}

// =============================================================
// Verdict projection
// =============================================================

#[test]
fn verdict_status_reads_parsed_text() {
    let raw = Value::String(r#"{"response": "hello", "status": "ok"}"#.to_owned());
    assert_eq!(verdict_status(&raw).as_deref(), Some("ok"));
}

#[test]
fn verdict_status_reads_structured_object() {
    let raw = json!({ "response": "no", "status": "restricted" });
    assert_eq!(verdict_status(&raw).as_deref(), Some("restricted"));
}

#[test]
fn verdict_status_is_unknown_for_prose() {
    assert_eq!(verdict_status(&Value::String("hello".to_owned())).as_deref(), Some("unknown"));
}

#[test]
fn verdict_status_is_none_without_status_field() {
    assert_eq!(verdict_status(&json!({ "response": "hi" })), None);
    assert_eq!(verdict_status(&Value::Null), None);
    assert_eq!(verdict_status(&json!([1, 2])), None);
}
