use super::*;

// =============================================================
// Header summary
// =============================================================

#[test]
fn summary_line_formats_counts() {
    assert_eq!(summary_line(3, 2, 1), "Total: 3 · Accepted: 2 · Rejected: 1");
}

#[test]
fn summary_line_for_empty_board() {
    assert_eq!(summary_line(0, 0, 0), "Total: 0 · Accepted: 0 · Rejected: 0");
}

// =============================================================
// Refresh + mutation scenarios through the reducers
// =============================================================

use crate::net::api::ApiError;
use crate::net::types::Message;

fn board_with(messages: Vec<Message>) -> MessagesState {
    let mut state = MessagesState::default();
    state.apply_fetch_outcome(Ok(messages));
    state
}

fn sample(id: i64, status: MessageStatus) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "status": status.as_str(),
        "message_text": "hi"
    }))
    .unwrap()
}

#[test]
fn accepting_then_rejecting_updates_one_message() {
    let mut state = board_with(vec![sample(1, MessageStatus::Ok)]);

    state.begin_mutation(1);
    state.apply_mutation_outcome(1, MessageStatus::Restricted, Ok(()));

    assert_eq!(state.messages[0].status, MessageStatus::Restricted);
    assert_eq!(state.accepted_count(), 0);
    assert_eq!(state.restricted_count(), 1);
    assert!(!state.is_pending(1));
}

#[test]
fn backend_rejection_keeps_previous_status() {
    let mut state = board_with(vec![sample(1, MessageStatus::Ok)]);

    state.begin_mutation(1);
    state.apply_mutation_outcome(
        1,
        MessageStatus::Restricted,
        Err(ApiError::Mutation("status 500".to_owned())),
    );

    assert_eq!(state.messages[0].status, MessageStatus::Ok);
    assert!(state.last_mutation_error.is_some());
    assert!(!state.is_pending(1));
}
