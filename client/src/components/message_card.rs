//! Card component for a single message under review.
//!
//! DESIGN
//! ======
//! The card is stateless: it receives one message snapshot plus its pending
//! flag and reports operator decisions upward through a callback. Disabling
//! rules live in small helpers so the call-site policy is testable.

#[cfg(test)]
#[path = "message_card_test.rs"]
mod message_card_test;

use leptos::prelude::*;

use crate::net::types::{Message, MessageStatus};
use crate::util::format::format_timestamp;
use crate::util::openai::verdict_status;

/// A moderation card with accept/reject actions.
#[component]
pub fn MessageCard(
    message: Message,
    #[prop(optional)] pending: bool,
    on_set_status: Callback<(i64, MessageStatus)>,
) -> impl IntoView {
    let id = message.id;
    let is_ok = message.status.is_ok();
    let is_rejected = !is_ok;
    let accept_disabled = accept_disabled(message.status, pending);
    let reject_disabled = reject_disabled(message.status, pending);
    let (status_class, status_label) = status_pill(message.status);

    let meta = meta_line(message.name.as_deref(), message.gender.as_deref(), message.mood.as_deref());
    let timestamp = format_timestamp(message.created_at.as_deref());
    let verdict = message.openai_response.as_ref().and_then(verdict_status);
    let is_fetched = message.is_fetched;

    view! {
        <li class="message-card" class:message-card--updating=pending>
            <div class="message-card__body">
                <div class="message-card__badges">
                    <span class="message-card__id">{format!("#{id}")}</span>
                    <span class=status_class>{status_label}</span>
                    <Show when=move || is_fetched>
                        <span class="message-card__fetched">"Fetched"</span>
                    </Show>
                    {verdict.map(|v| {
                        view! { <span class="message-card__verdict">{format!("classifier: {v}")}</span> }
                    })}
                </div>
                <p class="message-card__text">{message.message_text.clone()}</p>
                <p class="message-card__meta">{meta}</p>
                <p class="message-card__date">{timestamp}</p>
            </div>
            <div class="message-card__actions">
                <button
                    class="message-card__action message-card__action--accept"
                    class:message-card__action--current=is_ok
                    disabled=accept_disabled
                    on:click=move |_| on_set_status.run((id, MessageStatus::Ok))
                >
                    "Accept"
                </button>
                <button
                    class="message-card__action message-card__action--reject"
                    class:message-card__action--current=is_rejected
                    disabled=reject_disabled
                    on:click=move |_| on_set_status.run((id, MessageStatus::Restricted))
                >
                    "Reject"
                </button>
            </div>
        </li>
    }
}

/// Accept is pointless while a mutation runs or once already accepted.
fn accept_disabled(status: MessageStatus, pending: bool) -> bool {
    pending || status.is_ok()
}

/// Reject mirrors the original UI: any non-accepted status counts as the
/// current rejection side.
fn reject_disabled(status: MessageStatus, pending: bool) -> bool {
    pending || !status.is_ok()
}

fn status_pill(status: MessageStatus) -> (&'static str, &'static str) {
    if status.is_ok() {
        ("message-card__status message-card__status--ok", "Accepted")
    } else {
        ("message-card__status message-card__status--restricted", "Rejected")
    }
}

/// Join the present submitter attributes with a middle dot, original style.
fn meta_line(name: Option<&str>, gender: Option<&str>, mood: Option<&str>) -> String {
    [name, gender, mood]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}
