//! Moderation page: the polled message list with accept/reject actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it fetches the message list immediately
//! and then every poll interval until cleanup; operator decisions PATCH the
//! backend and are merged into local state without a refetch.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

use leptos::prelude::*;

use crate::components::message_card::MessageCard;
use crate::net::types::MessageStatus;
use crate::state::messages::MessagesState;

/// Moderation dashboard page.
#[component]
pub fn ModerationPage() -> impl IntoView {
    let state = expect_context::<RwSignal<MessagesState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::poll::{POLL_INTERVAL, PollHandle};

        let handle = PollHandle::new();
        let loop_handle = handle.clone();
        leptos::task::spawn_local(refresh_messages(state));
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                if !loop_handle.is_active() {
                    break;
                }
                // Each tick refreshes in its own task so a slow response
                // never delays the next tick; whichever response resolves
                // last overwrites the list.
                leptos::task::spawn_local(refresh_messages(state));
            }
        });
        on_cleanup(move || handle.stop());
    }

    let on_set_status = Callback::new(move |(id, status): (i64, MessageStatus)| {
        request_status_change(state, id, status);
    });

    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(refresh_messages(state));
    };

    view! {
        <div class="moderation-page">
            <Show
                when=move || !(state.get().loading && state.get().messages.is_empty())
                fallback=|| {
                    view! {
                        <div class="moderation-page__loading">
                            <p>"Loading..."</p>
                        </div>
                    }
                }
            >
                <header class="moderation-page__header toolbar">
                    <h1 class="toolbar__title">"Message Moderation"</h1>
                    <p class="toolbar__summary">
                        {move || {
                            let s = state.get();
                            summary_line(s.messages.len(), s.accepted_count(), s.restricted_count())
                        }}
                    </p>
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__refresh" on:click=on_refresh>
                        "Refresh"
                    </button>
                </header>

                <Show
                    when=move || !state.get().messages.is_empty()
                    fallback=|| view! { <p class="moderation-page__empty">"No messages"</p> }
                >
                    <ul class="moderation-page__grid">
                        {move || {
                            let s = state.get();
                            let pending = s.pending.clone();
                            s.messages
                                .into_iter()
                                .map(|message| {
                                    let in_flight = pending.contains(message.id);
                                    view! {
                                        <MessageCard
                                            message=message
                                            pending=in_flight
                                            on_set_status=on_set_status
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

/// Header summary, one linear scan over the current list.
fn summary_line(total: usize, accepted: usize, restricted: usize) -> String {
    format!("Total: {total} · Accepted: {accepted} · Rejected: {restricted}")
}

/// Fetch the list and fold the outcome into state.
///
/// Failures stay on screen as stale data; the error is only logged.
#[cfg(feature = "hydrate")]
async fn refresh_messages(state: RwSignal<MessagesState>) {
    state.update(MessagesState::begin_refresh);
    let outcome = crate::net::api::fetch_messages().await;
    if let Err(err) = &outcome {
        log::error!("list refresh failed: {err}");
    }
    state.update(|s| s.apply_fetch_outcome(outcome));
}

/// Issue a status mutation for one message, unless one is already in flight.
///
/// The pending id is cleared unconditionally once the request settles.
fn request_status_change(state: RwSignal<MessagesState>, id: i64, status: MessageStatus) {
    #[cfg(feature = "hydrate")]
    {
        let started = state.try_update(|s| s.begin_mutation(id)).unwrap_or(false);
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::update_message_status(id, status).await;
            if let Err(err) = &outcome {
                log::error!("status update failed for message {id}: {err}");
                notify_failure("Failed to update message status");
            }
            state.update(|s| s.apply_mutation_outcome(id, status, outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, id, status);
    }
}

/// Blocking operator notification for failed mutations.
#[cfg(feature = "hydrate")]
fn notify_failure(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(text);
    }
}
