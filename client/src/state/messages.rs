//! Message-board state and the refresh/mutation reducers.
//!
//! DESIGN
//! ======
//! Network completion handlers funnel through the reducer methods here, so
//! the whole observable state machine is plain data that unit tests can
//! drive without a browser. The page layer only decides *when* to call them.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::api::ApiError;
use crate::net::types::{Message, MessageStatus};
use crate::state::pending::PendingSet;

/// Everything the moderation page renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessagesState {
    /// Current message list, in server response order.
    pub messages: Vec<Message>,
    /// True only while a refresh issued against an empty list is running.
    pub loading: bool,
    /// Ids with a status mutation in flight.
    pub pending: PendingSet,
    /// Most recent mutation failure, kept for the operator notification.
    /// Cleared by the next successful mutation.
    pub last_mutation_error: Option<String>,
}

impl MessagesState {
    /// Called right before a list fetch is issued.
    ///
    /// The loading flag is only raised while the list is still empty, so
    /// background refreshes never flash the first-load screen again.
    pub fn begin_refresh(&mut self) {
        if self.messages.is_empty() {
            self.loading = true;
        }
    }

    /// Apply a finished list fetch.
    ///
    /// Success replaces the list wholesale (last response to resolve wins
    /// across overlapping polls); failure leaves the current list on screen.
    /// Either way the loading flag drops.
    pub fn apply_fetch_outcome(&mut self, outcome: Result<Vec<Message>, ApiError>) {
        if let Ok(list) = outcome {
            self.messages = list;
        }
        self.loading = false;
    }

    /// Mark `id` pending before its PATCH goes out.
    ///
    /// Returns false when a mutation for the same id is already in flight;
    /// callers skip the request in that case.
    pub fn begin_mutation(&mut self, id: i64) -> bool {
        self.pending.insert(id)
    }

    /// Apply a finished status mutation.
    ///
    /// Success patches the matching message's status in place, leaving every
    /// other field untouched. Failure records the error and leaves the list
    /// alone. The pending id is cleared unconditionally, as the final step.
    pub fn apply_mutation_outcome(
        &mut self,
        id: i64,
        status: MessageStatus,
        outcome: Result<(), ApiError>,
    ) {
        match outcome {
            Ok(()) => {
                if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
                    message.status = status;
                }
                self.last_mutation_error = None;
            }
            Err(err) => {
                self.last_mutation_error = Some(err.to_string());
            }
        }
        self.pending.remove(id);
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.pending.contains(id)
    }

    /// Number of messages currently accepted.
    pub fn accepted_count(&self) -> usize {
        self.messages.iter().filter(|m| m.status == MessageStatus::Ok).count()
    }

    /// Number of messages currently rejected.
    pub fn restricted_count(&self) -> usize {
        self.messages.iter().filter(|m| m.status == MessageStatus::Restricted).count()
    }
}
