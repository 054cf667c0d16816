use shared_types::{AppError, AppErrorKind};

/// Lifecycle of one asynchronous record retrieval.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Handle tying a response to the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    id: i64,
}

/// Fetch state plus a generation counter that rejects superseded responses.
///
/// `begin` hands out a ticket and makes it the only one `settle` will accept;
/// a ticket settles at most once. `retire` drops the pending ticket so a
/// response arriving after teardown is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTracker<T> {
    generation: u64,
    pending: Option<FetchTicket>,
    state: FetchState<T>,
}

impl<T> Default for FetchTracker<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
            state: FetchState::Idle,
        }
    }
}

impl<T> FetchTracker<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn pending(&self) -> Option<FetchTicket> {
        self.pending
    }

    /// Start a fetch for `id`, superseding anything outstanding.
    pub fn begin(&mut self, id: i64) -> FetchTicket {
        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            id,
        };
        if let Some(stale) = self.pending.replace(ticket) {
            tracing::debug!(superseded = stale.id, id, "fetch superseded");
        }
        self.state = FetchState::Loading;
        ticket
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Apply a response. Returns `false` (and changes nothing) if the ticket
    /// was superseded, retired, or already settled.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<T, AppError>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(id = ticket.id, "discarding stale fetch response");
            return false;
        }
        self.pending = None;
        self.state = match result {
            Ok(record) => FetchState::Loaded(record),
            Err(err) => {
                tracing::warn!(id = ticket.id, error = %err, "fetch failed");
                FetchState::Failed(failure_message(&err))
            }
        };
        true
    }

    /// Invalidate the outstanding ticket, e.g. on unmount.
    pub fn retire(&mut self) {
        self.pending = None;
    }
}

/// Message shown on the error surface for a failed fetch.
pub fn failure_message(err: &AppError) -> String {
    match err.kind {
        AppErrorKind::NotFound => "We couldn't find this judgment.".to_string(),
        AppErrorKind::Timeout => "The request timed out. Please try again later.".to_string(),
        AppErrorKind::Transport => {
            "We couldn't reach the server. Check your connection.".to_string()
        }
        AppErrorKind::Decode => "The server sent a response we couldn't read.".to_string(),
        _ if err.message.is_empty() => "Something went wrong. Please try again.".to_string(),
        _ => err.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn begin_moves_to_loading() {
        let mut tracker = FetchTracker::<&str>::default();
        assert_eq!(tracker.state(), &FetchState::Idle);
        tracker.begin(1);
        assert!(tracker.state().is_loading());
    }

    #[test]
    fn newer_request_wins_regardless_of_arrival_order() {
        let mut tracker = FetchTracker::default();
        let a = tracker.begin(1);
        let b = tracker.begin(2);
        assert!(tracker.settle(b, Ok("B")));
        assert!(!tracker.settle(a, Ok("A")));
        assert_eq!(tracker.state(), &FetchState::Loaded("B"));
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let mut tracker = FetchTracker::default();
        let a = tracker.begin(1);
        let _b = tracker.begin(2);
        assert!(!tracker.settle(a, Ok("A")));
        assert!(tracker.state().is_loading());
    }

    #[test]
    fn ticket_settles_once() {
        let mut tracker = FetchTracker::default();
        let a = tracker.begin(1);
        assert!(tracker.settle(a, Ok("first")));
        assert!(!tracker.settle(a, Err(AppError::transport("late"))));
        assert_eq!(tracker.state(), &FetchState::Loaded("first"));
    }

    #[test]
    fn same_identifier_twice_issues_distinct_tickets() {
        let mut tracker = FetchTracker::<&str>::default();
        let a = tracker.begin(5);
        let b = tracker.begin(5);
        assert_ne!(a, b);
        assert!(!tracker.is_current(a));
    }

    #[test]
    fn retired_tracker_ignores_responses() {
        let mut tracker = FetchTracker::default();
        let a = tracker.begin(1);
        tracker.retire();
        assert!(!tracker.settle(a, Ok("A")));
        assert!(tracker.pending().is_none());
    }

    #[test]
    fn errors_become_failed_with_message() {
        let mut tracker = FetchTracker::<()>::default();
        let a = tracker.begin(1);
        tracker.settle(a, Err(AppError::not_found("Judgment not found")));
        assert_eq!(
            tracker.state(),
            &FetchState::Failed("We couldn't find this judgment.".into())
        );
    }

    #[test]
    fn failure_message_falls_back_to_error_text() {
        assert_eq!(failure_message(&AppError::internal("boom")), "boom");
        assert_eq!(
            failure_message(&AppError::internal("")),
            "Something went wrong. Please try again."
        );
    }
}
