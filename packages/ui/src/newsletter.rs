use crate::forms::{evaluate, FieldValue, Values, NEWSLETTER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscribeState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Error,
}

/// Proof that a pending completion belongs to the latest submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Footer newsletter sign-up. Nothing is sent anywhere; the delay is
/// simulated by the caller between `submit` and `complete`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Newsletter {
    email: String,
    state: SubscribeState,
    error: Option<&'static str>,
    generation: u64,
}

impl Newsletter {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> SubscribeState {
        self.state
    }

    /// Message key shown in the `Error` state.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubscribeState::Submitting
    }

    /// Store the typed address. Editing drops any shown error.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        if self.state == SubscribeState::Error {
            self.state = SubscribeState::Idle;
        }
        self.error = None;
    }

    /// Validate and start a submission. An invalid address moves to
    /// `Error` and never reaches `Submitting`.
    pub fn submit(&mut self) -> Option<Ticket> {
        if self.is_busy() {
            return None;
        }
        self.error = None;

        let mut values = Values::new();
        values.insert("email", FieldValue::Text(self.email.clone()));
        if let Some(message) = evaluate(&NEWSLETTER, &values).remove("email") {
            self.state = SubscribeState::Error;
            self.error = Some(message);
            return None;
        }

        self.state = SubscribeState::Submitting;
        Some(self.next_ticket())
    }

    /// The simulated request finished. Clears the address and hands out
    /// the ticket for the later reset.
    pub fn complete(&mut self, ticket: Ticket) -> Option<Ticket> {
        if !self.holds(ticket) || self.state != SubscribeState::Submitting {
            return None;
        }
        tracing::info!("newsletter subscription accepted");
        self.state = SubscribeState::Submitted;
        self.email.clear();
        Some(ticket)
    }

    /// Return to `Idle` after the confirmation has been shown.
    pub fn reset(&mut self, ticket: Ticket) {
        if self.holds(ticket) && self.state == SubscribeState::Submitted {
            self.state = SubscribeState::Idle;
        }
    }

    fn next_ticket(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    fn holds(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_email_never_submits() {
        let mut n = Newsletter::default();
        assert!(n.submit().is_none());
        assert_eq!(n.state(), SubscribeState::Error);
        assert_eq!(n.error(), Some("footer.emailError"));

        n.set_email("nobody@nowhere");
        assert!(n.submit().is_none());
        assert_eq!(n.state(), SubscribeState::Error);
    }

    #[test]
    fn full_cycle() {
        let mut n = Newsletter::default();
        n.set_email("reader@example.com");
        let ticket = n.submit().unwrap();
        assert_eq!(n.state(), SubscribeState::Submitting);
        assert_eq!(n.error(), None);

        let ticket = n.complete(ticket).unwrap();
        assert_eq!(n.state(), SubscribeState::Submitted);
        assert_eq!(n.email(), "");

        n.reset(ticket);
        assert_eq!(n.state(), SubscribeState::Idle);
    }

    #[test]
    fn busy_form_ignores_resubmit() {
        let mut n = Newsletter::default();
        n.set_email("reader@example.com");
        let first = n.submit().unwrap();
        assert!(n.submit().is_none());
        assert!(n.complete(first).is_some());
    }

    #[test]
    fn tickets_from_an_earlier_cycle_are_ignored() {
        let mut n = Newsletter::default();
        n.set_email("a@example.com");
        let first = n.submit().unwrap();
        let first = n.complete(first).unwrap();
        n.reset(first);

        n.set_email("b@example.com");
        let second = n.submit().unwrap();
        assert!(n.complete(first).is_none());
        assert_eq!(n.state(), SubscribeState::Submitting);
        assert_eq!(n.email(), "b@example.com");

        let second = n.complete(second).unwrap();
        n.reset(first);
        assert_eq!(n.state(), SubscribeState::Submitted);
        n.reset(second);
        assert_eq!(n.state(), SubscribeState::Idle);
    }

    #[test]
    fn editing_after_an_error_returns_to_idle() {
        let mut n = Newsletter::default();
        n.set_email("nope");
        assert!(n.submit().is_none());
        assert_eq!(n.state(), SubscribeState::Error);

        n.set_email("nope2");
        assert_eq!(n.state(), SubscribeState::Idle);
        assert_eq!(n.error(), None);
    }

    #[test]
    fn editing_while_submitting_keeps_the_request() {
        let mut n = Newsletter::default();
        n.set_email("reader@example.com");
        let ticket = n.submit().unwrap();
        n.set_email("reader@example.org");
        assert_eq!(n.state(), SubscribeState::Submitting);
        assert!(n.complete(ticket).is_some());
    }

    #[test]
    fn error_clears_on_next_valid_submit() {
        let mut n = Newsletter::default();
        n.submit();
        n.set_email("reader@example.com");
        assert!(n.submit().is_some());
        assert_eq!(n.error(), None);
    }
}
