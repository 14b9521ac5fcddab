use serde::{Deserialize, Serialize};

/// Top-level screens of the booking flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    TicketModal,
    Registration,
    Payment,
}

/// Whether the flow may move directly from `current` to `next`.
#[must_use]
pub const fn is_transition_allowed(current: Screen, next: Screen) -> bool {
    match current {
        Screen::TicketModal | Screen::Registration => matches!(next, Screen::Payment),
        Screen::Payment => matches!(next, Screen::TicketModal | Screen::Registration),
    }
}

/// Tracks the active screen and where the payment screen returns to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
    return_to: Option<Screen>,
}

impl Navigator {
    #[must_use]
    pub const fn new(start: Screen) -> Self {
        Self {
            current: start,
            return_to: None,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Screen {
        self.current
    }

    #[must_use]
    pub const fn return_to(&self) -> Option<Screen> {
        self.return_to
    }

    /// Move to `next` when allowed. Leaving the payment screen is only
    /// possible towards the screen that opened it.
    pub fn go(&mut self, next: Screen) -> bool {
        if next == self.current || !is_transition_allowed(self.current, next) {
            return false;
        }
        if self.current == Screen::Payment && self.return_to != Some(next) {
            return false;
        }
        if next == Screen::Payment {
            self.return_to = Some(self.current);
        } else {
            self.return_to = None;
        }
        log::debug!("navigate {:?} -> {next:?}", self.current);
        self.current = next;
        true
    }

    /// Return from the payment screen to its origin.
    pub fn back(&mut self) -> Option<Screen> {
        let origin = self.return_to?;
        self.go(origin).then_some(origin)
    }
}
