use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Shared flag raised by the API client when the backend rejects the admin
/// credential. The front end drains it once per tick and collapses every
/// admin view back to the login screen.
#[derive(Clone, Debug, Default)]
pub struct SessionHandle {
    signed_out: Arc<AtomicBool>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn force_sign_out(&self) {
        if !self.signed_out.swap(true, Ordering::SeqCst) {
            debug!("session marked signed out");
        }
    }

    /// Consumes the sign-out signal. Returns true at most once per raise.
    pub fn take_signed_out(&self) -> bool {
        self.signed_out.swap(false, Ordering::SeqCst)
    }

    pub fn is_signed_out(&self) -> bool {
        self.signed_out.load(Ordering::SeqCst)
    }
}

/// One-shot latch for the dashboard credential check. The check runs once
/// per entry into the admin area; re-renders while `Checking` or `Checked`
/// are no-ops, and leaving the area resets the latch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GuardState {
    #[default]
    Unchecked,
    Checking,
    Checked,
}

impl GuardState {
    /// Arms the latch. Returns true only on the transition out of
    /// `Unchecked`; the caller issues the validation request exactly then.
    pub fn begin(&mut self) -> bool {
        if *self == GuardState::Unchecked {
            *self = GuardState::Checking;
            debug!("session guard armed");
            true
        } else {
            false
        }
    }

    pub fn complete(&mut self) {
        *self = GuardState::Checked;
    }

    pub fn reset(&mut self) {
        *self = GuardState::Unchecked;
    }

    pub fn is_checking(&self) -> bool {
        *self == GuardState::Checking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_out_signal_is_consumed_once() {
        let session = SessionHandle::new();
        session.force_sign_out();
        session.force_sign_out();
        assert!(session.take_signed_out());
        assert!(!session.take_signed_out());
    }

    #[test]
    fn guard_begins_at_most_once_until_reset() {
        let mut guard = GuardState::default();
        assert!(guard.begin());
        assert!(!guard.begin());
        guard.complete();
        assert!(!guard.begin());
        guard.reset();
        assert!(guard.begin());
    }

    #[test]
    fn guard_completion_leaves_checked() {
        let mut guard = GuardState::default();
        guard.begin();
        assert!(guard.is_checking());
        guard.complete();
        assert_eq!(guard, GuardState::Checked);
    }
}
