use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;

/// Delay before an opening modal becomes active
pub const MODAL_OPEN_DELAY_MS: u64 = 10;
/// Duration of the modal close transition
pub const MODAL_TRANSITION_MS: u64 = 200;
/// Duration of a message fade-out
pub const MESSAGE_FADE_MS: u64 = 500;

/// Busy flag and inline messages of a single form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormState {
    pub busy: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl FormState {
    /// Clear messages at the start of an action
    pub fn reset(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Clear messages and disable the control
    pub fn start(&mut self) {
        self.reset();
        self.busy = true;
    }

    /// Re-enable the control with an error
    pub fn fail(&mut self, error: impl Into<String>) {
        self.busy = false;
        self.error_message = Some(error.into());
    }

    /// Re-enable the control with an optional success message
    pub fn succeed(&mut self, message: Option<String>) {
        self.busy = false;
        self.success_message = message;
    }
}

/// What a fired timer did to the component owning it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStep {
    /// The timer was replaced or cancelled in the meantime
    Stale,
    /// The component moved on and started the given follow-up timer
    Continue(TimerId),
    /// The transition is complete
    Done,
}

/// A message that is dismissed by a timer it owns.
///
/// Showing a new value or clearing replaces the timer id, which cancels the
/// pending dismissal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timed<T> {
    value: Option<T>,
    fading: bool,
    timer: Option<TimerId>,
}

impl<T> Default for Timed<T> {
    fn default() -> Self {
        Self {
            value: None,
            fading: false,
            timer: None,
        }
    }
}

impl<T> Timed<T> {
    /// Show a value that dismisses itself once `timer` fires
    pub fn show(&mut self, value: T, timer: TimerId) {
        self.value = Some(value);
        self.fading = false;
        self.timer = Some(timer);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Advance on a fired timer: visible → fading (using `next`) → cleared
    pub fn on_timer(&mut self, id: TimerId, next: TimerId) -> TimerStep {
        if self.timer != Some(id) || self.value.is_none() {
            return TimerStep::Stale;
        }

        if self.fading {
            self.clear();
            TimerStep::Done
        } else {
            self.fading = true;
            self.timer = Some(next);
            TimerStep::Continue(next)
        }
    }
}

/// Phase of the disconnect confirmation modal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    /// Displayed, transition not yet started
    Opening,
    /// Displayed with the "active" class
    Open,
    /// "active" class removed, hidden once the transition ends
    Closing,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalState {
    pub phase: ModalPhase,
    timer: Option<TimerId>,
}

impl ModalState {
    /// Start opening; the caller schedules `timer` for `MODAL_OPEN_DELAY_MS`
    pub fn show(&mut self, timer: TimerId) {
        self.phase = ModalPhase::Opening;
        self.timer = Some(timer);
    }

    /// Start closing; the caller schedules `timer` for `MODAL_TRANSITION_MS`.
    ///
    /// Returns false when the modal is already hidden or closing.
    pub fn close(&mut self, timer: TimerId) -> bool {
        match self.phase {
            ModalPhase::Hidden | ModalPhase::Closing => false,
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                self.timer = Some(timer);
                true
            }
        }
    }

    pub fn on_timer(&mut self, id: TimerId) -> TimerStep {
        if self.timer != Some(id) {
            return TimerStep::Stale;
        }

        self.timer = None;
        self.phase = match self.phase {
            ModalPhase::Opening => ModalPhase::Open,
            ModalPhase::Closing => ModalPhase::Hidden,
            phase => phase,
        };
        TimerStep::Done
    }

    /// Whether the modal is on screen (in any phase but hidden)
    pub fn is_displayed(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    pub fn is_active(&self) -> bool {
        self.phase == ModalPhase::Open
    }
}

/// Component owning a timer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerSlot {
    ConnectionError,
    Banner,
    FanNotice,
    DisconnectModal,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Wifi,
    AccessPoint,
    Monitor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PasswordField {
    Connect,
    AccessPoint,
}

/// Input the shell should move focus to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FocusTarget {
    ConnectPassword,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_message_fades_then_clears() {
        let mut message = Timed::default();
        message.show("saved".to_string(), 1);

        assert_eq!(message.on_timer(1, 2), TimerStep::Continue(2));
        assert!(message.is_fading());
        assert!(message.is_visible());

        assert_eq!(message.on_timer(2, 3), TimerStep::Done);
        assert!(!message.is_visible());
        assert_eq!(message.timer(), None);
    }

    #[test]
    fn replaced_message_ignores_old_timer() {
        let mut message = Timed::default();
        message.show("first".to_string(), 1);
        message.show("second".to_string(), 2);

        assert_eq!(message.on_timer(1, 3), TimerStep::Stale);
        assert_eq!(message.value().map(String::as_str), Some("second"));
        assert!(!message.is_fading());
    }

    #[test]
    fn cleared_message_ignores_timer() {
        let mut message = Timed::default();
        message.show(7u8, 1);
        message.clear();

        assert_eq!(message.on_timer(1, 2), TimerStep::Stale);
    }

    #[test]
    fn modal_walks_through_all_phases() {
        let mut modal = ModalState::default();
        assert_eq!(modal.phase, ModalPhase::Hidden);

        modal.show(1);
        assert_eq!(modal.phase, ModalPhase::Opening);
        assert!(modal.is_displayed());
        assert!(!modal.is_active());

        assert_eq!(modal.on_timer(1), TimerStep::Done);
        assert_eq!(modal.phase, ModalPhase::Open);
        assert!(modal.is_active());

        assert!(modal.close(2));
        assert_eq!(modal.phase, ModalPhase::Closing);

        assert_eq!(modal.on_timer(2), TimerStep::Done);
        assert_eq!(modal.phase, ModalPhase::Hidden);
    }

    #[test]
    fn closing_before_open_delay_ignores_open_timer() {
        let mut modal = ModalState::default();
        modal.show(1);
        assert!(modal.close(2));

        assert_eq!(modal.on_timer(1), TimerStep::Stale);
        assert_eq!(modal.phase, ModalPhase::Closing);
        assert_eq!(modal.on_timer(2), TimerStep::Done);
        assert_eq!(modal.phase, ModalPhase::Hidden);
    }

    #[test]
    fn hidden_modal_cannot_close() {
        let mut modal = ModalState::default();
        assert!(!modal.close(1));
        assert_eq!(modal.phase, ModalPhase::Hidden);
    }

    #[test]
    fn form_state_resets_on_start() {
        let mut form = FormState {
            busy: false,
            error_message: Some("old".to_string()),
            success_message: Some("older".to_string()),
        };

        form.start();
        assert!(form.busy);
        assert_eq!(form.error_message, None);
        assert_eq!(form.success_message, None);

        form.fail("broken");
        assert!(!form.busy);
        assert_eq!(form.error_message.as_deref(), Some("broken"));
    }
}
