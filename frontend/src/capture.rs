//! State of the email capture dialog.
//!
//! The landing page owns a [`CaptureState`] through `use_reducer` and hands it
//! down to the dialog as a plain value. Every change goes through
//! [`CaptureAction`], so the whole lifecycle can be exercised without a browser.

use std::rc::Rc;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use yew::Reducible;

use crate::config;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(config::EMAIL_PATTERN).expect("email pattern is a valid regex"));

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Por favor ingresa un correo válido")]
    InvalidEmailFormat,
}

pub fn validate_email(email: &str) -> Result<(), CaptureError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(CaptureError::InvalidEmailFormat)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogPhase {
    #[default]
    Closed,
    Editing,
    Invalid,
    Success,
}

#[derive(Debug)]
pub enum CaptureAction {
    Open,
    UpdateEmail(String),
    Submit,
    Close,
    /// Fired by the auto-close timer. Only honoured for the session it was scheduled in.
    AutoClose { session: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureState {
    phase: DialogPhase,
    email: String,
    // Bumped on every open and close so a timer from an earlier session can be told apart.
    session: u64,
}

impl CaptureState {
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_visible(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_accepted(&self) -> bool {
        self.phase == DialogPhase::Success
    }

    pub fn error(&self) -> Option<CaptureError> {
        (self.phase == DialogPhase::Invalid).then_some(CaptureError::InvalidEmailFormat)
    }

    /// Returns the next state, or `None` when the action does not apply in the current phase.
    pub fn transition(&self, action: CaptureAction) -> Option<Self> {
        use DialogPhase::*;

        match (self.phase, action) {
            (Closed, CaptureAction::Open) => Some(Self {
                phase: Editing,
                email: String::new(),
                session: self.session + 1,
            }),
            (Editing | Invalid, CaptureAction::UpdateEmail(email)) => Some(Self {
                phase: Editing,
                email,
                session: self.session,
            }),
            (Editing | Invalid, CaptureAction::Submit) => {
                let phase = match validate_email(&self.email) {
                    Ok(()) => Success,
                    Err(_) => Invalid,
                };
                Some(Self { phase, ..self.clone() })
            }
            (Editing | Invalid | Success, CaptureAction::Close) => Some(self.closed()),
            (Success, CaptureAction::AutoClose { session }) if session == self.session => {
                Some(self.closed())
            }
            (_, CaptureAction::AutoClose { session }) => {
                debug!("Ignoring auto-close from session {} (current {})", session, self.session);
                None
            }
            _ => None,
        }
    }

    fn closed(&self) -> Self {
        Self {
            phase: DialogPhase::Closed,
            email: String::new(),
            session: self.session + 1,
        }
    }
}

impl Reducible for CaptureState {
    type Action = CaptureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.transition(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> CaptureState {
        CaptureState::default().transition(CaptureAction::Open).unwrap()
    }

    fn with_email(email: &str) -> CaptureState {
        opened()
            .transition(CaptureAction::UpdateEmail(email.to_string()))
            .unwrap()
    }

    fn submitted(email: &str) -> CaptureState {
        with_email(email).transition(CaptureAction::Submit).unwrap()
    }

    #[test]
    fn starts_closed_and_empty() {
        let state = CaptureState::default();
        assert_eq!(state.phase(), DialogPhase::Closed);
        assert!(!state.is_visible());
        assert!(!state.is_accepted());
        assert_eq!(state.email(), "");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn open_shows_editing_dialog() {
        let state = opened();
        assert_eq!(state.phase(), DialogPhase::Editing);
        assert!(state.is_visible());
    }

    #[test]
    fn open_while_open_is_ignored() {
        assert_eq!(with_email("a").transition(CaptureAction::Open), None);
    }

    #[test]
    fn accepts_loose_email_shapes() {
        for email in [
            "jane@example.com",
            "a@b.c",
            "first.last+tag@sub.domain.org",
            "x@y.z.w",
            "ñandú@correo.es",
            "a@.b.c",
        ] {
            assert_eq!(validate_email(email), Ok(()), "{email:?} should be accepted");
            assert_eq!(submitted(email).phase(), DialogPhase::Success, "{email:?}");
        }
    }

    #[test]
    fn rejects_non_matching_strings_and_keeps_input() {
        for email in [
            "",
            "not-an-email",
            "jane@example",
            "@example.com",
            "jane@.com",
            "jane@example.",
            "jane doe@example.com",
            "jane@@example.com",
            "jane@exa@mple.com",
            " jane@example.com",
            "jane@example.com\n",
        ] {
            let state = submitted(email);
            assert_eq!(state.phase(), DialogPhase::Invalid, "{email:?} should be rejected");
            assert_eq!(state.email(), email);
            assert_eq!(state.error(), Some(CaptureError::InvalidEmailFormat));
            assert!(state.is_visible());
        }
    }

    #[test]
    fn whitespace_follows_browser_definition() {
        // Not whitespace for a browser, so part of the address
        assert_eq!(validate_email("a\u{85}b@c.d"), Ok(()));
        for email in [
            "a\u{feff}b@c.d",
            "a\u{a0}b@c.d",
            "a@c\u{3000}d.e",
            "a@c.d\u{2028}e",
            "a\tb@c.d",
            "a@c.d\u{0b}e",
        ] {
            assert_eq!(
                validate_email(email),
                Err(CaptureError::InvalidEmailFormat),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn open_is_unconditional_from_closed() {
        // The hero form opens the dialog without looking at its own draft, so
        // opening can never depend on anything typed before.
        let reopened = submitted("abc")
            .transition(CaptureAction::Close)
            .and_then(|s| s.transition(CaptureAction::Open))
            .unwrap();
        for state in [opened(), reopened] {
            assert_eq!(state.phase(), DialogPhase::Editing);
            assert_eq!(state.email(), "");
        }
    }

    struct RecordingLogger;

    static RECORDS: std::sync::Mutex<Vec<String>> = std::sync::Mutex::new(Vec::new());

    impl log::Log for RecordingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            RECORDS.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger;

    #[test]
    fn rejected_submission_is_not_logged() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let state = submitted("rejected-without-trace");
        assert_eq!(state.phase(), DialogPhase::Invalid);

        let records = RECORDS.lock().unwrap();
        assert!(records
            .iter()
            .all(|line| !line.contains("rejected-without-trace") && !line.contains("reject")));
    }

    #[test]
    fn update_clears_invalid_flag_regardless_of_value() {
        for next in ["still wrong", "", "ok@example.com"] {
            let state = submitted("not-an-email")
                .transition(CaptureAction::UpdateEmail(next.to_string()))
                .unwrap();
            assert_eq!(state.phase(), DialogPhase::Editing);
            assert_eq!(state.error(), None);
            assert_eq!(state.email(), next);
        }
    }

    #[test]
    fn update_stores_value_verbatim() {
        let state = with_email("  Jane@Example.COM  ");
        assert_eq!(state.email(), "  Jane@Example.COM  ");
    }

    #[test]
    fn invalid_then_valid_submission_succeeds() {
        let state = submitted("nope")
            .transition(CaptureAction::UpdateEmail("jane@example.com".into()))
            .and_then(|s| s.transition(CaptureAction::Submit))
            .unwrap();
        assert!(state.is_accepted());
    }

    #[test]
    fn resubmitting_invalid_input_stays_invalid() {
        let state = submitted("nope").transition(CaptureAction::Submit).unwrap();
        assert_eq!(state.phase(), DialogPhase::Invalid);
        assert_eq!(state.email(), "nope");
    }

    #[test]
    fn successful_submission_keeps_email_until_auto_close() {
        let state = submitted("jane@example.com");
        assert!(state.is_accepted());
        assert_eq!(state.email(), "jane@example.com");

        let closed = state
            .transition(CaptureAction::AutoClose { session: state.session() })
            .unwrap();
        assert_eq!(closed.phase(), DialogPhase::Closed);
        assert_eq!(closed.email(), "");
    }

    #[test]
    fn success_view_ignores_edits_and_resubmits() {
        let state = submitted("jane@example.com");
        assert_eq!(state.transition(CaptureAction::UpdateEmail("x".into())), None);
        assert_eq!(state.transition(CaptureAction::Submit), None);
    }

    #[test]
    fn closed_dialog_ignores_input_and_submit() {
        let state = CaptureState::default();
        assert_eq!(state.transition(CaptureAction::UpdateEmail("a@b.c".into())), None);
        assert_eq!(state.transition(CaptureAction::Submit), None);
        assert_eq!(state.transition(CaptureAction::Close), None);
    }

    #[test]
    fn manual_close_works_from_every_open_phase() {
        for state in [opened(), submitted("bad"), submitted("jane@example.com")] {
            let closed = state.transition(CaptureAction::Close).unwrap();
            assert!(!closed.is_visible());
            assert!(!closed.is_accepted());
            assert_eq!(closed.email(), "");
        }
    }

    #[test]
    fn auto_close_is_ignored_unless_accepted() {
        let state = with_email("jane@example.com");
        assert_eq!(
            state.transition(CaptureAction::AutoClose { session: state.session() }),
            None
        );
    }

    // The dialog this page was modelled on left the 2 s timer running after a manual
    // close, so it could shut a dialog the user had just reopened. Timers are now bound
    // to the session they were scheduled in.
    #[test]
    fn stale_auto_close_does_not_touch_reopened_dialog() {
        let accepted = submitted("jane@example.com");
        let stale_session = accepted.session();

        let reopened = accepted
            .transition(CaptureAction::Close)
            .and_then(|s| s.transition(CaptureAction::Open))
            .and_then(|s| s.transition(CaptureAction::UpdateEmail("typing@again".into())))
            .unwrap();
        assert_ne!(reopened.session(), stale_session);

        assert_eq!(
            reopened.transition(CaptureAction::AutoClose { session: stale_session }),
            None
        );
    }

    #[test]
    fn stale_auto_close_does_not_close_a_new_success() {
        let first = submitted("jane@example.com");
        let stale_session = first.session();

        let second = first
            .transition(CaptureAction::Close)
            .and_then(|s| s.transition(CaptureAction::Open))
            .and_then(|s| s.transition(CaptureAction::UpdateEmail("ana@example.com".into())))
            .and_then(|s| s.transition(CaptureAction::Submit))
            .unwrap();
        assert!(second.is_accepted());

        assert_eq!(
            second.transition(CaptureAction::AutoClose { session: stale_session }),
            None
        );
        assert!(second
            .transition(CaptureAction::AutoClose { session: second.session() })
            .is_some());
    }

    #[test]
    fn reopening_starts_with_empty_email() {
        let state = with_email("half typed")
            .transition(CaptureAction::Close)
            .and_then(|s| s.transition(CaptureAction::Open))
            .unwrap();
        assert_eq!(state.email(), "");
        assert_eq!(state.phase(), DialogPhase::Editing);
    }

    #[test]
    fn reducer_keeps_same_rc_for_ignored_actions() {
        let state = Rc::new(CaptureState::default());
        let next = state.clone().reduce(CaptureAction::Submit);
        assert!(Rc::ptr_eq(&state, &next));

        let opened = state.reduce(CaptureAction::Open);
        assert!(opened.is_visible());
    }

    #[test]
    fn error_message_is_the_inline_advisory() {
        assert_eq!(
            CaptureError::InvalidEmailFormat.to_string(),
            "Por favor ingresa un correo válido"
        );
    }
}
