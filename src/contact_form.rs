//! State for the contact section's form: three text fields, a submitting
//! flag and the outcome banner. Submission is simulated — the form waits
//! one second, logs the payload and reports success — but the state
//! transitions live here, off the component, where they can be tested
//! without a browser.

use serde::Serialize;

/// Simulated network latency between submit and outcome.
pub const SUBMIT_DELAY_MS: u32 = 1_000;

/// How long the outcome banner stays up before the form returns to rest.
pub const STATUS_DISPLAY_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    Success,
    Error,
}

/// What a submit would put on the wire. Logged as JSON instead, since the
/// site has no backend to send it to.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// One transition of the form. The component dispatches these — field
/// edits from input events, the rest from the timed submit continuations
/// — and each applies to the state current at dispatch time, so typing
/// between the timed steps is never rolled back.
#[derive(Clone, PartialEq, Debug)]
pub enum FormAction {
    EditName(String),
    EditEmail(String),
    EditMessage(String),
    BeginSubmit,
    FinishSubmit(SubmitOutcome),
    ClearOutcome,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
    outcome: Option<SubmitOutcome>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn outcome(&self) -> Option<SubmitOutcome> {
        self.outcome
    }

    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Starts a submit: marks the form busy and drops any stale banner.
    /// Returns false without touching anything if a submit is already in
    /// flight, which the disabled button makes unreachable anyway.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.outcome = None;
        true
    }

    /// Records the outcome and frees the button. Success empties the
    /// fields; failure leaves them for another try. The simulated submit
    /// only ever succeeds, but the banner copy covers both.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        self.outcome = Some(outcome);
        if outcome == SubmitOutcome::Success {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }

    /// Takes the banner down once its display window has passed.
    pub fn clear_outcome(&mut self) {
        self.outcome = None;
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::EditName(value) => self.name = value,
            FormAction::EditEmail(value) => self.email = value,
            FormAction::EditMessage(value) => self.message = value,
            FormAction::BeginSubmit => {
                self.begin_submit();
            }
            FormAction::FinishSubmit(outcome) => self.finish_submit(outcome),
            FormAction::ClearOutcome => self.clear_outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "陳大文".to_string();
        form.email = "chan@example.com".to_string();
        form.message = "想了解貴公司的服務。".to_string();
        form
    }

    #[test]
    fn a_new_form_is_empty_and_at_rest() {
        let form = ContactForm::new();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert!(!form.is_submitting());
        assert_eq!(form.outcome(), None);
    }

    #[test]
    fn begin_submit_marks_the_form_busy_and_drops_the_old_banner() {
        let mut form = filled();
        form.finish_submit(SubmitOutcome::Error);
        assert_eq!(form.outcome(), Some(SubmitOutcome::Error));

        assert!(form.begin_submit());
        assert!(form.is_submitting());
        assert_eq!(form.outcome(), None);
    }

    #[test]
    fn a_submit_in_flight_refuses_another() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn success_empties_the_fields() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Success);

        assert!(!form.is_submitting());
        assert_eq!(form.outcome(), Some(SubmitOutcome::Success));
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn failure_keeps_the_fields_for_a_retry() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Error);

        assert!(!form.is_submitting());
        assert_eq!(form.outcome(), Some(SubmitOutcome::Error));
        assert_eq!(form.name, "陳大文");
        assert_eq!(form.email, "chan@example.com");
        assert_eq!(form.message, "想了解貴公司的服務。");
    }

    #[test]
    fn clearing_the_outcome_returns_the_form_to_rest() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Success);
        form.clear_outcome();

        assert_eq!(form.outcome(), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn the_submission_snapshot_serializes_the_three_fields() {
        let form = filled();
        let json = serde_json::to_value(form.submission()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "陳大文",
                "email": "chan@example.com",
                "message": "想了解貴公司的服務。",
            })
        );
    }

    #[test]
    fn the_timed_clear_acts_on_the_latest_state_not_a_submit_snapshot() {
        // The submit flow as the component dispatches it: begin, then the
        // two timed steps, with the visitor starting a new message while
        // the success banner is still up.
        let mut form = filled();
        form.apply(FormAction::BeginSubmit);
        form.apply(FormAction::FinishSubmit(SubmitOutcome::Success));
        form.apply(FormAction::EditName("新訪客".to_string()));
        form.apply(FormAction::EditMessage("另一個問題。".to_string()));
        form.apply(FormAction::ClearOutcome);

        assert_eq!(form.name, "新訪客");
        assert_eq!(form.message, "另一個問題。");
        assert_eq!(form.outcome(), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn typing_during_the_banner_window_is_untouched_by_the_clear() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(SubmitOutcome::Success);

        form.name = "新訪客".to_string();
        form.clear_outcome();

        assert_eq!(form.name, "新訪客");
        assert_eq!(form.outcome(), None);
    }
}
