use std::rc::Rc;

use yew::prelude::*;

use crate::lead::error::SubmitError;
use crate::lead::model::{FormType, LeadDraft, LeadSubmission};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Per-form state. Each rendered form owns one of these.
///
/// Phase only moves `Idle -> Submitting -> Succeeded | Failed`, and
/// `Failed -> Submitting` on retry. `Succeeded` stays put until `Reset`.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadFormState {
    pub draft: LeadDraft,
    pub phase: Phase,
    pub error_message: Option<String>,
    pub validation_error: Option<String>,
}

pub enum FormAction {
    SetName(String),
    SetPhone(String),
    SetMessage(String),
    /// Interest hint from whatever opened the form.
    Prefill(String),
    Submit,
    Resolved(Result<(), SubmitError>),
    Invalid(SubmitError),
    Reset,
    /// `Reset` plus a fresh interest hint; the previous message is dropped.
    Reopen(String),
}

impl Default for LeadFormState {
    fn default() -> Self {
        Self::with_draft(LeadDraft::default())
    }
}

impl LeadFormState {
    pub fn with_draft(draft: LeadDraft) -> Self {
        Self {
            draft,
            phase: Phase::Idle,
            error_message: None,
            validation_error: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Failed)
    }

    /// Guard in front of every request: refuses while one is in flight or
    /// after success, then validates the draft.
    pub fn begin(&self, form_type: FormType) -> Result<LeadSubmission, SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::Busy);
        }
        self.draft.to_submission(form_type)
    }
}

impl Reducible for LeadFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            FormAction::SetName(name) => next.draft.name = name,
            FormAction::SetPhone(phone) => next.draft.phone = phone,
            FormAction::SetMessage(message) => next.draft.message = message,
            FormAction::Prefill(message) => {
                if next.is_submitting() {
                    return self;
                }
                next.draft.message = message;
            }
            FormAction::Submit => {
                if !self.can_submit() {
                    return self;
                }
                next.phase = Phase::Submitting;
                next.error_message = None;
                next.validation_error = None;
            }
            FormAction::Resolved(outcome) => {
                if !self.is_submitting() {
                    return self;
                }
                match outcome {
                    Ok(()) => {
                        next.phase = Phase::Succeeded;
                        next.draft.clear();
                    }
                    Err(e) => {
                        next.phase = Phase::Failed;
                        next.error_message = Some(e.user_message());
                    }
                }
            }
            FormAction::Invalid(e) => next.validation_error = Some(e.user_message()),
            FormAction::Reset => {
                if next.is_submitting() {
                    return self;
                }
                next.phase = Phase::Idle;
                next.error_message = None;
                next.validation_error = None;
            }
            FormAction::Reopen(interest) => {
                if next.is_submitting() {
                    return self;
                }
                next.phase = Phase::Idle;
                next.error_message = None;
                next.validation_error = None;
                next.draft.message = interest;
            }
        }

        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::error::{TransportError, NETWORK_FALLBACK};

    fn filled() -> Rc<LeadFormState> {
        Rc::new(LeadFormState::with_draft(LeadDraft {
            name: "Иван".to_string(),
            phone: "+79990000000".to_string(),
            message: "Электровелосипеды".to_string(),
        }))
    }

    #[test]
    fn submit_moves_to_submitting_and_clears_error() {
        let failed = filled()
            .reduce(FormAction::Submit)
            .reduce(FormAction::Resolved(Err(SubmitError::Server("X".to_string()))));
        assert_eq!(failed.phase, Phase::Failed);
        assert_eq!(failed.error_message.as_deref(), Some("X"));

        let retry = failed.reduce(FormAction::Submit);
        assert_eq!(retry.phase, Phase::Submitting);
        assert_eq!(retry.error_message, None);
    }

    #[test]
    fn success_clears_all_three_fields() {
        let done = filled()
            .reduce(FormAction::Submit)
            .reduce(FormAction::Resolved(Ok(())));
        assert_eq!(done.phase, Phase::Succeeded);
        assert_eq!(done.draft, LeadDraft::default());
        assert_eq!(done.error_message, None);
    }

    #[test]
    fn transport_failure_shows_network_message() {
        let failed = filled()
            .reduce(FormAction::Submit)
            .reduce(FormAction::Resolved(Err(TransportError::Request("timeout".into()).into())));
        assert_eq!(failed.phase, Phase::Failed);
        assert_eq!(failed.error_message.as_deref(), Some(NETWORK_FALLBACK));
        assert_eq!(failed.draft.name, "Иван");
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let submitting = filled().reduce(FormAction::Submit);
        assert_eq!(submitting.begin(FormType::Lead), Err(SubmitError::Busy));

        let again = submitting.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&submitting, &again));
    }

    #[test]
    fn succeeded_is_terminal_until_reset() {
        let done = filled()
            .reduce(FormAction::Submit)
            .reduce(FormAction::Resolved(Ok(())));
        let still_done = done.clone().reduce(FormAction::Submit);
        assert_eq!(still_done.phase, Phase::Succeeded);

        let late = done.clone().reduce(FormAction::Resolved(Err(SubmitError::Busy)));
        assert_eq!(late.phase, Phase::Succeeded);

        let reopened = done.reduce(FormAction::Reset);
        assert_eq!(reopened.phase, Phase::Idle);
    }

    #[test]
    fn resolution_without_submit_is_ignored() {
        let idle = filled();
        let after = idle.clone().reduce(FormAction::Resolved(Ok(())));
        assert_eq!(after.phase, Phase::Idle);
        assert_eq!(after.draft.name, "Иван");
    }

    #[test]
    fn begin_validates_before_anything_is_sent() {
        let empty = LeadFormState::default();
        assert_eq!(empty.begin(FormType::Callback), Err(SubmitError::Validation("name")));

        let invalid = Rc::new(empty).reduce(FormAction::Invalid(SubmitError::Validation("name")));
        assert_eq!(invalid.phase, Phase::Idle);
        assert_eq!(invalid.validation_error.as_deref(), Some("Укажите имя"));
    }

    #[test]
    fn begin_builds_submission_from_draft() {
        let submission = filled().begin(FormType::Lead).unwrap();
        assert_eq!(submission.message, "Электровелосипеды");
        assert_eq!(submission.form_type, FormType::Lead);
    }

    #[test]
    fn prefill_replaces_message_only() {
        let state = filled().reduce(FormAction::Prefill("Премиум уровень".to_string()));
        assert_eq!(state.draft.message, "Премиум уровень");
        assert_eq!(state.draft.phone, "+79990000000");
    }

    #[test]
    fn reopen_drops_message_typed_for_another_form() {
        let reopened = filled().reduce(FormAction::Reopen(String::new()));
        assert_eq!(reopened.draft.message, "");
        assert_eq!(reopened.draft.name, "Иван");
        let submission = reopened.begin(FormType::Callback).unwrap();
        assert_eq!(submission.message, "");
    }

    #[test]
    fn reopen_while_submitting_is_ignored() {
        let submitting = filled().reduce(FormAction::Submit);
        let after = submitting.clone().reduce(FormAction::Reopen(String::new()));
        assert_eq!(after.phase, Phase::Submitting);
        assert_eq!(after.draft.message, "Электровелосипеды");
    }
}
