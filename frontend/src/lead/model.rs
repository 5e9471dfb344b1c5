use serde::Serialize;

use crate::lead::error::SubmitError;

/// What the visitor is asking for. The backend picks its notification
/// wording from this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    Lead,
    Callback,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Lead => "lead",
            FormType::Callback => "callback",
        }
    }
}

/// The fields as typed, before anything has been checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl LeadDraft {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.message.clear();
    }

    /// Checks the required fields and builds the request body.
    ///
    /// Values are sent as typed; trimming happens on the server.
    pub fn to_submission(&self, form_type: FormType) -> Result<LeadSubmission, SubmitError> {
        if self.name.trim().is_empty() {
            return Err(SubmitError::Validation("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(SubmitError::Validation("phone"));
        }

        Ok(LeadSubmission {
            name: self.name.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            form_type,
        })
    }
}

/// Body of the single outbound POST.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub form_type: FormType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_submission_serializes_in_field_order() {
        let draft = LeadDraft {
            name: "Иван".to_string(),
            phone: "+79990000000".to_string(),
            message: String::new(),
        };
        let submission = draft.to_submission(FormType::Callback).unwrap();
        let body = serde_json::to_string(&submission).unwrap();
        assert_eq!(
            body,
            r#"{"name":"Иван","phone":"+79990000000","message":"","form_type":"callback"}"#
        );
    }

    #[test]
    fn blank_name_is_rejected_before_phone() {
        let draft = LeadDraft {
            name: "   ".to_string(),
            phone: String::new(),
            message: String::new(),
        };
        assert_eq!(
            draft.to_submission(FormType::Lead),
            Err(SubmitError::Validation("name"))
        );
    }

    #[test]
    fn missing_phone_is_rejected() {
        let draft = LeadDraft {
            name: "Анна".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.to_submission(FormType::Lead),
            Err(SubmitError::Validation("phone"))
        );
    }

    #[test]
    fn interest_hint_prefills_message() {
        let draft = LeadDraft::with_message("Электромопеды");
        assert_eq!(draft.message, "Электромопеды");
        assert!(draft.name.is_empty());
    }
}
