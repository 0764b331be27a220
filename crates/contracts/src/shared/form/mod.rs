//! Generic modal-form lifecycle shared by every create/edit dialog.
//!
//! - `FormModel`: the form state of one entity plus its required-field rules
//! - `FormSession`: Closed -> Editing -> Submitting -> Closed state machine

mod session;

pub use session::{FormPhase, FormSession};

use thiserror::Error;

/// One field that must be filled before a form can be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

impl<'a> RequiredField<'a> {
    pub fn new(label: &'static str, value: &'a str) -> Self {
        Self { label, value }
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Preencha os campos obrigatórios: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("O formulário não está em edição")]
    NotEditing,
}

impl FormError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Form state of a modal. Implementors enumerate their own required set.
pub trait FormModel: Clone + Default + PartialEq + Send + Sync + 'static {
    /// Every field that must be non-blank, with its user-facing label
    fn required_fields(&self) -> Vec<RequiredField<'_>>;

    /// Value checks that run after the required set is satisfied
    fn check_values(&self) -> Result<(), FormError> {
        Ok(())
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .filter(RequiredField::is_empty)
            .map(|f| f.label)
            .collect()
    }

    fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        self.check_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NoteForm {
        title: String,
        body: String,
    }

    impl FormModel for NoteForm {
        fn required_fields(&self) -> Vec<RequiredField<'_>> {
            vec![
                RequiredField::new("Título", &self.title),
                RequiredField::new("Texto", &self.body),
            ]
        }
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let form = NoteForm {
            title: "   ".into(),
            body: "ok".into(),
        };
        assert_eq!(form.missing_fields(), vec!["Título"]);
    }

    #[test]
    fn test_missing_fields_message_lists_labels() {
        let err = NoteForm::default().validate().unwrap_err();
        assert_eq!(err, FormError::MissingFields(vec!["Título", "Texto"]));
        assert_eq!(
            err.to_string(),
            "Preencha os campos obrigatórios: Título, Texto"
        );
    }
}
