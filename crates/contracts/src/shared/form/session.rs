use super::{FormError, FormModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Closed,
    Editing,
    Submitting,
}

/// Lifecycle of one modal form instance.
///
/// Closing (cancel or success) always drops the form back to `F::default()`,
/// so the next open never sees values from a previously edited entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSession<F> {
    phase: FormPhase,
    form: F,
    key: Option<String>,
}

impl<F: FormModel> FormSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Identity of the entity the form was seeded from (`None` for "new" forms)
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn open(&mut self, seed: F, key: Option<String>) {
        self.form = seed;
        self.key = key;
        self.phase = FormPhase::Editing;
    }

    /// Follow the host's `open` flag. Re-seeds when the entity identity changes
    /// while the modal stays open.
    pub fn sync_with(&mut self, open: bool, key: Option<&str>, seed: impl FnOnce() -> F) {
        match (open, self.is_open()) {
            (true, false) => self.open(seed(), key.map(str::to_owned)),
            (true, true) if self.key.as_deref() != key => {
                log::debug!("form re-seeded: {:?} -> {:?}", self.key, key);
                self.open(seed(), key.map(str::to_owned));
            }
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    /// Apply a field-level update. Ignored unless the form is being edited.
    pub fn edit(&mut self, update: impl FnOnce(&mut F)) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        update(&mut self.form);
        true
    }

    /// Run the required-field check and hand out the snapshot to submit.
    pub fn begin_submit(&mut self) -> Result<F, FormError> {
        if self.phase != FormPhase::Editing {
            return Err(FormError::NotEditing);
        }
        self.form.validate()?;
        self.phase = FormPhase::Submitting;
        Ok(self.form.clone())
    }

    /// The mutation was rejected: keep the data, allow another attempt.
    pub fn fail_submit(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn finish_success(&mut self) {
        self.reset();
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::RequiredField;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TagForm {
        name: String,
    }

    impl FormModel for TagForm {
        fn required_fields(&self) -> Vec<RequiredField<'_>> {
            vec![RequiredField::new("Nome", &self.name)]
        }
    }

    fn tag(name: &str) -> TagForm {
        TagForm { name: name.into() }
    }

    #[test]
    fn test_open_edit_submit_success_resets() {
        let mut session = FormSession::<TagForm>::new();
        session.open(tag("freios"), Some("t1".into()));
        assert_eq!(session.phase(), FormPhase::Editing);

        assert!(session.edit(|f| f.name.push_str(" dianteiros")));
        let submitted = session.begin_submit().unwrap();
        assert_eq!(submitted.name, "freios dianteiros");
        assert!(session.is_submitting());

        session.finish_success();
        assert_eq!(session, FormSession::default());
    }

    #[test]
    fn test_submit_with_empty_required_stays_editing() {
        let mut session = FormSession::<TagForm>::new();
        session.open(tag(""), None);
        let err = session.begin_submit().unwrap_err();
        assert_eq!(err, FormError::MissingFields(vec!["Nome"]));
        assert_eq!(session.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_cancel_drops_edits() {
        let mut session = FormSession::<TagForm>::new();
        session.open(tag("óleo"), Some("a".into()));
        session.edit(|f| f.name = "alterado".into());
        session.cancel();
        assert!(!session.is_open());
        assert_eq!(session.form(), &TagForm::default());
        assert_eq!(session.key(), None);
    }

    #[test]
    fn test_edits_ignored_while_closed_or_submitting() {
        let mut session = FormSession::<TagForm>::new();
        assert!(!session.edit(|f| f.name = "x".into()));
        session.open(tag("pneu"), None);
        session.begin_submit().unwrap();
        assert!(!session.edit(|f| f.name = "y".into()));
        assert_eq!(session.form().name, "pneu");
    }

    #[test]
    fn test_fail_submit_keeps_data() {
        let mut session = FormSession::<TagForm>::new();
        session.open(tag("filtro"), None);
        session.begin_submit().unwrap();
        session.fail_submit();
        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.form().name, "filtro");
    }

    #[test]
    fn test_sync_reseeds_when_entity_changes() {
        let mut session = FormSession::<TagForm>::new();
        session.sync_with(true, Some("a"), || tag("primeiro"));
        session.edit(|f| f.name = "editado".into());

        // same entity: edits survive
        session.sync_with(true, Some("a"), || tag("primeiro"));
        assert_eq!(session.form().name, "editado");

        session.sync_with(true, Some("b"), || tag("segundo"));
        assert_eq!(session.form().name, "segundo");
        assert_eq!(session.key(), Some("b"));

        session.sync_with(false, Some("b"), || tag("ignorado"));
        assert!(!session.is_open());
        assert_eq!(session.form(), &TagForm::default());
    }

    #[test]
    fn test_begin_submit_requires_open_form() {
        let mut session = FormSession::<TagForm>::new();
        assert_eq!(session.begin_submit().unwrap_err(), FormError::NotEditing);
    }
}
