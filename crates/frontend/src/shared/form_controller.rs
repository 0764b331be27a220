//! Reactive wrapper around `FormSession`, shared by every entity modal.

use contracts::shared::form::{FormModel, FormSession};
use leptos::prelude::*;

use crate::shared::toast::{Notice, Toasts};

pub struct FormController<F: FormModel> {
    session: RwSignal<FormSession<F>>,
}

impl<F: FormModel> Clone for FormController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormModel> Copy for FormController<F> {}

impl<F: FormModel> FormController<F> {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(FormSession::new()),
        }
    }

    /// Follow the modal's `open` flag: seed on open, re-seed when `key`
    /// changes, reset on close.
    pub fn bind(
        self,
        open: RwSignal<bool>,
        key: impl Fn() -> Option<String> + 'static,
        seed: impl Fn() -> F + 'static,
    ) {
        Effect::new(move |_| {
            let is_open = open.get();
            let key = key();
            self.session
                .update(|s| s.sync_with(is_open, key.as_deref(), &seed));
        });
    }

    pub fn field<T>(self, read: impl FnOnce(&F) -> T) -> T {
        self.session.with(|s| read(s.form()))
    }

    pub fn edit(self, update: impl FnOnce(&mut F)) {
        self.session.update(|s| {
            s.edit(update);
        });
    }

    pub fn is_submitting(self) -> bool {
        self.session.with(|s| s.is_submitting())
    }

    /// Validate, run the store mutation and report the outcome.
    ///
    /// Returns `true` when the form was saved and reset; the caller then
    /// closes the modal.
    pub fn submit(
        self,
        toasts: &Toasts,
        success: Notice,
        mutation: impl FnOnce(F) -> Result<(), String>,
    ) -> bool {
        let mut notices = Vec::new();
        let saved = self
            .session
            .try_update(|s| submit_session(s, success, mutation, |n| notices.push(n)))
            .unwrap_or(false);
        for notice in notices {
            toasts.notify(notice);
        }
        saved
    }
}

/// One submit attempt against a form session.
///
/// The mutation runs only when the required fields are filled; every
/// outcome produces exactly one notice.
pub fn submit_session<F: FormModel>(
    session: &mut FormSession<F>,
    success: Notice,
    mutation: impl FnOnce(F) -> Result<(), String>,
    mut notify: impl FnMut(Notice),
) -> bool {
    let snapshot = match session.begin_submit() {
        Ok(form) => form,
        Err(err) => {
            log::debug!("form rejected: {}", err);
            notify(Notice::error("Dados incompletos", err.to_string()));
            return false;
        }
    };

    match mutation(snapshot) {
        Ok(()) => {
            session.finish_success();
            notify(success);
            true
        }
        Err(message) => {
            session.fail_submit();
            notify(Notice::error("Erro ao salvar", message));
            false
        }
    }
}

impl<F: FormModel> Default for FormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::NoticeVariant;
    use contracts::domain::a003_worker::WorkerDto;
    use contracts::shared::form::FormPhase;

    fn open_session(seed: WorkerDto) -> FormSession<WorkerDto> {
        let mut session = FormSession::new();
        session.open(seed, None);
        session
    }

    fn filled() -> WorkerDto {
        WorkerDto {
            name: "Rafael Costa".to_string(),
            role: "Mecânico".to_string(),
            ..WorkerDto::default()
        }
    }

    #[test]
    fn test_missing_required_field_never_calls_mutation() {
        let mut session = open_session(WorkerDto {
            name: "Rafael Costa".to_string(),
            ..WorkerDto::default()
        });
        let mut called = false;
        let mut notices = Vec::new();

        let saved = submit_session(
            &mut session,
            Notice::success("ok", ""),
            |_| {
                called = true;
                Ok(())
            },
            |n| notices.push(n),
        );

        assert!(!saved);
        assert!(!called);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].variant, NoticeVariant::Error);
        assert!(notices[0].description.contains("Função"));
        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.form().name, "Rafael Costa");
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut session = open_session(filled());
        let mut received = None;
        let mut notices = Vec::new();

        let saved = submit_session(
            &mut session,
            Notice::success("Funcionário cadastrado", ""),
            |dto| {
                received = Some(dto);
                Ok(())
            },
            |n| notices.push(n),
        );

        assert!(saved);
        assert_eq!(received, Some(filled()));
        assert_eq!(notices, vec![Notice::success("Funcionário cadastrado", "")]);
        assert!(!session.is_open());
        assert_eq!(session.form(), &WorkerDto::default());
    }

    #[test]
    fn test_rejected_mutation_keeps_data() {
        let mut session = open_session(filled());
        let mut notices = Vec::new();

        let saved = submit_session(
            &mut session,
            Notice::success("ok", ""),
            |_| Err("Funcionário não encontrado".to_string()),
            |n| notices.push(n),
        );

        assert!(!saved);
        assert_eq!(
            notices,
            vec![Notice::error("Erro ao salvar", "Funcionário não encontrado")]
        );
        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.form(), &filled());
    }
}
