use contracts::domain::a004_expense::{Expense, ExpenseDto};
use leptos::prelude::*;

use super::fields::ExpenseFields;
use crate::shared::components::FormModal;
use crate::shared::form_controller::FormController;
use crate::shared::toast::{use_toasts, Notice};
use crate::store::use_app;

#[component]
pub fn EditExpenseModal(
    open: RwSignal<bool>,
    #[prop(into)]
    expense: Signal<Option<Expense>>,
) -> impl IntoView {
    let store = use_app();
    let toasts = use_toasts();
    let form = FormController::<ExpenseDto>::new();
    form.bind(
        open,
        move || expense.with(|e| e.as_ref().map(Expense::to_string_id)),
        move || expense.with(|e| e.as_ref().map(ExpenseDto::from).unwrap_or_default()),
    );

    let save = Callback::new(move |_| {
        let saved = form.submit(
            &toasts,
            Notice::success("Despesa atualizada", "A despesa foi salva."),
            |dto| {
                let id = dto.id.clone().unwrap_or_default();
                store.update_expense(&id, &dto).map_err(|e| e.to_string())
            },
        );
        if saved {
            open.set(false);
        }
    });

    view! {
        <FormModal
            open=open
            title="Editar despesa"
            busy=Signal::derive(move || form.is_submitting())
            on_save=save
        >
            <ExpenseFields form=form />
        </FormModal>
    }
}

#[component]
pub fn NewExpenseModal(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app();
    let toasts = use_toasts();
    let form = FormController::<ExpenseDto>::new();
    form.bind(open, || None, ExpenseDto::default);

    let save = Callback::new(move |_| {
        let saved = form.submit(
            &toasts,
            Notice::success("Despesa cadastrada", "A nova despesa foi registrada."),
            |dto| store.add_expense(&dto).map_err(|e| e.to_string()),
        );
        if saved {
            open.set(false);
        }
    });

    view! {
        <FormModal
            open=open
            title="Nova despesa"
            busy=Signal::derive(move || form.is_submitting())
            on_save=save
            save_label="Cadastrar"
        >
            <ExpenseFields form=form />
        </FormModal>
    }
}
