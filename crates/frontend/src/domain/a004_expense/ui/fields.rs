use contracts::domain::a004_expense::{ExpenseDto, ExpenseStatus, EXPENSE_CATEGORIES};
use contracts::shared::format::currency_input;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::today;
use crate::shared::form_controller::FormController;

/// Field set shared by the edit and "new expense" modals
#[component]
pub fn ExpenseFields(form: FormController<ExpenseDto>) -> impl IntoView {
    let categories: Vec<(String, String)> = EXPENSE_CATEGORIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect();
    let statuses: Vec<(String, String)> = ExpenseStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    view! {
        <Input
            label="Descrição"
            required=true
            value=Signal::derive(move || form.field(|f| f.description.clone()))
            on_input=Callback::new(move |v: String| form.edit(|f| f.description = v))
        />
        <div class="form__row">
            <Select
                label="Categoria"
                required=true
                placeholder="Selecione"
                value=Signal::derive(move || form.field(|f| f.category.clone()))
                on_change=Callback::new(move |v: String| form.edit(|f| f.category = v))
                options=categories
            />
            <Input
                label="Valor"
                required=true
                inputmode="numeric"
                placeholder="R$ 0,00"
                value=Signal::derive(move || form.field(|f| f.amount.clone()))
                on_input=Callback::new(move |v: String| form.edit(|f| f.amount = currency_input(&v)))
            />
        </div>
        <div class="form__row">
            <Input
                label="Vencimento"
                required=true
                input_type="date"
                value=Signal::derive(move || form.field(|f| f.due_date.clone()))
                on_input=Callback::new(move |v: String| form.edit(|f| f.set_due_date(v, today())))
            />
            <Select
                label="Situação"
                value=Signal::derive(move || form.field(|f| f.status.as_str().to_string()))
                on_change=Callback::new(move |v: String| {
                    form.edit(|f| f.status = ExpenseStatus::from_str(&v))
                })
                options=statuses
            />
        </div>
        <Input
            label="Fornecedor"
            value=Signal::derive(move || form.field(|f| f.supplier.clone()))
            on_input=Callback::new(move |v: String| form.edit(|f| f.supplier = v))
        />
        <Textarea
            label="Observações"
            value=Signal::derive(move || form.field(|f| f.notes.clone()))
            on_input=Callback::new(move |v: String| form.edit(|f| f.notes = v))
        />
    }
}
