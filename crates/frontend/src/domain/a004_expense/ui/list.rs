use contracts::domain::a004_expense::ExpenseStatus;
use contracts::shared::format::format_brl;
use leptos::prelude::*;
use thaw::*;

use super::edit_modal::{EditExpenseModal, NewExpenseModal};
use crate::shared::components::ui::ExpenseStatusBadge;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::display_date;
use crate::shared::icons::icon;
use crate::store::use_app;

#[component]
pub fn ExpenseList() -> impl IntoView {
    let store = use_app();
    let edit_open = RwSignal::new(false);
    let new_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);

    let editing = Signal::derive(move || {
        editing_id
            .get()
            .and_then(|id| store.data.with(|w| w.expense(&id).cloned()))
    });

    let open_total = move || {
        store.data.with(|w| {
            w.expenses
                .iter()
                .filter(|e| e.status != ExpenseStatus::Paid)
                .map(|e| e.amount_cents)
                .sum::<i64>()
        })
    };

    view! {
        <div class="page">
            <PageHeader
                title="Despesas"
                icon_name="payments"
                subtitle=Signal::derive(move || Some(format!("Em aberto: {}", format_brl(open_total()))))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| new_open.set(true)>
                    {icon("plus")}
                    "Nova despesa"
                </Button>
            </PageHeader>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Descrição"</th>
                            <th class="table__header-cell">"Categoria"</th>
                            <th class="table__header-cell">"Fornecedor"</th>
                            <th class="table__header-cell">"Vencimento"</th>
                            <th class="table__header-cell table__header-cell--right">"Valor"</th>
                            <th class="table__header-cell">"Situação"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || store.data.with(|w| w.expenses.clone()).into_iter().map(|expense| {
                            let id = expense.to_string_id();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{expense.description}</td>
                                    <td class="table__cell">{expense.category}</td>
                                    <td class="table__cell">{expense.supplier}</td>
                                    <td class="table__cell">{display_date(expense.due_date)}</td>
                                    <td class="table__cell table__cell--right">
                                        {format_brl(expense.amount_cents)}
                                    </td>
                                    <td class="table__cell">
                                        <ExpenseStatusBadge status=expense.status />
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            title="Editar"
                                            on:click=move |_| {
                                                editing_id.set(Some(id.clone()));
                                                edit_open.set(true);
                                            }
                                        >
                                            {icon("edit")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <EditExpenseModal open=edit_open expense=editing />
            <NewExpenseModal open=new_open />
        </div>
    }
}
