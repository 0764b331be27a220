use contracts::shared::format::format_brl;
use leptos::prelude::*;

use crate::shared::components::PageHeader;
use crate::shared::date_utils::display_date;
use crate::store::use_app;

/// Invoices emitted in this session, newest first
#[component]
pub fn InvoiceHistory() -> impl IntoView {
    let store = use_app();

    let records = move || {
        let mut records = store.data.with(|w| w.invoices.clone());
        records.reverse();
        records
    };

    view! {
        <div class="page">
            <PageHeader title="Notas Fiscais" icon_name="invoices" />

            <Show
                when=move || store.data.with(|w| !w.invoices.is_empty())
                fallback=|| view! {
                    <div class="empty-state">"Nenhuma nota emitida até o momento."</div>
                }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"OS"</th>
                                <th class="table__header-cell">"Cliente"</th>
                                <th class="table__header-cell">"Emitida em"</th>
                                <th class="table__header-cell table__header-cell--right">"Total"</th>
                                <th class="table__header-cell">"Correções"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || records().into_iter().map(|r| view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--mono">{r.order_code}</td>
                                    <td class="table__cell">{r.client_name}</td>
                                    <td class="table__cell">{display_date(r.issued_on)}</td>
                                    <td class="table__cell table__cell--right">{format_brl(r.total_cents)}</td>
                                    <td class="table__cell">{r.corrected_fields}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
