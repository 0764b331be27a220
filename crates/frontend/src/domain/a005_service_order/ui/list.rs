use contracts::domain::common::AggregateId;
use contracts::shared::format::format_brl;
use contracts::usecases::u501_invoice_validation::InvoiceCorrectionForm;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::Badge;
use crate::shared::components::PageHeader;
use crate::shared::toast::{use_toasts, Notice};
use crate::store::use_app;
use crate::usecases::u501_invoice_validation::{confirm_invoice_with, InvoiceValidationModal};

#[derive(Clone, Debug)]
pub struct OrderRow {
    pub id: String,
    pub code: String,
    pub client: String,
    pub vehicle: String,
    pub description: String,
    pub total: String,
    pub invoice_issued: bool,
}

#[component]
pub fn ServiceOrderList() -> impl IntoView {
    let store = use_app();
    let toasts = use_toasts();
    let modal_open = RwSignal::new(false);
    let invoice_order = RwSignal::new(None::<String>);
    let invoice_errors = RwSignal::new(Vec::<String>::new());
    // Orders whose direct emission is still in flight
    let emitting = RwSignal::new(Vec::<String>::new());

    let rows = move || {
        store.data.with(|w| {
            w.orders
                .iter()
                .map(|o| OrderRow {
                    id: o.to_string_id(),
                    code: o.code(),
                    client: w.client_name(&o.client_id.as_string()),
                    vehicle: w
                        .vehicle(&o.vehicle_id.as_string())
                        .map(|v| v.title())
                        .unwrap_or_default(),
                    description: o.description.clone(),
                    total: format_brl(o.total_cents()),
                    invoice_issued: o.invoice_issued,
                })
                .collect::<Vec<_>>()
        })
    };

    let on_confirm =
        confirm_invoice_with(move |order_id, form| store.confirm_invoice_data(order_id, form));

    // Clean orders are emitted straight away; anything else goes through the modal
    let emit = move |order_id: String| {
        if emitting.with_untracked(|ids| ids.contains(&order_id)) {
            return;
        }
        let errors = match store.emission_errors(&order_id) {
            Ok(errors) => errors,
            Err(e) => {
                toasts.notify(Notice::error("Erro", e.to_string()));
                return;
            }
        };
        if errors.is_empty() {
            let toasts = toasts.clone();
            emitting.update(|ids| ids.push(order_id.clone()));
            spawn_local(async move {
                let result = store
                    .confirm_invoice_data(order_id.clone(), InvoiceCorrectionForm::default())
                    .await;
                emitting.update(|ids| ids.retain(|id| *id != order_id));
                match result {
                    Ok(()) => toasts.notify(Notice::success("Nota emitida", "A nota fiscal foi emitida.")),
                    Err(message) => toasts.notify(Notice::error("Erro ao emitir", message)),
                }
            });
        } else {
            log::info!("order {}: {} emission issue(s)", order_id, errors.len());
            toasts.notify(Notice::info(
                "Pendências fiscais",
                format!("{} pendência(s) a resolver antes da emissão.", errors.len()),
            ));
            invoice_order.set(Some(order_id));
            invoice_errors.set(errors);
            modal_open.set(true);
        }
    };
    let emit = StoredValue::new_local(emit);

    view! {
        <div class="page">
            <PageHeader title="Ordens de Serviço" icon_name="orders" />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"OS"</th>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"Veículo"</th>
                            <th class="table__header-cell">"Serviço"</th>
                            <th class="table__header-cell table__header-cell--right">"Total"</th>
                            <th class="table__header-cell">"Nota fiscal"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id = row.id.clone();
                            let busy_id = row.id.clone();
                            let is_emitting = move || emitting.with(|ids| ids.contains(&busy_id));
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--mono">{row.code}</td>
                                    <td class="table__cell">{row.client}</td>
                                    <td class="table__cell">{row.vehicle}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell table__cell--right">{row.total}</td>
                                    <td class="table__cell">
                                        {if row.invoice_issued {
                                            view! { <Badge variant="success">"Emitida"</Badge> }.into_any()
                                        } else {
                                            view! {
                                                <button
                                                    class="button button--primary button--small"
                                                    disabled=is_emitting
                                                    on:click=move |_| emit.with_value(|emit| emit(id.clone()))
                                                >
                                                    "Emitir NF"
                                                </button>
                                            }
                                            .into_any()
                                        }}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <InvoiceValidationModal
                open=modal_open
                order_id=invoice_order
                errors=invoice_errors
                on_confirm=on_confirm
            />
        </div>
    }
}
