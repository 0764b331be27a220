use contracts::domain::a001_client::Client;
use leptos::prelude::*;

use super::edit_modal::EditClientModal;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::store::use_app;

#[derive(Clone, Debug)]
pub struct ClientRow {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub vehicles: usize,
}

#[component]
pub fn ClientList() -> impl IntoView {
    let store = use_app();
    let modal_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);

    let rows = move || {
        store.data.with(|w| {
            w.clients
                .iter()
                .map(|c: &Client| ClientRow {
                    id: c.to_string_id(),
                    name: c.name.clone(),
                    cpf: c.cpf.clone(),
                    phone: c.phone.clone(),
                    email: c.email.clone(),
                    vehicles: w.vehicles.iter().filter(|v| v.client_id == c.id).count(),
                })
                .collect::<Vec<_>>()
        })
    };

    let editing = Signal::derive(move || {
        editing_id
            .get()
            .and_then(|id| store.data.with(|w| w.client(&id).cloned()))
    });

    let handle_edit = move |id: String| {
        editing_id.set(Some(id));
        modal_open.set(true);
    };

    view! {
        <div class="page">
            <PageHeader title="Clientes" icon_name="customers" />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell">"CPF"</th>
                            <th class="table__header-cell">"Telefone"</th>
                            <th class="table__header-cell">"E-mail"</th>
                            <th class="table__header-cell">"Veículos"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id = row.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.cpf}</td>
                                    <td class="table__cell">{row.phone}</td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">{row.vehicles}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            title="Editar"
                                            on:click=move |_| handle_edit(id.clone())
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

            <EditClientModal open=modal_open client=editing />
        </div>
    }
}
