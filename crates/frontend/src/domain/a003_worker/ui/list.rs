use leptos::prelude::*;
use thaw::*;

use super::worker_modal::WorkerModal;
use crate::shared::components::ui::Badge;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::store::use_app;

#[component]
pub fn WorkerList() -> impl IntoView {
    let store = use_app();
    let modal_open = RwSignal::new(false);
    // None while the "new worker" form is open
    let editing_id = RwSignal::new(None::<String>);

    let editing = Signal::derive(move || {
        editing_id
            .get()
            .and_then(|id| store.data.with(|w| w.worker(&id).cloned()))
    });

    let open_new = move |_| {
        editing_id.set(None);
        modal_open.set(true);
    };

    view! {
        <div class="page">
            <PageHeader title="Funcionários" icon_name="users">
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("plus")}
                    "Novo funcionário"
                </Button>
            </PageHeader>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell">"Função"</th>
                            <th class="table__header-cell">"Telefone"</th>
                            <th class="table__header-cell">"Comissão"</th>
                            <th class="table__header-cell">"Situação"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || store.data.with(|w| w.workers.clone()).into_iter().map(|worker| {
                            let id = worker.to_string_id();
                            let commission = format!("{:.1}%", worker.commission_percent).replace('.', ",");
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{worker.name}</td>
                                    <td class="table__cell">{worker.role}</td>
                                    <td class="table__cell">{worker.phone}</td>
                                    <td class="table__cell">{commission}</td>
                                    <td class="table__cell">
                                        {if worker.active {
                                            view! { <Badge variant="success">"Ativo"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge>"Inativo"</Badge> }.into_any()
                                        }}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            title="Editar"
                                            on:click=move |_| {
                                                editing_id.set(Some(id.clone()));
                                                modal_open.set(true);
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

            <WorkerModal open=modal_open worker=editing />
        </div>
    }
}
