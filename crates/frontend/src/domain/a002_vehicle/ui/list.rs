use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use super::edit_modal::EditVehicleModal;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::store::use_app;

#[derive(Clone, Debug)]
pub struct VehicleRow {
    pub id: String,
    pub plate: String,
    pub vehicle: String,
    pub year: String,
    pub owner: String,
    pub mileage: String,
}

#[component]
pub fn VehicleList() -> impl IntoView {
    let store = use_app();
    let modal_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);

    let rows = move || {
        store.data.with(|w| {
            w.vehicles
                .iter()
                .map(|v| VehicleRow {
                    id: v.to_string_id(),
                    plate: v.plate.clone(),
                    vehicle: format!("{} {}", v.brand, v.model),
                    year: v.year.map(|y| y.to_string()).unwrap_or_default(),
                    owner: w.client_name(&v.client_id.as_string()),
                    mileage: v.mileage.map(|m| format!("{} km", m)).unwrap_or_default(),
                })
                .collect::<Vec<_>>()
        })
    };

    let editing = Signal::derive(move || {
        editing_id
            .get()
            .and_then(|id| store.data.with(|w| w.vehicle(&id).cloned()))
    });

    view! {
        <div class="page">
            <PageHeader title="Veículos" icon_name="car" />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Placa"</th>
                            <th class="table__header-cell">"Veículo"</th>
                            <th class="table__header-cell">"Ano"</th>
                            <th class="table__header-cell">"Proprietário"</th>
                            <th class="table__header-cell">"Km"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id = row.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--mono">{row.plate}</td>
                                    <td class="table__cell">{row.vehicle}</td>
                                    <td class="table__cell">{row.year}</td>
                                    <td class="table__cell">{row.owner}</td>
                                    <td class="table__cell">{row.mileage}</td>
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

            <EditVehicleModal open=modal_open vehicle=editing />
        </div>
    }
}
