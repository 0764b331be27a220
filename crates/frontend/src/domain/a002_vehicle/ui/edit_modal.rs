use contracts::domain::a002_vehicle::{Vehicle, VehicleDto};
use contracts::shared::format::{digits_only, PlateFormat};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::components::FormModal;
use crate::shared::config::use_config;
use crate::shared::form_controller::FormController;
use crate::shared::toast::{use_toasts, Notice};
use crate::store::use_app;

#[component]
pub fn EditVehicleModal(
    open: RwSignal<bool>,
    #[prop(into)]
    vehicle: Signal<Option<Vehicle>>,
) -> impl IntoView {
    let store = use_app();
    let toasts = use_toasts();
    let default_format = use_config().default_plate_format;
    let form = FormController::<VehicleDto>::new();
    form.bind(
        open,
        move || vehicle.with(|v| v.as_ref().map(Vehicle::to_string_id)),
        move || {
            let mut dto = vehicle.with(|v| v.as_ref().map(VehicleDto::from).unwrap_or_default());
            // No plate yet: start from the configured mask
            if dto.plate.is_empty() {
                dto.plate_format = default_format;
            }
            dto
        },
    );

    let owners = Signal::derive(move || {
        store.data.with(|w| {
            w.clients
                .iter()
                .map(|c| (c.to_string_id(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let plate_formats: Vec<(String, String)> = PlateFormat::all()
        .iter()
        .map(|f| (f.as_str().to_string(), f.label().to_string()))
        .collect();

    let save = Callback::new(move |_| {
        let saved = form.submit(
            &toasts,
            Notice::success("Veículo atualizado", "Os dados do veículo foram salvos."),
            |dto| {
                let id = dto.id.clone().unwrap_or_default();
                store.update_vehicle(&id, &dto).map_err(|e| e.to_string())
            },
        );
        if saved {
            open.set(false);
        }
    });

    view! {
        <FormModal
            open=open
            title="Editar veículo"
            busy=Signal::derive(move || form.is_submitting())
            on_save=save
        >
            <Select
                label="Proprietário"
                required=true
                placeholder="Selecione o cliente"
                value=Signal::derive(move || form.field(|f| f.client_id.clone()))
                on_change=Callback::new(move |v: String| form.edit(|f| f.client_id = v))
                options=owners
            />
            <div class="form__row">
                <Input
                    label="Marca"
                    required=true
                    value=Signal::derive(move || form.field(|f| f.brand.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.brand = v))
                />
                <Input
                    label="Modelo"
                    required=true
                    value=Signal::derive(move || form.field(|f| f.model.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.model = v))
                />
            </div>
            <div class="form__row">
                <Select
                    label="Padrão da placa"
                    value=Signal::derive(move || form.field(|f| f.plate_format.as_str().to_string()))
                    on_change=Callback::new(move |v: String| {
                        form.edit(|f| f.set_plate_format(PlateFormat::from_str(&v)))
                    })
                    options=plate_formats
                />
                <Input
                    label="Placa"
                    required=true
                    placeholder=Signal::derive(move || {
                        Some(form.field(|f| f.plate_format.placeholder().to_string()))
                    })
                    value=Signal::derive(move || form.field(|f| f.plate.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.set_plate(&v)))
                />
            </div>
            <div class="form__row">
                <Input
                    label="Ano"
                    inputmode="numeric"
                    value=Signal::derive(move || form.field(|f| f.year.clone()))
                    on_input=Callback::new(move |v: String| {
                        form.edit(|f| f.year = digits_only(&v).chars().take(4).collect())
                    })
                />
                <Input
                    label="Cor"
                    value=Signal::derive(move || form.field(|f| f.color.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.color = v))
                />
                <Input
                    label="Quilometragem"
                    inputmode="numeric"
                    value=Signal::derive(move || form.field(|f| f.mileage.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.mileage = digits_only(&v)))
                />
            </div>
        </FormModal>
    }
}
