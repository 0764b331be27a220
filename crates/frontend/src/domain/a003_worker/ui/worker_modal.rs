use contracts::domain::a003_worker::{Worker, WorkerDto, WORKER_ROLES};
use contracts::shared::format::{format_cpf, format_phone};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::components::FormModal;
use crate::shared::form_controller::FormController;
use crate::shared::toast::{use_toasts, Notice};
use crate::store::use_app;

/// Create/edit modal for workers. `worker = None` opens a blank "new" form.
#[component]
pub fn WorkerModal(
    open: RwSignal<bool>,
    #[prop(into)]
    worker: Signal<Option<Worker>>,
) -> impl IntoView {
    let store = use_app();
    let toasts = use_toasts();
    let form = FormController::<WorkerDto>::new();
    form.bind(
        open,
        move || worker.with(|w| w.as_ref().map(Worker::to_string_id)),
        move || worker.with(|w| w.as_ref().map(WorkerDto::from).unwrap_or_default()),
    );

    let is_edit_mode = move || worker.with(|w| w.is_some());
    let title = Signal::derive(move || {
        if is_edit_mode() {
            "Editar funcionário".to_string()
        } else {
            "Novo funcionário".to_string()
        }
    });

    let roles: Vec<(String, String)> = WORKER_ROLES
        .iter()
        .map(|r| (r.to_string(), r.to_string()))
        .collect();

    let save = Callback::new(move |_| {
        let success = if is_edit_mode() {
            Notice::success("Funcionário atualizado", "Os dados do funcionário foram salvos.")
        } else {
            Notice::success("Funcionário cadastrado", "O novo funcionário já está na equipe.")
        };
        let saved = form.submit(&toasts, success, |dto| {
            let result = match dto.id.as_deref() {
                Some(id) => store.update_worker(id, &dto),
                None => store.add_worker(&dto),
            };
            result.map_err(|e| e.to_string())
        });
        if saved {
            open.set(false);
        }
    });

    view! {
        <FormModal
            open=open
            title=title
            busy=Signal::derive(move || form.is_submitting())
            on_save=save
        >
            <Input
                label="Nome"
                required=true
                value=Signal::derive(move || form.field(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.edit(|f| f.name = v))
            />
            <div class="form__row">
                <Select
                    label="Função"
                    required=true
                    placeholder="Selecione"
                    value=Signal::derive(move || form.field(|f| f.role.clone()))
                    on_change=Callback::new(move |v: String| form.edit(|f| f.role = v))
                    options=roles
                />
                <Input
                    label="Comissão (%)"
                    inputmode="decimal"
                    value=Signal::derive(move || form.field(|f| f.commission_percent.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.commission_percent = v))
                />
            </div>
            <div class="form__row">
                <Input
                    label="CPF"
                    inputmode="numeric"
                    placeholder="000.000.000-00"
                    value=Signal::derive(move || form.field(|f| f.cpf.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.cpf = format_cpf(&v)))
                />
                <Input
                    label="Telefone"
                    input_type="tel"
                    value=Signal::derive(move || form.field(|f| f.phone.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.phone = format_phone(&v)))
                />
            </div>
            <label class="form__check">
                <input
                    type="checkbox"
                    prop:checked=move || form.field(|f| f.active)
                    on:change=move |ev| {
                        let active = event_target_checked(&ev);
                        form.edit(|f| f.active = active)
                    }
                />
                <span>"Ativo"</span>
            </label>
        </FormModal>
    }
}
