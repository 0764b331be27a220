use contracts::domain::a001_client::{Client, ClientDto};
use contracts::shared::format::{digits_only, format_cpf, format_phone, is_valid_cpf, CPF_DIGITS};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::FormModal;
use crate::shared::form_controller::FormController;
use crate::shared::toast::{use_toasts, Notice};
use crate::store::use_app;

#[component]
pub fn EditClientModal(
    open: RwSignal<bool>,
    /// Client being edited; the form re-seeds when its id changes
    #[prop(into)]
    client: Signal<Option<Client>>,
) -> impl IntoView {
    let store = use_app();
    let toasts = use_toasts();
    let form = FormController::<ClientDto>::new();
    form.bind(
        open,
        move || client.with(|c| c.as_ref().map(Client::to_string_id)),
        move || client.with(|c| c.as_ref().map(ClientDto::from).unwrap_or_default()),
    );

    let cpf_hint = Signal::derive(move || {
        let cpf = form.field(|f| f.cpf.clone());
        (digits_only(&cpf).len() == CPF_DIGITS && !is_valid_cpf(&cpf))
            .then(|| "Dígitos verificadores não conferem".to_string())
    });

    let save = Callback::new(move |_| {
        let saved = form.submit(
            &toasts,
            Notice::success("Cliente atualizado", "Os dados do cliente foram salvos."),
            |dto| {
                let id = dto.id.clone().unwrap_or_default();
                store.update_client(&id, &dto).map_err(|e| e.to_string())
            },
        );
        if saved {
            open.set(false);
        }
    });

    view! {
        <FormModal
            open=open
            title="Editar cliente"
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
                <Input
                    label="CPF"
                    required=true
                    inputmode="numeric"
                    placeholder="000.000.000-00"
                    value=Signal::derive(move || form.field(|f| f.cpf.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.cpf = format_cpf(&v)))
                    hint=cpf_hint
                />
                <Input
                    label="Telefone"
                    required=true
                    input_type="tel"
                    placeholder="(00) 00000-0000"
                    value=Signal::derive(move || form.field(|f| f.phone.clone()))
                    on_input=Callback::new(move |v: String| form.edit(|f| f.phone = format_phone(&v)))
                />
            </div>
            <Input
                label="E-mail"
                input_type="email"
                value=Signal::derive(move || form.field(|f| f.email.clone()))
                on_input=Callback::new(move |v: String| form.edit(|f| f.email = v))
            />
            <Input
                label="Endereço"
                value=Signal::derive(move || form.field(|f| f.address.clone()))
                on_input=Callback::new(move |v: String| form.edit(|f| f.address = v))
            />
            <Textarea
                label="Observações"
                value=Signal::derive(move || form.field(|f| f.notes.clone()))
                on_input=Callback::new(move |v: String| form.edit(|f| f.notes = v))
            />
        </FormModal>
    }
}
