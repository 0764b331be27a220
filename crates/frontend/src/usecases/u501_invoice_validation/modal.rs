use contracts::shared::format::digits_only;
use contracts::usecases::u501_invoice_validation::{InvoiceCorrectionForm, InvoiceIssue};
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::toast::{use_toasts, Notice};

const SAVE_FAILED: &str = "Não foi possível salvar os dados fiscais.";

/// Persists the corrections for an order; resolves once the invoice went out
pub type ConfirmInvoice = Rc<
    dyn Fn(String, InvoiceCorrectionForm) -> Pin<Box<dyn Future<Output = Result<(), String>>>>,
>;

/// Wrap an async confirmation function into a `ConfirmInvoice`
pub fn confirm_invoice_with<F, Fut>(confirm: F) -> ConfirmInvoice
where
    F: Fn(String, InvoiceCorrectionForm) -> Fut + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    Rc::new(
        move |order_id: String,
              form: InvoiceCorrectionForm|
              -> Pin<Box<dyn Future<Output = Result<(), String>>>> {
            Box::pin(confirm(order_id, form))
        },
    )
}

/// Which inputs the form needs. Changes only when the error list does, so
/// typing does not rebuild the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FormLayout {
    state_registration: bool,
    municipal_registration: bool,
    /// (name, needs ncm, needs product code)
    products: Vec<(String, bool, bool)>,
    unresolved: Vec<String>,
    /// At least one input to fill
    fillable: bool,
}

impl From<&InvoiceCorrectionForm> for FormLayout {
    fn from(form: &InvoiceCorrectionForm) -> Self {
        Self {
            state_registration: form.inscricao_estadual.is_some(),
            municipal_registration: form.inscricao_municipal.is_some(),
            products: form
                .products
                .iter()
                .map(|p| (p.name.clone(), p.ncm.is_some(), p.codigo_produto.is_some()))
                .collect(),
            unresolved: form.unresolved.clone(),
            fillable: form.has_fillable_fields(),
        }
    }
}

/// Toast for a settled confirmation, and whether the modal closes.
/// A rejection keeps the modal open so the user can fix the data.
fn confirmation_outcome(result: Result<(), String>) -> (Notice, bool) {
    match result {
        Ok(()) => (
            Notice::success("Dados fiscais salvos", "A nota fiscal foi emitida."),
            true,
        ),
        Err(message) => {
            log::error!("invoice confirmation failed: {}", message);
            let text = if message.trim().is_empty() {
                SAVE_FAILED.to_string()
            } else {
                message
            };
            (Notice::error("Erro ao salvar", text), false)
        }
    }
}

#[component]
pub fn InvoiceValidationModal(
    open: RwSignal<bool>,
    #[prop(into)]
    order_id: Signal<Option<String>>,
    /// Messages reported by the invoice emitter
    #[prop(into)]
    errors: Signal<Vec<String>>,
    on_confirm: ConfirmInvoice,
) -> impl IntoView {
    let toasts = use_toasts();
    let on_confirm = StoredValue::new_local(on_confirm);
    let form = RwSignal::new(InvoiceCorrectionForm::default());
    let submitting = RwSignal::new(false);

    // Rebuild from the error list on every open and whenever the list changes
    Effect::new(move |_| {
        let messages = errors.get();
        if open.get() {
            let issues = InvoiceIssue::parse_all(&messages);
            log::debug!("invoice modal: {} issue(s)", issues.len());
            form.set(InvoiceCorrectionForm::from_issues(&issues));
        } else {
            form.set(InvoiceCorrectionForm::default());
        }
    });

    let layout = Memo::new(move |_| form.with(|f| FormLayout::from(f)));
    let busy = Signal::derive(move || submitting.get());

    let confirm = move |_| {
        if submitting.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        if let Err(err) = snapshot.validate() {
            log::debug!("invoice form rejected: {}", err);
            toasts.notify(Notice::error("Dados fiscais incompletos", err.to_string()));
            return;
        }
        let Some(id) = order_id.get_untracked() else {
            return;
        };

        submitting.set(true);
        let pending = on_confirm.with_value(|confirm| confirm(id, snapshot));
        let toasts = toasts.clone();
        spawn_local(async move {
            let result = pending.await;
            submitting.set(false);
            let (notice, close) = confirmation_outcome(result);
            toasts.notify(notice);
            if close {
                open.set(false);
            }
        });
    };

    let registration_input = move |label: &'static str, municipal: bool| {
        view! {
            <Input
                label=label
                required=true
                disabled=busy
                value=Signal::derive(move || {
                    form.with(|f| {
                        let field = if municipal { &f.inscricao_municipal } else { &f.inscricao_estadual };
                        field.clone().unwrap_or_default()
                    })
                })
                on_input=Callback::new(move |v: String| {
                    form.update(|f| {
                        let field = if municipal { &mut f.inscricao_municipal } else { &mut f.inscricao_estadual };
                        if let Some(value) = field.as_mut() {
                            *value = v;
                        }
                    })
                })
            />
        }
    };

    let product_section = move |index: usize, name: String, needs_ncm: bool, needs_code: bool| {
        view! {
            <div class="invoice-fix__product">
                <div class="invoice-fix__product-name">{name}</div>
                <div class="form__row">
                    {needs_ncm.then(|| view! {
                        <Input
                            label="NCM"
                            required=true
                            inputmode="numeric"
                            placeholder="00000000"
                            disabled=busy
                            value=Signal::derive(move || {
                                form.with(|f| {
                                    f.products
                                        .get(index)
                                        .and_then(|p| p.ncm.clone())
                                        .unwrap_or_default()
                                })
                            })
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| {
                                    if let Some(ncm) = f.products.get_mut(index).and_then(|p| p.ncm.as_mut()) {
                                        *ncm = digits_only(&v).chars().take(8).collect();
                                    }
                                })
                            })
                        />
                    })}
                    {needs_code.then(|| view! {
                        <Input
                            label="Código do produto"
                            required=true
                            disabled=busy
                            value=Signal::derive(move || {
                                form.with(|f| {
                                    f.products
                                        .get(index)
                                        .and_then(|p| p.codigo_produto.clone())
                                        .unwrap_or_default()
                                })
                            })
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| {
                                    if let Some(code) = f.products.get_mut(index).and_then(|p| p.codigo_produto.as_mut()) {
                                        *code = v;
                                    }
                                })
                            })
                        />
                    })}
                </div>
            </div>
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Pendências para emissão da nota"</DialogTitle>
                    <DialogContent>
                        <div class="form form--modal invoice-fix">
                            {move || {
                                let l = layout.get();
                                view! {
                                    {(l.state_registration || l.municipal_registration).then(|| view! {
                                        <h3 class="invoice-fix__section">"Dados da empresa"</h3>
                                    })}
                                    {l.state_registration.then(|| registration_input("Inscrição Estadual", false))}
                                    {l.municipal_registration.then(|| registration_input("Inscrição Municipal", true))}
                                    {(!l.products.is_empty()).then(|| view! {
                                        <h3 class="invoice-fix__section">"Produtos"</h3>
                                    })}
                                    {l.products
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, (name, ncm, code))| product_section(i, name, ncm, code))
                                        .collect_view()}
                                    {(!l.unresolved.is_empty()).then(|| view! {
                                        <div class="warning-box">
                                            <span class="warning-box__icon">{icon("alert")}</span>
                                            <ul class="warning-box__list">
                                                {l.unresolved
                                                    .into_iter()
                                                    .map(|m| view! { <li>{m}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    })}
                                }
                            }}
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=busy
                            on_click=move |_| open.set(false)
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            loading=busy
                            on_click=confirm
                        >
                            {move || if layout.with(|l| l.fillable) {
                                "Salvar e emitir"
                            } else {
                                "Tentar emitir novamente"
                            }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::NoticeVariant;

    #[test]
    fn test_confirmed_invoice_closes_modal() {
        let (notice, close) = confirmation_outcome(Ok(()));
        assert!(close);
        assert_eq!(notice.variant, NoticeVariant::Success);
    }

    #[test]
    fn test_rejection_keeps_modal_open_with_message() {
        let (notice, close) = confirmation_outcome(Err("NCM inválido".to_string()));
        assert!(!close);
        assert_eq!(notice, Notice::error("Erro ao salvar", "NCM inválido"));
    }

    #[test]
    fn test_blank_rejection_uses_fallback_message() {
        let (notice, close) = confirmation_outcome(Err("  ".to_string()));
        assert!(!close);
        assert_eq!(notice.variant, NoticeVariant::Error);
        assert_eq!(notice.description, SAVE_FAILED);
    }

    #[test]
    fn test_layout_marks_unresolved_only_forms() {
        let only_unresolved = InvoiceCorrectionForm::from_messages(&["Falha na SEFAZ"]);
        assert!(!FormLayout::from(&only_unresolved).fillable);

        let with_product = InvoiceCorrectionForm::from_messages(&[r#"Produto "Filtro" sem NCM"#]);
        let layout = FormLayout::from(&with_product);
        assert!(layout.fillable);
        assert_eq!(layout.products, vec![("Filtro".to_string(), true, false)]);
    }
}
