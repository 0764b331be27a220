use leptos::prelude::*;
use thaw::*;

/// Dialog frame shared by the entity create/edit modals.
///
/// "Cancelar" only flips `open`; the bound `FormController` resets itself
/// when it sees the modal close.
#[component]
pub fn FormModal(
    open: RwSignal<bool>,
    #[prop(into)]
    title: Signal<String>,
    /// Disables both actions while the mutation runs
    #[prop(optional, into)]
    busy: Signal<bool>,
    on_save: Callback<()>,
    #[prop(optional, into)]
    save_label: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let save_text = move || save_label.get().unwrap_or_else(|| "Salvar".to_string());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <div class="form form--modal">{children()}</div>
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
                            on_click=move |_| on_save.run(())
                        >
                            {save_text}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
