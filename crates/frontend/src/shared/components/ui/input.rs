use leptos::prelude::*;

/// Labelled text field. The value is bound as a DOM property so masked
/// values written back by `on_input` replace what the user typed.
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "date", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Marks the label with an asterisk
    #[prop(optional)]
    required: bool,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Helper or warning text under the field
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Input mode hint for virtual keyboards ("numeric", "tel"...)
    #[prop(optional, into)]
    inputmode: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_mode = move || inputmode.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_t
                inputmode=input_mode
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || hint.get().map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}
