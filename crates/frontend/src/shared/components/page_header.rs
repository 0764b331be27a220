use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row of a screen, with actions (e.g. "Novo") on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Icon name from the icon() helper
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {icon_name.map(icon)}
                    <span>{title}</span>
                </h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </div>
    }
}
