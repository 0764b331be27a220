//! TopHeader component - application top bar.
//!
//! Contains:
//! - Workshop name
//! - Mobile menu and sidebar collapse toggles
//! - User label and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Label shown for the demo session user
const SESSION_USER: &str = "Recepção";

/// TopHeader component - main application top bar.
///
/// Logout is delegated to `on_logout`; without it the button does nothing.
#[component]
pub fn TopHeader(#[prop(default = None)] on_logout: Option<Callback<()>>) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_config();
    let workshop_name = config.workshop_name.clone();

    let is_collapsed = move || ctx.nav.with(|n| n.collapsed);

    let logout = move |_| match on_logout {
        Some(cb) => cb.run(()),
        None => log::debug!("logout requested without handler"),
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu-btn"
                    on:click=move |_| ctx.toggle_mobile()
                    title="Menu"
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{workshop_name}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_collapsed()
                    title=move || if is_collapsed() { "Expandir menu" } else { "Recolher menu" }
                >
                    {move || if is_collapsed() {
                        icon("panel-left-open")
                    } else {
                        icon("panel-left-close")
                    }}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>{SESSION_USER}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
