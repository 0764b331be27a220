//! Sidebar navigation filtered by the session permissions

use contracts::shared::navigation::visible_items;
use contracts::system::permissions::Permission;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::permissions::use_permissions;

/// Menu entries the predicate allows, in declared order.
/// Labels are hidden while `collapsed`.
#[component]
pub fn Navigation(
    #[prop(into)]
    active_tab: Signal<String>,
    has_permission: Callback<Permission, bool>,
    #[prop(into)]
    collapsed: Signal<bool>,
    on_tab_change: Callback<String>,
) -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {move || {
                visible_items(|p| has_permission.run(p))
                    .into_iter()
                    .map(|item| {
                        let id = item.id;
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || active_tab.with(|a| a == id)
                                title=item.label
                                on:click=move |_| on_tab_change.run(id.to_string())
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <Show when=move || !collapsed.get()>
                                        <span>{item.label}</span>
                                    </Show>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let perms = use_permissions();

    view! {
        <Navigation
            active_tab=ctx.active
            has_permission=Callback::new(move |p| perms.has_permission(p))
            collapsed=Signal::derive(move || ctx.nav.with(|n| n.collapsed))
            on_tab_change=Callback::new(move |id: String| ctx.open_tab(&id))
        />
    }
}
