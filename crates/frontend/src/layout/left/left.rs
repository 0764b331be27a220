use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar container. On small screens it is an overlay closed by the backdrop.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let collapsed = move || ctx.nav.with(|n| n.collapsed);
    let mobile_open = move || ctx.nav.with(|n| n.mobile_open);

    view! {
        <Show when=mobile_open>
            <div class="app-sidebar__backdrop" on:click=move |_| ctx.close_mobile()></div>
        </Show>
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=collapsed
            class:app-sidebar--mobile-open=mobile_open
        >
            {children()}
        </aside>
    }
}
