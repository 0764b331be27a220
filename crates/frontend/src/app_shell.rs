//! Application Shell - root components of the application
//!
//! Contains:
//! - `AppShell` - session gate (signed-out screen or MainLayout)
//! - `MainLayout` - main layout (Shell + Sidebar + active screen)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Main application layout with Sidebar and the active screen.
///
/// Initializes router integration to keep the screen in the URL (?active=...).
#[component]
fn MainLayout(on_logout: Callback<()>) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            on_logout=on_logout
        />
    }
}

/// Application shell - session gate component.
///
/// The demo session starts signed in; logout swaps the layout for a
/// signed-out screen until the user enters again.
#[component]
pub fn AppShell() -> impl IntoView {
    let signed_in = RwSignal::new(true);

    let on_logout = Callback::new(move |_| {
        log::info!("session closed");
        signed_in.set(false);
    });

    view! {
        <Show
            when=move || signed_in.get()
            fallback=move || view! {
                <div class="signed-out">
                    <h2>"Sessão encerrada"</h2>
                    <p>"Você saiu do sistema."</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| signed_in.set(true)
                    >
                        "Entrar novamente"
                    </Button>
                </div>
            }
        >
            <MainLayout on_logout=on_logout />
        </Show>
    }
}
