pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Center       |
/// |  (Left)   |  (active screen) |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L>(
    left: L,
    /// Forwarded to the header logout button
    #[prop(optional)]
    on_logout: Option<Callback<()>>,
) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader on_logout=on_logout />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <center::Center />
            </div>
        </div>
    }
}
