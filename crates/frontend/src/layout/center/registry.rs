//! Screen registry: the single mapping from navigation id to view.

use contracts::shared::navigation::find_item;
use leptos::prelude::*;

use crate::dashboards::WorkshopSummaryDashboard;
use crate::domain::a001_client::ui::ClientList;
use crate::domain::a002_vehicle::ui::VehicleList;
use crate::domain::a003_worker::ui::WorkerList;
use crate::domain::a004_expense::ui::ExpenseList;
use crate::domain::a005_service_order::ui::ServiceOrderList;
use crate::system::permissions::SettingsPage;
use crate::usecases::u501_invoice_validation::InvoiceHistory;

/// Render the screen for a navigation id, or a placeholder when the id is
/// unknown or not `allowed` for the session.
pub fn render_screen(key: &str, allowed: bool) -> AnyView {
    let Some(item) = find_item(key) else {
        log::warn!("unknown screen: {}", key);
        return view! { <div class="placeholder">"Tela não encontrada"</div> }.into_any();
    };
    if !allowed {
        return view! {
            <div class="placeholder">"Você não tem permissão para acessar esta tela."</div>
        }
        .into_any();
    }

    match item.id {
        "dashboard" => view! { <WorkshopSummaryDashboard /> }.into_any(),
        "orders" => view! { <ServiceOrderList /> }.into_any(),
        "clients" => view! { <ClientList /> }.into_any(),
        "vehicles" => view! { <VehicleList /> }.into_any(),
        "workers" => view! { <WorkerList /> }.into_any(),
        "expenses" => view! { <ExpenseList /> }.into_any(),
        "invoices" => view! { <InvoiceHistory /> }.into_any(),
        "settings" => view! { <SettingsPage /> }.into_any(),
        other => {
            log::warn!("screen without view: {}", other);
            view! { <div class="placeholder">"Em construção"</div> }.into_any()
        }
    }
}
