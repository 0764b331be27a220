use contracts::shared::format::format_brl;
use leptos::prelude::*;

use super::summary::WorkshopSummary;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{CardTone, PageHeader, StatCard};
use crate::shared::config::use_config;
use crate::store::use_app;

#[component]
pub fn WorkshopSummaryDashboard() -> impl IntoView {
    let store = use_app();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_config();

    let summary = Memo::new(move |_| store.data.with(|w| WorkshopSummary::from(w)));

    view! {
        <div class="page">
            <PageHeader title="Painel" subtitle=config.workshop_name icon_name="layout-dashboard" />

            <div class="dashboard-grid">
                <StatCard
                    label="Clientes"
                    icon_name="customers"
                    value=Signal::derive(move || summary.get().clients.to_string())
                    subtitle=Signal::derive(move || Some(format!("{} veículo(s)", summary.get().vehicles)))
                />
                <StatCard
                    label="OS aguardando nota"
                    icon_name="orders"
                    value=Signal::derive(move || summary.get().orders_to_invoice.to_string())
                    tone=Signal::derive(move || {
                        if summary.get().orders_to_invoice > 0 { CardTone::Warning } else { CardTone::Good }
                    })
                />
                <StatCard
                    label="Faturado"
                    icon_name="invoices"
                    value=Signal::derive(move || format_brl(summary.get().invoiced_cents))
                />
                <StatCard
                    label="Despesas em aberto"
                    icon_name="payments"
                    value=Signal::derive(move || format_brl(summary.get().open_expense_cents))
                    tone=Signal::derive(move || {
                        if summary.get().overdue_expenses > 0 { CardTone::Bad } else { CardTone::Neutral }
                    })
                    subtitle=Signal::derive(move || {
                        let overdue = summary.get().overdue_expenses;
                        (overdue > 0).then(|| format!("{} vencida(s)", overdue))
                    })
                />
                <StatCard
                    label="Equipe ativa"
                    icon_name="users"
                    value=Signal::derive(move || summary.get().active_workers.to_string())
                />
            </div>

            <div class="dashboard-links">
                <button class="button button--secondary" on:click=move |_| ctx.open_tab("orders")>
                    "Ver ordens de serviço"
                </button>
                <button class="button button--secondary" on:click=move |_| ctx.open_tab("expenses")>
                    "Ver despesas"
                </button>
            </div>
        </div>
    }
}
