use contracts::domain::a004_expense::ExpenseStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! { <span class=variant_class>{children()}</span> }
}

/// Colored badge for an expense status
#[component]
pub fn ExpenseStatusBadge(status: ExpenseStatus) -> impl IntoView {
    let variant = match status {
        ExpenseStatus::Paid => "success",
        ExpenseStatus::Pending => "warning",
        ExpenseStatus::Overdue => "error",
    };

    view! { <Badge variant=variant>{status.label()}</Badge> }
}
