use contracts::domain::a004_expense::ExpenseStatus;

use crate::store::Workshop;

/// Counters shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkshopSummary {
    pub clients: usize,
    pub vehicles: usize,
    pub active_workers: usize,
    /// Orders still waiting for their invoice
    pub orders_to_invoice: usize,
    pub invoiced_cents: i64,
    pub overdue_expenses: usize,
    /// Sum of pending and overdue expenses
    pub open_expense_cents: i64,
}

impl From<&Workshop> for WorkshopSummary {
    fn from(w: &Workshop) -> Self {
        let open_expenses = w.expenses.iter().filter(|e| e.status != ExpenseStatus::Paid);
        Self {
            clients: w.clients.len(),
            vehicles: w.vehicles.len(),
            active_workers: w.workers.iter().filter(|x| x.active).count(),
            orders_to_invoice: w.orders.iter().filter(|o| !o.invoice_issued).count(),
            invoiced_cents: w.invoices.iter().map(|i| i.total_cents).sum(),
            overdue_expenses: w
                .expenses
                .iter()
                .filter(|e| e.status == ExpenseStatus::Overdue)
                .count(),
            open_expense_cents: open_expenses.map(|e| e.amount_cents).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::demo_workshop;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_of_demo_data() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let summary = WorkshopSummary::from(&demo_workshop(today));
        assert_eq!(summary.clients, 2);
        assert_eq!(summary.vehicles, 2);
        assert_eq!(summary.active_workers, 2);
        assert_eq!(summary.orders_to_invoice, 2);
        assert_eq!(summary.invoiced_cents, 0);
        // "Lote de pastilhas" is past due, the rent is paid
        assert_eq!(summary.overdue_expenses, 1);
        assert_eq!(summary.open_expense_cents, 128_990 + 38_750);
    }

    #[test]
    fn test_summary_of_empty_workshop() {
        assert_eq!(WorkshopSummary::from(&Workshop::default()), WorkshopSummary::default());
    }
}
