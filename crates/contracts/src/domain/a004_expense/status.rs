use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl ExpenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "pending",
            ExpenseStatus::Paid => "paid",
            ExpenseStatus::Overdue => "overdue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "Pendente",
            ExpenseStatus::Paid => "Pago",
            ExpenseStatus::Overdue => "Vencido",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "paid" => ExpenseStatus::Paid,
            "overdue" => ExpenseStatus::Overdue,
            _ => ExpenseStatus::Pending,
        }
    }

    pub fn all() -> [ExpenseStatus; 3] {
        [
            ExpenseStatus::Pending,
            ExpenseStatus::Paid,
            ExpenseStatus::Overdue,
        ]
    }
}

/// Status implied by the due date. `Paid` is sticky and never reverts.
pub fn derive_status(
    current: ExpenseStatus,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> ExpenseStatus {
    if current == ExpenseStatus::Paid {
        return ExpenseStatus::Paid;
    }
    match due_date {
        Some(due) if due < today => ExpenseStatus::Overdue,
        Some(_) => ExpenseStatus::Pending,
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_past_due_becomes_overdue() {
        let today = d(2026, 3, 10);
        assert_eq!(
            derive_status(ExpenseStatus::Pending, Some(d(2026, 3, 9)), today),
            ExpenseStatus::Overdue
        );
    }

    #[test]
    fn test_due_today_or_later_is_pending() {
        let today = d(2026, 3, 10);
        assert_eq!(
            derive_status(ExpenseStatus::Overdue, Some(today), today),
            ExpenseStatus::Pending
        );
        assert_eq!(
            derive_status(ExpenseStatus::Overdue, Some(d(2026, 4, 1)), today),
            ExpenseStatus::Pending
        );
    }

    #[test]
    fn test_paid_is_sticky() {
        let today = d(2026, 3, 10);
        for due in [Some(d(2020, 1, 1)), Some(today), Some(d(2030, 1, 1)), None] {
            assert_eq!(
                derive_status(ExpenseStatus::Paid, due, today),
                ExpenseStatus::Paid
            );
        }
    }

    #[test]
    fn test_missing_due_date_keeps_status() {
        let today = d(2026, 3, 10);
        assert_eq!(
            derive_status(ExpenseStatus::Overdue, None, today),
            ExpenseStatus::Overdue
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExpenseStatus::Overdue).unwrap(),
            "\"overdue\""
        );
        for s in ExpenseStatus::all() {
            assert_eq!(ExpenseStatus::from_str(s.as_str()), s);
        }
    }
}
