use super::status::{derive_status, ExpenseStatus};
use crate::domain::common::AggregateId;
use crate::shared::form::{FormError, FormModel, RequiredField};
use crate::shared::format::{format_brl, parse_brl};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique identifier of an expense entry
    ExpenseId
);

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Aluguel",
    "Energia",
    "Água",
    "Peças",
    "Ferramentas",
    "Salários",
    "Impostos",
    "Outros",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub category: String,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub status: ExpenseStatus,
    pub supplier: String,
    pub notes: String,
}

impl Expense {
    pub fn new(description: &str, category: &str, amount_cents: i64, due_date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new_v4(),
            description: description.to_string(),
            category: category.to_string(),
            amount_cents,
            due_date,
            status: ExpenseStatus::Pending,
            supplier: String::new(),
            notes: String::new(),
        }
    }

    /// Build from a validated "new expense" form
    pub fn from_dto(dto: &ExpenseDto) -> Result<Self, FormError> {
        let (amount_cents, due_date) = dto.parsed()?;
        let mut expense = Self::new(&dto.description, &dto.category, amount_cents, due_date);
        expense.apply(dto, amount_cents, due_date);
        Ok(expense)
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &ExpenseDto) -> Result<(), FormError> {
        let (amount_cents, due_date) = dto.parsed()?;
        self.apply(dto, amount_cents, due_date);
        Ok(())
    }

    fn apply(&mut self, dto: &ExpenseDto, amount_cents: i64, due_date: NaiveDate) {
        self.description = dto.description.trim().to_string();
        self.category = dto.category.clone();
        self.amount_cents = amount_cents;
        self.due_date = due_date;
        self.status = dto.status;
        self.supplier = dto.supplier.trim().to_string();
        self.notes = dto.notes.clone();
    }

    /// Re-evaluate the status against today's date
    pub fn refresh_status(&mut self, today: NaiveDate) {
        self.status = derive_status(self.status, Some(self.due_date), today);
    }
}

/// Form state of the edit and "new expense" modals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDto {
    pub id: Option<String>,
    pub description: String,
    pub category: String,
    /// Masked currency text, e.g. `R$ 1.234,56`
    pub amount: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub due_date: String,
    pub status: ExpenseStatus,
    pub supplier: String,
    pub notes: String,
}

impl ExpenseDto {
    pub fn due_date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.due_date.trim(), DATE_FORMAT).ok()
    }

    /// Change the due date and re-derive the status (unless already paid).
    pub fn set_due_date(&mut self, value: String, today: NaiveDate) {
        self.due_date = value;
        self.status = derive_status(self.status, self.due_date_value(), today);
    }

    fn parsed(&self) -> Result<(i64, NaiveDate), FormError> {
        let amount = parse_brl(&self.amount)
            .ok_or_else(|| FormError::invalid("Valor", "valor inválido"))?;
        if amount <= 0 {
            return Err(FormError::invalid("Valor", "o valor deve ser maior que zero"));
        }
        let due = self
            .due_date_value()
            .ok_or_else(|| FormError::invalid("Vencimento", "data inválida"))?;
        Ok((amount, due))
    }
}

impl From<&Expense> for ExpenseDto {
    fn from(e: &Expense) -> Self {
        Self {
            id: Some(e.to_string_id()),
            description: e.description.clone(),
            category: e.category.clone(),
            amount: format_brl(e.amount_cents),
            due_date: e.due_date.format(DATE_FORMAT).to_string(),
            status: e.status,
            supplier: e.supplier.clone(),
            notes: e.notes.clone(),
        }
    }
}

impl FormModel for ExpenseDto {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![
            RequiredField::new("Descrição", &self.description),
            RequiredField::new("Categoria", &self.category),
            RequiredField::new("Valor", &self.amount),
            RequiredField::new("Vencimento", &self.due_date),
        ]
    }

    fn check_values(&self) -> Result<(), FormError> {
        self.parsed().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Expense {
        Expense::new("Conta de luz", "Energia", 45990, d(2026, 5, 10))
    }

    #[test]
    fn test_dto_formats_amount_and_date() {
        let dto = ExpenseDto::from(&sample());
        assert_eq!(dto.amount, "R$ 459,90");
        assert_eq!(dto.due_date, "2026-05-10");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_set_due_date_derives_status() {
        let today = d(2026, 5, 15);
        let mut dto = ExpenseDto::from(&sample());
        dto.set_due_date("2026-05-01".into(), today);
        assert_eq!(dto.status, ExpenseStatus::Overdue);
        dto.set_due_date("2026-06-01".into(), today);
        assert_eq!(dto.status, ExpenseStatus::Pending);
    }

    #[test]
    fn test_set_due_date_never_reverts_paid() {
        let today = d(2026, 5, 15);
        let mut dto = ExpenseDto::from(&sample());
        dto.status = ExpenseStatus::Paid;
        dto.set_due_date("2026-01-01".into(), today);
        assert_eq!(dto.status, ExpenseStatus::Paid);
    }

    #[test]
    fn test_required_set() {
        assert_eq!(
            ExpenseDto::default().missing_fields(),
            vec!["Descrição", "Categoria", "Valor", "Vencimento"]
        );
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut dto = ExpenseDto::from(&sample());
        dto.amount = "R$ 0,00".into();
        assert!(matches!(
            dto.validate(),
            Err(FormError::InvalidValue { field: "Valor", .. })
        ));
    }

    #[test]
    fn test_from_dto_and_update() {
        let dto = ExpenseDto {
            description: "Jogo de chaves".into(),
            category: "Ferramentas".into(),
            amount: "R$ 1.250,00".into(),
            due_date: "2026-07-01".into(),
            ..Default::default()
        };
        let mut expense = Expense::from_dto(&dto).unwrap();
        assert_eq!(expense.amount_cents, 125000);

        let mut edit = ExpenseDto::from(&expense);
        edit.status = ExpenseStatus::Paid;
        expense.update(&edit).unwrap();
        assert_eq!(expense.status, ExpenseStatus::Paid);
    }

    #[test]
    fn test_refresh_status() {
        let mut expense = sample();
        expense.refresh_status(d(2026, 6, 1));
        assert_eq!(expense.status, ExpenseStatus::Overdue);
    }
}
