//! In-memory workshop data and its mutations.
//!
//! Kept free of signals so every mutation can be unit-tested natively;
//! `AppStore` wraps it in an `RwSignal`.

use chrono::NaiveDate;
use contracts::domain::a001_client::{Client, ClientDto};
use contracts::domain::a002_vehicle::{Vehicle, VehicleDto};
use contracts::domain::a003_worker::{Worker, WorkerDto};
use contracts::domain::a004_expense::{Expense, ExpenseDto};
use contracts::domain::a005_service_order::{FiscalProfile, ServiceOrder};
use contracts::domain::common::{AggregateId, StoreError};
use contracts::usecases::u501_invoice_validation::{
    apply_corrections, emission_errors, InvoiceCorrectionForm,
};

/// One confirmed set of fiscal corrections followed by an emitted invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRecord {
    pub order_id: String,
    pub order_code: String,
    pub client_name: String,
    pub total_cents: i64,
    pub issued_on: NaiveDate,
    /// Number of fields filled through the correction modal
    pub corrected_fields: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workshop {
    pub clients: Vec<Client>,
    pub vehicles: Vec<Vehicle>,
    pub workers: Vec<Worker>,
    pub expenses: Vec<Expense>,
    pub orders: Vec<ServiceOrder>,
    pub fiscal: FiscalProfile,
    pub invoices: Vec<InvoiceRecord>,
}

impl Workshop {
    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.to_string_id() == id)
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.to_string_id() == id)
    }

    pub fn worker(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.to_string_id() == id)
    }

    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.to_string_id() == id)
    }

    pub fn order(&self, id: &str) -> Option<&ServiceOrder> {
        self.orders.iter().find(|o| o.to_string_id() == id)
    }

    /// Owner name for list screens; blank ids render as "-"
    pub fn client_name(&self, id: &str) -> String {
        self.client(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn update_client(&mut self, id: &str, dto: &ClientDto) -> Result<(), StoreError> {
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.to_string_id() == id)
            .ok_or_else(|| StoreError::not_found("Cliente", id))?;
        client.update(dto);
        Ok(())
    }

    pub fn update_vehicle(&mut self, id: &str, dto: &VehicleDto) -> Result<(), StoreError> {
        if self.client(&dto.client_id).is_none() {
            return Err(StoreError::not_found("Cliente", dto.client_id.as_str()));
        }
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.to_string_id() == id)
            .ok_or_else(|| StoreError::not_found("Veículo", id))?;
        vehicle.update(dto).map_err(StoreError::InvalidId)
    }

    pub fn update_worker(&mut self, id: &str, dto: &WorkerDto) -> Result<(), StoreError> {
        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.to_string_id() == id)
            .ok_or_else(|| StoreError::not_found("Funcionário", id))?;
        worker.update(dto);
        Ok(())
    }

    pub fn add_worker(&mut self, dto: &WorkerDto) -> Result<(), StoreError> {
        self.workers.push(Worker::from_dto(dto));
        Ok(())
    }

    pub fn update_expense(&mut self, id: &str, dto: &ExpenseDto) -> Result<(), StoreError> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.to_string_id() == id)
            .ok_or_else(|| StoreError::not_found("Despesa", id))?;
        expense
            .update(dto)
            .map_err(|e| StoreError::Rejected(e.to_string()))
    }

    pub fn add_expense(&mut self, dto: &ExpenseDto) -> Result<(), StoreError> {
        let expense = Expense::from_dto(dto).map_err(|e| StoreError::Rejected(e.to_string()))?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Re-derive every expense status against `today` (pending -> overdue)
    pub fn refresh_expense_statuses(&mut self, today: NaiveDate) {
        for expense in &mut self.expenses {
            expense.refresh_status(today);
        }
    }

    /// Messages the invoice emitter would report for this order right now
    pub fn emission_errors(&self, order_id: &str) -> Result<Vec<String>, StoreError> {
        let order = self
            .order(order_id)
            .ok_or_else(|| StoreError::not_found("Ordem de serviço", order_id))?;
        Ok(emission_errors(&self.fiscal, order))
    }

    /// Apply the fiscal corrections and emit the invoice.
    ///
    /// Nothing is written unless the corrected data passes the emitter check.
    pub fn confirm_invoice(
        &mut self,
        order_id: &str,
        form: &InvoiceCorrectionForm,
        today: NaiveDate,
    ) -> Result<(), StoreError> {
        form.validate()
            .map_err(|e| StoreError::Rejected(e.to_string()))?;
        let index = self
            .orders
            .iter()
            .position(|o| o.to_string_id() == order_id)
            .ok_or_else(|| StoreError::not_found("Ordem de serviço", order_id))?;
        if self.orders[index].invoice_issued {
            return Err(StoreError::Rejected(format!(
                "A nota da OS {} já foi emitida",
                self.orders[index].code()
            )));
        }

        let mut fiscal = self.fiscal.clone();
        let mut order = self.orders[index].clone();
        apply_corrections(&mut fiscal, &mut order, form);

        let remaining = emission_errors(&fiscal, &order);
        if !remaining.is_empty() {
            return Err(StoreError::Rejected(format!(
                "Ainda há pendências fiscais: {}",
                remaining.join("; ")
            )));
        }

        order.invoice_issued = true;
        self.invoices.push(InvoiceRecord {
            order_id: order.to_string_id(),
            order_code: order.code(),
            client_name: self.client_name(&order.client_id.as_string()),
            total_cents: order.total_cents(),
            issued_on: today,
            corrected_fields: corrected_fields(form),
        });
        self.fiscal = fiscal;
        self.orders[index] = order;
        Ok(())
    }
}

fn corrected_fields(form: &InvoiceCorrectionForm) -> usize {
    let registrations = [&form.inscricao_estadual, &form.inscricao_municipal]
        .into_iter()
        .filter(|f| f.is_some())
        .count();
    let products: usize = form
        .products
        .iter()
        .map(|p| p.ncm.is_some() as usize + p.codigo_produto.is_some() as usize)
        .sum();
    registrations + products
}
