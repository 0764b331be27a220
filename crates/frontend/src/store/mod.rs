//! Application store shared by every screen and modal.

pub mod seed;
pub mod workshop;

pub use workshop::{InvoiceRecord, Workshop};

use contracts::domain::a001_client::ClientDto;
use contracts::domain::a002_vehicle::VehicleDto;
use contracts::domain::a003_worker::WorkerDto;
use contracts::domain::a004_expense::ExpenseDto;
use contracts::domain::common::StoreError;
use contracts::usecases::u501_invoice_validation::InvoiceCorrectionForm;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::date_utils::today;

/// Simulated round-trip of the fiscal confirmation call
const CONFIRM_DELAY_MS: u32 = 600;

#[derive(Clone, Copy)]
pub struct AppStore {
    pub data: RwSignal<Workshop>,
}

impl AppStore {
    pub fn new(workshop: Workshop) -> Self {
        Self {
            data: RwSignal::new(workshop),
        }
    }

    fn mutate(
        &self,
        operation: &str,
        apply: impl FnOnce(&mut Workshop) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let result = self
            .data
            .try_update(apply)
            .unwrap_or_else(|| Err(StoreError::Rejected("Dados indisponíveis".to_string())));
        match &result {
            Ok(()) => log::info!("{}: ok", operation),
            Err(e) => log::warn!("{}: {}", operation, e),
        }
        result
    }

    pub fn update_client(&self, id: &str, dto: &ClientDto) -> Result<(), StoreError> {
        self.mutate("update_client", |w| w.update_client(id, dto))
    }

    pub fn update_vehicle(&self, id: &str, dto: &VehicleDto) -> Result<(), StoreError> {
        self.mutate("update_vehicle", |w| w.update_vehicle(id, dto))
    }

    pub fn update_worker(&self, id: &str, dto: &WorkerDto) -> Result<(), StoreError> {
        self.mutate("update_worker", |w| w.update_worker(id, dto))
    }

    pub fn add_worker(&self, dto: &WorkerDto) -> Result<(), StoreError> {
        self.mutate("add_worker", |w| w.add_worker(dto))
    }

    pub fn update_expense(&self, id: &str, dto: &ExpenseDto) -> Result<(), StoreError> {
        self.mutate("update_expense", |w| w.update_expense(id, dto))
    }

    pub fn add_expense(&self, dto: &ExpenseDto) -> Result<(), StoreError> {
        self.mutate("add_expense", |w| w.add_expense(dto))
    }

    pub fn emission_errors(&self, order_id: &str) -> Result<Vec<String>, StoreError> {
        self.data.with_untracked(|w| w.emission_errors(order_id))
    }

    /// Persist fiscal corrections for an order and emit its invoice
    pub async fn confirm_invoice_data(
        self,
        order_id: String,
        form: InvoiceCorrectionForm,
    ) -> Result<(), String> {
        TimeoutFuture::new(CONFIRM_DELAY_MS).await;
        let issued_on = today();
        self.mutate("confirm_invoice_data", |w| {
            w.confirm_invoice(&order_id, &form, issued_on)
        })
        .map_err(|e| e.to_string())
    }
}

pub fn use_app() -> AppStore {
    use_context::<AppStore>().expect("AppStore context not found")
}
