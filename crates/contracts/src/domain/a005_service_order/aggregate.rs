use crate::domain::a001_client::ClientId;
use crate::domain::a002_vehicle::VehicleId;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique identifier of a service order
    ServiceOrderId
);

/// Part or service billed on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    /// Mercosul classification code, 8 digits
    pub ncm: String,
    pub codigo_produto: String,
}

impl OrderItem {
    pub fn new(name: &str, quantity: u32, unit_price_cents: i64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit_price_cents,
            ncm: String::new(),
            codigo_produto: String::new(),
        }
    }

    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: ServiceOrderId,
    pub number: u32,
    pub client_id: ClientId,
    pub vehicle_id: VehicleId,
    pub description: String,
    pub items: Vec<OrderItem>,
    pub invoice_issued: bool,
}

impl ServiceOrder {
    pub fn new(number: u32, client_id: ClientId, vehicle_id: VehicleId, description: &str) -> Self {
        Self {
            id: ServiceOrderId::new_v4(),
            number,
            client_id,
            vehicle_id,
            description: description.to_string(),
            items: Vec::new(),
            invoice_issued: false,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn code(&self) -> String {
        format!("OS-{:05}", self.number)
    }

    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(OrderItem::total_cents).sum()
    }
}

/// Workshop registrations printed on every invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalProfile {
    pub inscricao_estadual: String,
    pub inscricao_municipal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_and_code() {
        let mut order = ServiceOrder::new(42, ClientId::new_v4(), VehicleId::new_v4(), "Revisão");
        order.items.push(OrderItem::new("Filtro de óleo", 2, 3550));
        order.items.push(OrderItem::new("Mão de obra", 1, 12000));
        assert_eq!(order.total_cents(), 19100);
        assert_eq!(order.code(), "OS-00042");
    }
}
