//! Demo data loaded at start-up.

use super::workshop::Workshop;
use chrono::{Duration, NaiveDate};
use contracts::domain::a001_client::Client;
use contracts::domain::a002_vehicle::Vehicle;
use contracts::domain::a003_worker::Worker;
use contracts::domain::a004_expense::{Expense, ExpenseStatus};
use contracts::domain::a005_service_order::{FiscalProfile, OrderItem, ServiceOrder};

pub fn demo_workshop(today: NaiveDate) -> Workshop {
    let mut ana = Client::new("Ana Lima", "52998224725", "(11) 98765-4321");
    ana.email = "ana.lima@email.com".to_string();
    ana.address = "Rua das Flores, 120".to_string();
    let joao = Client::new("João Pereira", "11144477735", "(21) 3456-7890");

    let mut onix = Vehicle::new(ana.id, "Chevrolet", "Onix", "BRA2E19");
    onix.year = Some(2021);
    onix.color = "Prata".to_string();
    onix.mileage = Some(42_000);
    let mut gol = Vehicle::new(joao.id, "Volkswagen", "Gol", "KLM-4821");
    gol.year = Some(2012);

    let mut carlos = Worker::new("Carlos Souza", "Mecânico");
    carlos.commission_percent = 10.0;
    let bia = Worker::new("Beatriz Alves", "Atendente");

    let mut rent = Expense::new("Aluguel do galpão", "Aluguel", 450_000, today - Duration::days(5));
    rent.status = ExpenseStatus::Paid;
    let mut parts = Expense::new("Lote de pastilhas", "Peças", 128_990, today - Duration::days(2));
    parts.supplier = "AutoPeças Central".to_string();
    let power = Expense::new("Conta de energia", "Energia", 38_750, today + Duration::days(10));

    let mut oil_change = ServiceOrder::new(1, ana.id, onix.id, "Troca de óleo e filtro");
    oil_change.items.push(OrderItem::new("Filtro de óleo", 1, 4_500));
    let mut oil = OrderItem::new("Óleo 5W30", 4, 3_990);
    oil.ncm = "27101932".to_string();
    oil_change.items.push(oil);

    let mut brakes = ServiceOrder::new(2, joao.id, gol.id, "Revisão de freios");
    let mut pads = OrderItem::new("Pastilha de freio", 1, 18_900);
    pads.ncm = "68138110".to_string();
    pads.codigo_produto = "PF-220".to_string();
    brakes.items.push(pads);

    let mut workshop = Workshop {
        clients: vec![ana, joao],
        vehicles: vec![onix, gol],
        workers: vec![carlos, bia],
        expenses: vec![rent, parts, power],
        orders: vec![oil_change, brakes],
        fiscal: FiscalProfile::default(),
        invoices: Vec::new(),
    };
    workshop.refresh_expense_statuses(today);
    workshop
}
