//! Permission keys checked by the navigation shell and the screens.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "dashboard.view")]
    DashboardView,
    #[serde(rename = "orders.view")]
    OrdersView,
    #[serde(rename = "clients.view")]
    ClientsView,
    #[serde(rename = "vehicles.view")]
    VehiclesView,
    #[serde(rename = "workers.view")]
    WorkersView,
    #[serde(rename = "expenses.view")]
    ExpensesView,
    #[serde(rename = "invoices.view")]
    InvoicesView,
    #[serde(rename = "settings.manage")]
    SettingsManage,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::DashboardView,
        Permission::OrdersView,
        Permission::ClientsView,
        Permission::VehiclesView,
        Permission::WorkersView,
        Permission::ExpensesView,
        Permission::InvoicesView,
        Permission::SettingsManage,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Permission::DashboardView => "dashboard.view",
            Permission::OrdersView => "orders.view",
            Permission::ClientsView => "clients.view",
            Permission::VehiclesView => "vehicles.view",
            Permission::WorkersView => "workers.view",
            Permission::ExpensesView => "expenses.view",
            Permission::InvoicesView => "invoices.view",
            Permission::SettingsManage => "settings.manage",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Permission::DashboardView => "Ver painel",
            Permission::OrdersView => "Ver ordens de serviço",
            Permission::ClientsView => "Ver clientes",
            Permission::VehiclesView => "Ver veículos",
            Permission::WorkersView => "Ver funcionários",
            Permission::ExpensesView => "Ver despesas",
            Permission::InvoicesView => "Ver notas fiscais",
            Permission::SettingsManage => "Gerenciar configurações",
        }
    }
}

/// Permissions granted to the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn all() -> Self {
        Self(Permission::ALL.into_iter().collect())
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn grant(&mut self, permission: Permission) {
        self.0.insert(permission);
    }

    pub fn revoke(&mut self, permission: Permission) {
        self.0.remove(&permission);
    }

    pub fn set(&mut self, permission: Permission, granted: bool) {
        if granted {
            self.grant(permission);
        } else {
            self.revoke(permission);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_roundtrip() {
        for p in Permission::ALL {
            assert_eq!(Permission::from_key(p.key()), Some(p));
        }
        assert_eq!(Permission::from_key("root"), None);
    }

    #[test]
    fn test_serde_uses_dotted_keys() {
        let set: PermissionSet = [Permission::ClientsView, Permission::DashboardView]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["dashboard.view","clients.view"]"#);
        let back: PermissionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_set_and_revoke() {
        let mut set = PermissionSet::default();
        set.set(Permission::OrdersView, true);
        assert!(set.contains(Permission::OrdersView));
        set.set(Permission::OrdersView, false);
        assert!(set.is_empty());
    }
}
