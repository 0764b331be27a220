//! Static navigation menu of the workshop shell.

use crate::system::permissions::Permission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub required_permission: Permission,
}

/// Declared order is the render order.
pub const NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        id: "dashboard",
        label: "Painel",
        icon: "layout-dashboard",
        required_permission: Permission::DashboardView,
    },
    NavigationItem {
        id: "orders",
        label: "Ordens de Serviço",
        icon: "orders",
        required_permission: Permission::OrdersView,
    },
    NavigationItem {
        id: "clients",
        label: "Clientes",
        icon: "customers",
        required_permission: Permission::ClientsView,
    },
    NavigationItem {
        id: "vehicles",
        label: "Veículos",
        icon: "car",
        required_permission: Permission::VehiclesView,
    },
    NavigationItem {
        id: "workers",
        label: "Funcionários",
        icon: "users",
        required_permission: Permission::WorkersView,
    },
    NavigationItem {
        id: "expenses",
        label: "Despesas",
        icon: "payments",
        required_permission: Permission::ExpensesView,
    },
    NavigationItem {
        id: "invoices",
        label: "Notas Fiscais",
        icon: "invoices",
        required_permission: Permission::InvoicesView,
    },
    NavigationItem {
        id: "settings",
        label: "Configurações",
        icon: "settings",
        required_permission: Permission::SettingsManage,
    },
];

/// Items the current user may see, in declared order.
pub fn visible_items(has_permission: impl Fn(Permission) -> bool) -> Vec<&'static NavigationItem> {
    NAVIGATION_ITEMS
        .iter()
        .filter(|item| has_permission(item.required_permission))
        .collect()
}

pub fn find_item(id: &str) -> Option<&'static NavigationItem> {
    NAVIGATION_ITEMS.iter().find(|item| item.id == id)
}

/// Sidebar collapse and mobile overlay state. Pure UI, no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub collapsed: bool,
    pub mobile_open: bool,
}

impl NavState {
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// An item was clicked: the mobile overlay closes, collapse is untouched.
    pub fn select<'a>(&mut self, id: &'a str) -> &'a str {
        self.close_mobile();
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::permissions::PermissionSet;

    fn ids(items: &[&NavigationItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_all_permissions_show_every_item_in_order() {
        let all = PermissionSet::all();
        let visible = visible_items(|p| all.contains(p));
        assert_eq!(
            ids(&visible),
            NAVIGATION_ITEMS.iter().map(|i| i.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_no_permissions_show_nothing() {
        assert!(visible_items(|_| false).is_empty());
    }

    #[test]
    fn test_every_subset_filters_exactly_and_keeps_order() {
        // walk all 2^8 permission subsets
        let perms = Permission::ALL;
        for mask in 0u32..(1 << perms.len()) {
            let set: PermissionSet = perms
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, p)| *p)
                .collect();

            let visible = visible_items(|p| set.contains(p));
            let expected: Vec<&str> = NAVIGATION_ITEMS
                .iter()
                .filter(|i| set.contains(i.required_permission))
                .map(|i| i.id)
                .collect();
            assert_eq!(ids(&visible), expected);
        }
    }

    #[test]
    fn test_select_closes_mobile_overlay_only() {
        let mut state = NavState {
            collapsed: true,
            mobile_open: true,
        };
        assert_eq!(state.select("clients"), "clients");
        assert!(!state.mobile_open);
        assert!(state.collapsed);
    }

    #[test]
    fn test_toggle_collapsed() {
        let mut state = NavState::default();
        state.toggle_collapsed();
        assert!(state.collapsed);
        state.toggle_collapsed();
        assert!(!state.collapsed);
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item("expenses").map(|i| i.label), Some("Despesas"));
        assert!(find_item("nope").is_none());
    }
}
