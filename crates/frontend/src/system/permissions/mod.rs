pub mod context;
pub mod settings;

pub use context::{use_permissions, PermissionsContext, PermissionsProvider};
pub use settings::SettingsPage;
