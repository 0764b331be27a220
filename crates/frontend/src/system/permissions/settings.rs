//! Settings screen: session permissions and stored app configuration.

use contracts::shared::format::{digits_only, PlateFormat};
use contracts::system::permissions::Permission;
use leptos::prelude::*;
use thaw::*;

use super::context::use_permissions;
use crate::shared::components::ui::{Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::config::{save_config, use_config};
use crate::shared::toast::{use_toasts, Notice};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Shortest toast duration the settings accept
pub const MIN_TOAST_TIMEOUT_MS: u64 = 1_000;

/// Typed toast duration, clamped to the minimum. Text without digits keeps
/// the previous value.
pub fn parse_toast_timeout(input: &str, previous: u64) -> u64 {
    digits_only(input)
        .parse::<u64>()
        .map(|ms| ms.max(MIN_TOAST_TIMEOUT_MS))
        .unwrap_or(previous)
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let perms = use_permissions();
    let toasts = use_toasts();
    let config = RwSignal::new(use_config());

    let plate_options: Vec<(String, String)> = PlateFormat::all()
        .iter()
        .map(|f| (f.as_str().to_string(), f.label().to_string()))
        .collect();

    // Raw text while typing; clamped on save
    let timeout_text = RwSignal::new(config.with_untracked(|c| c.toast_timeout_ms.to_string()));

    let log_levels: Vec<(String, String)> = LOG_LEVELS
        .iter()
        .map(|l| (l.to_string(), l.to_string()))
        .collect();

    let save = move |_| {
        let mut current = config.get_untracked();
        current.permissions = perms.granted.get_untracked();
        current.toast_timeout_ms =
            parse_toast_timeout(&timeout_text.get_untracked(), current.toast_timeout_ms);
        timeout_text.set(current.toast_timeout_ms.to_string());
        config.set(current.clone());
        match save_config(&current) {
            Ok(()) => toasts.notify(Notice::success(
                "Configurações salvas",
                "As alterações valem a partir do próximo acesso.",
            )),
            Err(message) => {
                log::error!("config not saved: {}", message);
                toasts.notify(Notice::error("Erro ao salvar", message));
            }
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Configurações" icon_name="settings">
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    "Salvar"
                </Button>
            </PageHeader>

            <section class="settings__section">
                <h2 class="settings__title">"Permissões da sessão"</h2>
                <div class="settings__permissions">
                    {Permission::ALL
                        .into_iter()
                        .map(|permission| {
                            view! {
                                <label class="settings__toggle">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || perms.has_permission(permission)
                                        on:change=move |ev| {
                                            perms.set(permission, event_target_checked(&ev))
                                        }
                                    />
                                    <span>{permission.label()}</span>
                                    <code class="settings__key">{permission.key()}</code>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="settings__section">
                <h2 class="settings__title">"Aplicação"</h2>
                <Input
                    label="Nome da oficina"
                    value=Signal::derive(move || config.with(|c| c.workshop_name.clone()))
                    on_input=Callback::new(move |v: String| config.update(|c| c.workshop_name = v))
                />
                <Select
                    label="Formato de placa padrão"
                    value=Signal::derive(move || {
                        config.with(|c| c.default_plate_format.as_str().to_string())
                    })
                    on_change=Callback::new(move |v: String| {
                        config.update(|c| c.default_plate_format = PlateFormat::from_str(&v))
                    })
                    options=plate_options
                />
                <Input
                    label="Duração das notificações (ms)"
                    inputmode="numeric"
                    value=timeout_text
                    on_input=Callback::new(move |v: String| timeout_text.set(digits_only(&v)))
                />
                <Select
                    label="Nível de log"
                    value=Signal::derive(move || config.with(|c| c.log_level.clone()))
                    on_change=Callback::new(move |v: String| config.update(|c| c.log_level = v))
                    options=log_levels
                />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_timeout_keeps_previous_when_cleared() {
        assert_eq!(parse_toast_timeout("", 4_000), 4_000);
        assert_eq!(parse_toast_timeout("ms", 4_000), 4_000);
    }

    #[test]
    fn test_toast_timeout_is_clamped() {
        assert_eq!(parse_toast_timeout("0", 4_000), MIN_TOAST_TIMEOUT_MS);
        assert_eq!(parse_toast_timeout("25", 4_000), MIN_TOAST_TIMEOUT_MS);
        assert_eq!(parse_toast_timeout("6 500", 4_000), 6_500);
    }
}
