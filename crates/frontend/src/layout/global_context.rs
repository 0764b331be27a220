use contracts::shared::navigation::{find_item, NavState};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

pub const DEFAULT_SCREEN: &str = "dashboard";

/// Shell state: active screen plus sidebar collapse and mobile overlay
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub nav: RwSignal<NavState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_SCREEN.to_string()),
            nav: RwSignal::new(NavState::default()),
        }
    }

    /// Keep the active screen in the `?active=` query parameter
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("active") {
            if find_item(key).is_some() {
                self.active.set(key.clone());
            } else {
                log::warn!("unknown screen in url: {}", key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    /// Navigation entry point used by the sidebar and in-page links
    pub fn open_tab(&self, key: &str) {
        log::debug!("open_tab: key='{}'", key);
        let mut selected = String::new();
        self.nav.update(|nav| selected = nav.select(key).to_string());
        self.active.set(selected);
    }

    pub fn toggle_collapsed(&self) {
        self.nav.update(NavState::toggle_collapsed);
    }

    pub fn toggle_mobile(&self) {
        self.nav.update(NavState::toggle_mobile);
    }

    pub fn close_mobile(&self) {
        self.nav.update(NavState::close_mobile);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
