//! User notifications on top of thaw's toaster.

use leptos::prelude::*;
use std::time::Duration;
use thaw::*;

use crate::shared::config::use_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeVariant::Success)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeVariant::Error)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeVariant::Info)
    }

    fn new(title: impl Into<String>, description: impl Into<String>, variant: NoticeVariant) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
        }
    }
}

/// Handle to the toaster. Must be created inside `ToasterProvider`.
#[derive(Clone)]
pub struct Toasts {
    toaster: ToasterInjection,
    timeout: Duration,
}

impl Toasts {
    pub fn notify(&self, notice: Notice) {
        let Notice {
            title,
            description,
            variant,
        } = notice;
        let intent = match variant {
            NoticeVariant::Success => ToastIntent::Success,
            NoticeVariant::Error => ToastIntent::Error,
            NoticeVariant::Info => ToastIntent::Info,
        };
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{title}</ToastTitle>
                        <ToastBody>{description}</ToastBody>
                    </Toast>
                }
            },
            ToastOptions::default()
                .with_intent(intent)
                .with_timeout(self.timeout),
        );
    }
}

pub fn use_toasts() -> Toasts {
    let config = use_config();
    Toasts {
        toaster: ToasterInjection::expect_context(),
        timeout: Duration::from_millis(config.toast_timeout_ms),
    }
}
