//! Transient status banner pinned to the top-right corner.

use crate::shared::dom::Notifier;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::any::Any;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// How long a banner stays attached unless closed earlier.
pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Bootstrap contextual class of the banner.
    pub fn alert_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Error => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub lifetime_ms: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            lifetime_ms: NOTIFICATION_LIFETIME_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn class_name(&self) -> String {
        format!(
            "alert {} alert-dismissible fade show",
            self.severity.alert_class()
        )
    }
}

/// Keeps one banner mounted until it is detached.
///
/// The close control and the lifetime timer both end in `detach`; only the
/// first call drops the mount.
#[derive(Default)]
pub struct BannerSlot {
    mount: RefCell<Option<Box<dyn Any>>>,
}

impl BannerSlot {
    pub fn attach(&self, mount: Box<dyn Any>) {
        *self.mount.borrow_mut() = Some(mount);
    }

    pub fn is_attached(&self) -> bool {
        self.mount.borrow().is_some()
    }

    /// Drops the mount. Returns `false` when it was already detached.
    pub fn detach(&self) -> bool {
        // take first so the drop runs without the cell borrowed
        let mount = self.mount.borrow_mut().take();
        mount.is_some()
    }
}

/// Detaches the banner once `elapsed` resolves.
pub async fn detach_after(slot: Rc<BannerSlot>, elapsed: impl Future<Output = ()>) -> bool {
    elapsed.await;
    slot.detach()
}

#[component]
fn StatusBanner(notification: Notification, on_close: Rc<dyn Fn(())>) -> impl IntoView {
    let class = notification.class_name();
    let message = notification.message;

    view! {
        <div
            class=class
            role="alert"
            style="position: fixed; top: 20px; right: 20px; z-index: 9999;"
        >
            {message}
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| on_close(())
            ></button>
        </div>
    }
}

/// Mounts one `StatusBanner` per notification into `<body>`.
#[derive(Clone, Copy, Default)]
pub struct BannerNotifier;

impl Notifier for BannerNotifier {
    fn notify(&self, notification: Notification) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            log::warn!("No <body> to show notification: {}", notification.message);
            return;
        };

        let lifetime = notification.lifetime_ms;
        let slot = Rc::new(BannerSlot::default());
        let on_close: Rc<dyn Fn(())> = Rc::new({
            let slot = Rc::clone(&slot);
            move |_| {
                // unmount on the next tick, not inside the click dispatch
                let slot = Rc::clone(&slot);
                spawn_local(async move {
                    detach_after(slot, TimeoutFuture::new(0)).await;
                });
            }
        });

        let handle = leptos::mount::mount_to(body, move || {
            view! { <StatusBanner notification=notification on_close=on_close /> }
        });
        slot.attach(Box::new(handle));

        spawn_local(async move {
            if !detach_after(slot, TimeoutFuture::new(lifetime)).await {
                log::debug!("Notification was closed before its lifetime ended");
            }
        });
    }
}
