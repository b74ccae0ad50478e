//! Page bootstrap: builds the dashboard for the current document and keeps
//! it reachable from the exported hooks.

use crate::dashboard::config::{self, PageOverrides};
use crate::dashboard::{initializer, Dashboard};
use crate::shared::api::GlooApi;
use crate::shared::dom::web::WebPage;
use crate::shared::error::ClientError;
use crate::shared::modal::BootstrapModal;
use crate::shared::toast::BannerNotifier;
use contracts::EntityKind;
use js_sys::Reflect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

thread_local! {
    static ACTIVE: RefCell<Option<Rc<Dashboard>>> = const { RefCell::new(None) };
}

/// Runs `f` with the mounted dashboard. Returns `false` if none is mounted.
pub fn with_active(f: impl FnOnce(&Dashboard)) -> bool {
    let dashboard = ACTIVE.with(|slot| slot.borrow().clone());
    match dashboard {
        Some(d) => {
            f(&d);
            true
        }
        None => {
            log::warn!("Dashboard hook called before the page was initialized");
            false
        }
    }
}

/// Starts the bulk delete if the mounted dashboard is for `entity`.
pub fn delete_for(entity: EntityKind) {
    with_active(|d| {
        if d.config.entity == entity {
            d.spawn_delete();
        } else {
            log::warn!(
                "Delete for {} requested on the {} dashboard",
                entity,
                d.config.entity
            );
        }
    });
}

fn document() -> Result<Document, ClientError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ClientError::MissingElement("document".into()))
}

/// `data-log-level` from `<body>`, or from `<html>` while the body is not
/// parsed yet.
pub fn page_log_level() -> log::Level {
    let Ok(document) = document() else {
        return log::Level::Debug;
    };
    let overrides = document
        .body()
        .map(|b| read_overrides(&b))
        .or_else(|| document.document_element().map(|el| read_overrides(&el)))
        .unwrap_or_default();
    overrides.level()
}

/// Mounts now, or on `DOMContentLoaded` while the document is still loading.
pub fn boot() -> Result<(), ClientError> {
    let document = document()?;
    expose_hooks()?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount_or_skip(&document) {
                log::error!("Dashboard initialization failed: {}", e);
            }
        });
        target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        mount_or_skip(&document)
    }
}

fn mount_or_skip(document: &Document) -> Result<(), ClientError> {
    match mount(document) {
        Err(ClientError::Config(reason)) => {
            log::info!("No dashboard mounted: {}", reason);
            Ok(())
        }
        other => other,
    }
}

fn read_overrides(body: &Element) -> PageOverrides {
    PageOverrides {
        entity: body.get_attribute("data-dashboard"),
        delete_url: body.get_attribute("data-delete-url"),
        strategy: body.get_attribute("data-delete-strategy"),
        confirm: body.get_attribute("data-confirm-delete"),
        log_level: body.get_attribute("data-log-level"),
    }
}

fn detect_entity(document: &Document) -> Option<EntityKind> {
    EntityKind::ALL
        .into_iter()
        .find(|kind| document.get_element_by_id(&kind.table_body_id()).is_some())
}

fn legacy_delete_url(entity: EntityKind) -> Option<String> {
    let global = entity.legacy_delete_url_global();
    let url = Reflect::get(&js_sys::global(), &JsValue::from_str(&global))
        .ok()?
        .as_string()?;
    log::debug!("Using window.{} = {}", global, url);
    Some(url)
}

fn mount(document: &Document) -> Result<(), ClientError> {
    let overrides = document
        .body()
        .map(|b| read_overrides(&b))
        .unwrap_or_default();
    let config = config::resolve(&overrides, detect_entity(document), legacy_delete_url)?;

    let modal = BootstrapModal::new(
        document.clone(),
        config.modal_id.clone(),
        config.modal_body_id.clone(),
    );
    let dashboard = Rc::new(Dashboard::new(
        config,
        Rc::new(WebPage::new()?),
        Rc::new(modal),
        Rc::new(GlooApi),
        Rc::new(BannerNotifier),
    ));

    initializer::install(&dashboard, document)?;
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(dashboard));
    Ok(())
}

/// Template hooks without arguments, published on `window` under their
/// export names.
const ACTION_HOOKS: [(&str, fn()); 4] = [
    ("deleteSelected", crate::delete_selected),
    ("deleteSelectedDisputes", crate::delete_selected_disputes),
    ("deleteSelectedOrders", crate::delete_selected_orders),
    ("deleteSelectedReturns", crate::delete_selected_returns),
];

/// Publishes the exported hooks on `window` so inline template handlers
/// (`onclick="deleteSelectedReturns()"`, `onchange="toggleSelectAll(this)"`)
/// reach them without loader glue.
fn expose_hooks() -> Result<(), ClientError> {
    let global = js_sys::global();
    let set = |name: &str, hook: JsValue| -> Result<(), ClientError> {
        Reflect::set(&global, &JsValue::from_str(name), &hook)?;
        Ok(())
    };

    set(
        "toggleSelectAll",
        Closure::wrap(Box::new(|checkbox: JsValue| {
            if let Ok(input) = checkbox.dyn_into::<HtmlInputElement>() {
                crate::toggle_select_all(&input);
            }
        }) as Box<dyn FnMut(JsValue)>)
        .into_js_value(),
    )?;
    for (name, hook) in ACTION_HOOKS {
        set(
            name,
            Closure::wrap(Box::new(move || hook()) as Box<dyn FnMut()>).into_js_value(),
        )?;
    }
    Ok(())
}
