//! Page-ready wiring: modal close on table swaps, the create-button
//! fallback, backdrop cleanup, and the delete / select-all triggers.

use super::Dashboard;
use crate::shared::api::DashboardApi;
use crate::shared::dom::web::elements;
use crate::shared::dom::ModalHost;
use crate::shared::error::ClientError;
use js_sys::Reflect;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{CustomEvent, Document, Event, EventTarget, HtmlInputElement};

pub const SWAP_EVENT: &str = "htmx:afterSwap";
pub const MODAL_HIDDEN_EVENT: &str = "hidden.bs.modal";

/// Closes the modal when the swapped target is the table body.
/// Returns `true` when a modal was hidden.
pub fn handle_swap(modal: &dyn ModalHost, table_body_id: &str, target_id: Option<&str>) -> bool {
    if target_id != Some(table_body_id) {
        return false;
    }
    let hidden = modal.hide_open_modal();
    log::debug!("{} refreshed, modal hidden: {}", table_body_id, hidden);
    hidden
}

/// Loads the create form into the modal when htmx is not on the page.
pub async fn open_create_form(
    api: &dyn DashboardApi,
    modal: &dyn ModalHost,
    url: Option<&str>,
) -> Result<(), ClientError> {
    let url = url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ClientError::MissingElement("hx-get attribute".into()))?;
    log::debug!("htmx not found, fetching form via fetch(): {}", url);
    let html = api.fetch_fragment(url).await?;
    modal.show_with_body(&html)
}

pub fn handle_modal_hidden(modal: &dyn ModalHost) {
    if modal.remove_stale_backdrop() {
        log::debug!("Removed stale modal backdrop");
    }
}

/// `event.detail.target.id` of an htmx swap event.
fn swap_target_id(event: &Event) -> Option<String> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    let target = Reflect::get(&detail, &JsValue::from_str("target")).ok()?;
    if target.is_undefined() || target.is_null() {
        return None;
    }
    Reflect::get(&target, &JsValue::from_str("id")).ok()?.as_string()
}

fn htmx_present() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("htmx"))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), ClientError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Attaches every dashboard listener to `document`.
pub fn install(dashboard: &Rc<Dashboard>, document: &Document) -> Result<(), ClientError> {
    let config = dashboard.config.clone();

    if let Some(body) = document.body() {
        let d = Rc::clone(dashboard);
        listen(&body, SWAP_EVENT, move |event| {
            let target_id = swap_target_id(&event);
            handle_swap(d.modal.as_ref(), &d.config.table_body_id, target_id.as_deref());
        })?;
    }

    if let Some(button) = document.get_element_by_id(&config.create_button_id) {
        let d = Rc::clone(dashboard);
        let source = button.clone();
        listen(&button, "click", move |event| {
            let declarative = htmx_present();
            log::debug!("{} clicked, htmx present: {}", d.config.create_button_id, declarative);
            if declarative {
                return;
            }
            event.prevent_default();
            let url = source.get_attribute("hx-get");
            let d = Rc::clone(&d);
            spawn_local(async move {
                if let Err(e) = open_create_form(d.api.as_ref(), d.modal.as_ref(), url.as_deref()).await {
                    log::error!("Failed to load modal form fallback: {}", e);
                }
            });
        })?;
    }

    if let Some(modal_el) = document.get_element_by_id(&config.modal_id) {
        let d = Rc::clone(dashboard);
        listen(&modal_el, MODAL_HIDDEN_EVENT, move |_| handle_modal_hidden(d.modal.as_ref()))?;
    }

    if let Some(toggle) = document.get_element_by_id(&config.select_all_id) {
        let d = Rc::clone(dashboard);
        listen(&toggle, "change", move |event| {
            if let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                d.selection.toggle_all(input.checked());
            }
        })?;
    }

    let triggers = document.query_selector_all(&config.delete_trigger_selector)?;
    for trigger in elements(&triggers) {
        let d = Rc::clone(dashboard);
        listen(&trigger, "click", move |event| {
            event.prevent_default();
            d.spawn_delete();
        })?;
    }

    log::info!("{} dashboard initialized", config.entity);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, FakeModal};
    use futures::executor::block_on;

    #[test]
    fn test_swap_with_other_target_keeps_modal() {
        let modal = FakeModal::with_instance();
        assert!(!handle_swap(&modal, "disputes-table-body", Some("orders-table-body")));
        assert!(!handle_swap(&modal, "disputes-table-body", None));
        assert_eq!(modal.hide_calls(), 0);
        assert!(modal.is_open());
    }

    #[test]
    fn test_swap_with_table_body_hides_modal() {
        let modal = FakeModal::with_instance();
        assert!(handle_swap(&modal, "disputes-table-body", Some("disputes-table-body")));
        assert_eq!(modal.hide_calls(), 1);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_swap_without_instance_is_noop() {
        let modal = FakeModal::default();
        assert!(!handle_swap(&modal, "returns-table-body", Some("returns-table-body")));
        assert_eq!(modal.hide_calls(), 1);
    }

    #[test]
    fn test_create_form_fallback_shows_fragment() {
        let api = FakeApi::default();
        api.set_fragment(Ok("<form id=\"create\"></form>".into()));
        let modal = FakeModal::default();

        block_on(open_create_form(&api, &modal, Some("/disputes/create/"))).unwrap();

        assert_eq!(api.fragment_urls(), vec!["/disputes/create/".to_string()]);
        assert_eq!(modal.shown(), vec!["<form id=\"create\"></form>".to_string()]);
    }

    #[test]
    fn test_create_form_failure_shows_nothing() {
        let api = FakeApi::default();
        api.set_fragment(Err(ClientError::Status(404)));
        let modal = FakeModal::default();

        let result = block_on(open_create_form(&api, &modal, Some("/orders/create/")));

        assert_eq!(result, Err(ClientError::Status(404)));
        assert!(modal.shown().is_empty());
    }

    #[test]
    fn test_create_form_needs_url() {
        let api = FakeApi::default();
        let modal = FakeModal::default();

        let result = block_on(open_create_form(&api, &modal, None));

        assert!(matches!(result, Err(ClientError::MissingElement(_))));
        assert!(api.fragment_urls().is_empty());
    }

    #[test]
    fn test_modal_hidden_clears_backdrop_once() {
        let modal = FakeModal::default();
        modal.add_backdrop();

        handle_modal_hidden(&modal);
        handle_modal_hidden(&modal);

        assert_eq!(modal.backdrops(), 0);
    }
}
