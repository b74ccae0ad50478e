//! Bridge to the page's Bootstrap modal.
//!
//! `bootstrap` is a page global, so it is looked up through `Reflect` on
//! every call; a page without it simply has no modal instance.

use crate::shared::dom::ModalHost;
use crate::shared::error::ClientError;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

pub struct BootstrapModal {
    document: Document,
    modal_id: String,
    body_id: String,
}

impl BootstrapModal {
    pub fn new(document: Document, modal_id: impl Into<String>, body_id: impl Into<String>) -> Self {
        Self {
            document,
            modal_id: modal_id.into(),
            body_id: body_id.into(),
        }
    }

    fn modal_element(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.modal_id)
    }
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `window.bootstrap.Modal`
fn modal_class() -> Option<Function> {
    let bootstrap = property(&js_sys::global(), "bootstrap")?;
    property(&bootstrap, "Modal")?.dyn_into::<Function>().ok()
}

/// `bootstrap.Modal.getInstance(el)`, `None` when no instance was created.
fn existing_instance(class: &Function, el: &Element) -> Option<JsValue> {
    let get_instance = property(class, "getInstance")?.dyn_into::<Function>().ok()?;
    get_instance
        .call1(class, el)
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn call_method(target: &JsValue, name: &str) -> Result<(), ClientError> {
    let method = property(target, name)
        .and_then(|m| m.dyn_into::<Function>().ok())
        .ok_or_else(|| ClientError::Js(format!("modal.{} is not a function", name)))?;
    method.call0(target)?;
    Ok(())
}

impl ModalHost for BootstrapModal {
    fn hide_open_modal(&self) -> bool {
        let Some(el) = self.modal_element() else {
            return false;
        };
        let Some(instance) = modal_class().and_then(|class| existing_instance(&class, &el)) else {
            return false;
        };
        match call_method(&instance, "hide") {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to hide modal: {}", e);
                false
            }
        }
    }

    fn show_with_body(&self, html: &str) -> Result<(), ClientError> {
        let el = self
            .modal_element()
            .ok_or_else(|| ClientError::MissingElement(self.modal_id.clone()))?;
        let body = self
            .document
            .get_element_by_id(&self.body_id)
            .ok_or_else(|| ClientError::MissingElement(self.body_id.clone()))?;
        body.set_inner_html(html);

        let class = modal_class().ok_or_else(|| ClientError::Js("bootstrap.Modal is not available".into()))?;
        let instance = match existing_instance(&class, &el) {
            Some(instance) => instance,
            None => Reflect::construct(&class, &Array::of1(&el))?,
        };
        call_method(&instance, "show")
    }

    fn remove_stale_backdrop(&self) -> bool {
        match self.document.query_selector(".modal-backdrop") {
            Ok(Some(backdrop)) => {
                backdrop.remove();
                true
            }
            _ => false,
        }
    }
}
