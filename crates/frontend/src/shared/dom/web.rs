use super::DashboardPage;
use crate::shared::csrf::CsrfSources;
use crate::shared::error::ClientError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlInputElement, NodeList, Window};

/// `DashboardPage` over the live document.
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or_else(|| ClientError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ClientError::MissingElement("document".into()))?;
        Ok(Self { window, document })
    }

    fn inputs(&self, selector: &str) -> Vec<HtmlInputElement> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
                .collect(),
            Err(e) => {
                log::warn!("Bad selector {}: {:?}", selector, e);
                Vec::new()
            }
        }
    }
}

/// Collects the element nodes of a `NodeList`.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn group_selector(checkbox_name: &str, only_checked: bool) -> String {
    let suffix = if only_checked { ":checked" } else { "" };
    format!("input[name=\"{}\"]{}", checkbox_name, suffix)
}

impl DashboardPage for WebPage {
    fn set_rows_checked(&self, checkbox_name: &str, checked: bool) {
        for input in self.inputs(&group_selector(checkbox_name, false)) {
            input.set_checked(checked);
        }
    }

    fn checked_row_values(&self, checkbox_name: &str) -> Vec<String> {
        self.inputs(&group_selector(checkbox_name, true))
            .into_iter()
            .map(|input| input.value())
            .collect()
    }

    fn remove_rows(&self, checkbox_name: &str, values: &[String]) -> usize {
        let mut removed = 0;
        for input in self.inputs(&group_selector(checkbox_name, false)) {
            if !values.contains(&input.value()) {
                continue;
            }
            if let Ok(Some(row)) = input.closest("tr") {
                row.remove();
                removed += 1;
            }
        }
        removed
    }

    fn set_toggle_checked(&self, toggle_id: &str, checked: bool) {
        if let Some(toggle) = self
            .document
            .get_element_by_id(toggle_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            toggle.set_checked(checked);
        }
    }

    fn csrf_sources(&self) -> CsrfSources {
        let hidden_field = self
            .document
            .query_selector("[name=csrfmiddlewaretoken]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value());
        let meta_tag = self
            .document
            .query_selector("meta[name=\"csrf-token\"]")
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("content"));
        let cookies = self
            .document
            .dyn_ref::<HtmlDocument>()
            .and_then(|doc| doc.cookie().ok());

        CsrfSources {
            hidden_field,
            meta_tag,
            cookies,
        }
    }

    fn set_triggers_disabled(&self, selector: &str, disabled: bool) {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return;
        };
        for el in elements(&list) {
            let result = if disabled {
                el.set_attribute("disabled", "")
                    .and_then(|_| el.set_attribute("aria-busy", "true"))
            } else {
                el.remove_attribute("disabled")
                    .and_then(|_| el.remove_attribute("aria-busy"))
            };
            if let Err(e) = result {
                log::warn!("Failed to toggle delete trigger state: {:?}", e);
            }
        }
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }
}
