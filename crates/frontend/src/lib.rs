pub mod app;
pub mod dashboard;
pub mod shared;

#[cfg(test)]
mod testing;

use contracts::EntityKind;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlInputElement;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(app::page_log_level());
    console_error_panic_hook::set_once();

    if let Err(e) = app::boot() {
        log::error!("Dashboard bootstrap failed: {}", e);
    }
}

#[wasm_bindgen(js_name = toggleSelectAll)]
pub fn toggle_select_all(checkbox: &HtmlInputElement) {
    app::with_active(|d| d.selection.toggle_all(checkbox.checked()));
}

#[wasm_bindgen(js_name = deleteSelected)]
pub fn delete_selected() {
    app::with_active(|d| d.spawn_delete());
}

#[wasm_bindgen(js_name = deleteSelectedDisputes)]
pub fn delete_selected_disputes() {
    app::delete_for(EntityKind::Disputes);
}

#[wasm_bindgen(js_name = deleteSelectedOrders)]
pub fn delete_selected_orders() {
    app::delete_for(EntityKind::Orders);
}

#[wasm_bindgen(js_name = deleteSelectedReturns)]
pub fn delete_selected_returns() {
    app::delete_for(EntityKind::Returns);
}
