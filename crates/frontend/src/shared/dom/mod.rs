//! Page access used by the dashboard controllers.
//!
//! Controllers never touch `web_sys` directly; they go through these traits
//! so the flows can run against an in-memory page in tests.

pub mod web;

use crate::shared::csrf::CsrfSources;
use crate::shared::error::ClientError;
use crate::shared::toast::Notification;

pub trait DashboardPage {
    /// Sets `checked` on every `input[name=checkbox_name]`.
    fn set_rows_checked(&self, checkbox_name: &str, checked: bool);

    /// Values of the checked inputs of the group, in document order.
    fn checked_row_values(&self, checkbox_name: &str) -> Vec<String>;

    /// Removes the `<tr>` holding each input of the group whose value is
    /// listed, whatever its current checked state.
    /// Returns how many rows were removed.
    fn remove_rows(&self, checkbox_name: &str, values: &[String]) -> usize;

    fn set_toggle_checked(&self, toggle_id: &str, checked: bool);

    fn csrf_sources(&self) -> CsrfSources;

    /// Enables or disables every element matching `selector`.
    fn set_triggers_disabled(&self, selector: &str, disabled: bool);

    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;

    fn reload(&self);
}

/// The single shared dialog of the page (`#modal` / `#modal-body`).
pub trait ModalHost {
    /// Hides the open modal instance. Returns `false` when there is none.
    fn hide_open_modal(&self) -> bool;

    /// Replaces the modal body with `html` and shows the modal.
    fn show_with_body(&self, html: &str) -> Result<(), ClientError>;

    /// Removes a leftover `.modal-backdrop`. Returns `true` if one was found.
    fn remove_stale_backdrop(&self) -> bool;
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}
