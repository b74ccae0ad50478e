use crate::shared::dom::DashboardPage;
use std::rc::Rc;

/// Mirrors the "select all" toggle onto the row checkbox group.
pub struct SelectionController {
    checkbox_name: String,
    page: Rc<dyn DashboardPage>,
}

impl SelectionController {
    pub fn new(checkbox_name: impl Into<String>, page: Rc<dyn DashboardPage>) -> Self {
        Self {
            checkbox_name: checkbox_name.into(),
            page,
        }
    }

    pub fn toggle_all(&self, checked: bool) {
        self.page.set_rows_checked(&self.checkbox_name, checked);
    }
}
