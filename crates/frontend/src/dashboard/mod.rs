//! One list dashboard (disputes, orders or returns) bound to the page.

pub mod bulk_delete;
pub mod config;
pub mod initializer;
pub mod messages;
pub mod reconcile;
pub mod selection;

use crate::shared::api::DashboardApi;
use crate::shared::dom::{DashboardPage, ModalHost, Notifier};
use bulk_delete::BulkDeleteController;
use config::DashboardConfig;
use selection::SelectionController;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

pub struct Dashboard {
    pub config: Rc<DashboardConfig>,
    pub modal: Rc<dyn ModalHost>,
    pub api: Rc<dyn DashboardApi>,
    pub selection: SelectionController,
    pub bulk_delete: Rc<BulkDeleteController>,
}

impl Dashboard {
    pub fn new(
        config: DashboardConfig,
        page: Rc<dyn DashboardPage>,
        modal: Rc<dyn ModalHost>,
        api: Rc<dyn DashboardApi>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let config = Rc::new(config);
        let selection = SelectionController::new(config.checkbox_name.clone(), page.clone());
        let bulk_delete = Rc::new(BulkDeleteController::new(
            config.clone(),
            page,
            api.clone(),
            notifier,
        ));
        Self {
            config,
            modal,
            api,
            selection,
            bulk_delete,
        }
    }

    /// Runs the bulk delete flow in the background.
    pub fn spawn_delete(&self) {
        let controller = Rc::clone(&self.bulk_delete);
        spawn_local(async move {
            let flow = controller.delete_selected().await;
            log::debug!("Bulk delete finished: {:?}", flow);
        });
    }
}
