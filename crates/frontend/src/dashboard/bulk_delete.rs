//! Bulk delete of the checked rows.

use super::config::{DashboardConfig, ReconcileStrategy};
use super::messages;
use super::reconcile::{self, DeleteOutcome};
use crate::shared::api::{DashboardApi, DeleteCall};
use crate::shared::csrf;
use crate::shared::dom::{DashboardPage, Notifier};
use crate::shared::error::ClientError;
use crate::shared::toast::Notification;
use contracts::BulkDeleteRequest;
use std::cell::Cell;
use std::rc::Rc;

/// How a delete trigger ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteFlow {
    NothingSelected,
    Declined,
    /// Another delete from this controller was still in flight
    AlreadyRunning,
    Finished(DeleteOutcome),
}

pub struct BulkDeleteController {
    config: Rc<DashboardConfig>,
    page: Rc<dyn DashboardPage>,
    api: Rc<dyn DashboardApi>,
    notifier: Rc<dyn Notifier>,
    in_flight: Cell<bool>,
}

impl BulkDeleteController {
    pub fn new(
        config: Rc<DashboardConfig>,
        page: Rc<dyn DashboardPage>,
        api: Rc<dyn DashboardApi>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            page,
            api,
            notifier,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn delete_selected(&self) -> DeleteFlow {
        let entity = self.config.entity;
        if self.in_flight.get() {
            log::warn!("Delete of {} already in progress, ignoring trigger", entity);
            return DeleteFlow::AlreadyRunning;
        }

        let selected = self.page.checked_row_values(&self.config.checkbox_name);
        if selected.is_empty() {
            self.page.alert(&messages::nothing_selected(entity));
            return DeleteFlow::NothingSelected;
        }

        if self.config.confirm_delete
            && !self
                .page
                .confirm(&messages::confirm_delete(entity, selected.len()))
        {
            return DeleteFlow::Declined;
        }

        let csrf_token = csrf::resolve_token(
            &self.page.csrf_sources(),
            self.config.csrf_cookie.as_deref(),
        );
        if csrf_token.is_none() {
            log::warn!("No CSRF token on the page; sending delete without X-CSRFToken");
        }

        let call = DeleteCall {
            url: self.config.delete_url.clone(),
            csrf_token,
            ajax_header: self.config.ajax_header,
            body: BulkDeleteRequest::new(self.config.encode_ids(&selected)),
        };

        self.set_busy(true);
        log::debug!("Deleting {} {}: {:?}", call.body.len(), entity, selected);
        let reply = if call.url.is_empty() {
            Err(ClientError::Config(format!("delete URL for {} is not set", entity)))
        } else {
            self.api.bulk_delete(&call).await
        };
        let outcome = reconcile::interpret(self.config.strategy, entity, selected.len(), reply);
        self.apply(&outcome, &selected);
        self.set_busy(false);

        DeleteFlow::Finished(outcome)
    }

    fn set_busy(&self, busy: bool) {
        self.in_flight.set(busy);
        self.page
            .set_triggers_disabled(&self.config.delete_trigger_selector, busy);
    }

    fn apply(&self, outcome: &DeleteOutcome, selected: &[String]) {
        match outcome {
            DeleteOutcome::Reload => self.page.reload(),
            DeleteOutcome::RowsRemoved { deleted } => {
                let removed = self.page.remove_rows(&self.config.checkbox_name, selected);
                log::debug!("Removed {} rows after deleting {}", removed, deleted);
                self.page.set_toggle_checked(&self.config.select_all_id, false);
                self.notifier.notify(Notification::success(messages::deleted(
                    self.config.entity,
                    *deleted,
                )));
            }
            DeleteOutcome::Failed { message } => match self.config.strategy {
                ReconcileStrategy::Reload => self.page.alert(message),
                ReconcileStrategy::PatchInPlace => {
                    self.notifier.notify(Notification::error(message.clone()))
                }
            },
        }
    }
}
