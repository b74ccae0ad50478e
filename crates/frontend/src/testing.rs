//! In-memory page, modal, API and notifier used by the unit tests.

use crate::shared::api::{DashboardApi, DeleteCall, HttpReply};
use crate::shared::csrf::CsrfSources;
use crate::shared::dom::{DashboardPage, ModalHost, Notifier};
use crate::shared::error::ClientError;
use crate::shared::toast::Notification;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

#[derive(Debug, Clone)]
struct Row {
    group: String,
    value: String,
    checked: bool,
}

#[derive(Default)]
pub struct FakePage {
    rows: RefCell<Vec<Row>>,
    toggles: RefCell<HashMap<String, bool>>,
    csrf: RefCell<CsrfSources>,
    confirm_answer: Cell<bool>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    reloads: Cell<u32>,
    trigger_states: RefCell<Vec<bool>>,
}

impl FakePage {
    pub fn with_rows(group: &str, rows: &[(&str, bool)]) -> Self {
        let page = Self::default();
        for (value, checked) in rows {
            page.add_row(group, value, *checked);
        }
        page
    }

    pub fn add_row(&self, group: &str, value: &str, checked: bool) {
        self.rows.borrow_mut().push(Row {
            group: group.to_string(),
            value: value.to_string(),
            checked,
        });
    }

    pub fn checked_states(&self) -> Vec<bool> {
        self.rows.borrow().iter().map(|r| r.checked).collect()
    }

    pub fn checked_values(&self, group: &str) -> Vec<String> {
        self.checked_row_values(group)
    }

    /// Values of every rendered row of the group.
    pub fn row_values(&self, group: &str) -> Vec<String> {
        self.rows
            .borrow()
            .iter()
            .filter(|r| r.group == group)
            .map(|r| r.value.clone())
            .collect()
    }

    pub fn set_toggle(&self, id: &str, checked: bool) {
        self.toggles.borrow_mut().insert(id.to_string(), checked);
    }

    pub fn toggle(&self, id: &str) -> Option<bool> {
        self.toggles.borrow().get(id).copied()
    }

    pub fn set_csrf(&self, sources: CsrfSources) {
        *self.csrf.borrow_mut() = sources;
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn reloads(&self) -> u32 {
        self.reloads.get()
    }

    pub fn trigger_states(&self) -> Vec<bool> {
        self.trigger_states.borrow().clone()
    }
}

impl DashboardPage for FakePage {
    fn set_rows_checked(&self, checkbox_name: &str, checked: bool) {
        for row in self.rows.borrow_mut().iter_mut() {
            if row.group == checkbox_name {
                row.checked = checked;
            }
        }
    }

    fn checked_row_values(&self, checkbox_name: &str) -> Vec<String> {
        self.rows
            .borrow()
            .iter()
            .filter(|r| r.group == checkbox_name && r.checked)
            .map(|r| r.value.clone())
            .collect()
    }

    fn remove_rows(&self, checkbox_name: &str, values: &[String]) -> usize {
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|r| !(r.group == checkbox_name && values.contains(&r.value)));
        before - rows.len()
    }

    fn set_toggle_checked(&self, toggle_id: &str, checked: bool) {
        if let Some(state) = self.toggles.borrow_mut().get_mut(toggle_id) {
            *state = checked;
        }
    }

    fn csrf_sources(&self) -> CsrfSources {
        self.csrf.borrow().clone()
    }

    fn set_triggers_disabled(&self, _selector: &str, disabled: bool) {
        self.trigger_states.borrow_mut().push(disabled);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeModal {
    open: Cell<bool>,
    hide_calls: Cell<u32>,
    shown: RefCell<Vec<String>>,
    backdrops: Cell<u32>,
}

impl FakeModal {
    /// A modal that has a Bootstrap instance and is currently open.
    pub fn with_instance() -> Self {
        let modal = Self::default();
        modal.open.set(true);
        modal
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn hide_calls(&self) -> u32 {
        self.hide_calls.get()
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }

    pub fn add_backdrop(&self) {
        self.backdrops.set(self.backdrops.get() + 1);
    }

    pub fn backdrops(&self) -> u32 {
        self.backdrops.get()
    }
}

impl ModalHost for FakeModal {
    fn hide_open_modal(&self) -> bool {
        self.hide_calls.set(self.hide_calls.get() + 1);
        self.open.replace(false)
    }

    fn show_with_body(&self, html: &str) -> Result<(), ClientError> {
        self.shown.borrow_mut().push(html.to_string());
        self.open.set(true);
        Ok(())
    }

    fn remove_stale_backdrop(&self) -> bool {
        if self.backdrops.get() == 0 {
            return false;
        }
        self.backdrops.set(self.backdrops.get() - 1);
        true
    }
}

#[derive(Default)]
pub struct FakeApi {
    replies: RefCell<VecDeque<Result<HttpReply, ClientError>>>,
    calls: RefCell<Vec<DeleteCall>>,
    fragment: RefCell<Option<Result<String, ClientError>>>,
    fragment_urls: RefCell<Vec<String>>,
    yield_first: Cell<bool>,
}

impl FakeApi {
    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(HttpReply {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_error(&self, error: ClientError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    /// Makes `bulk_delete` return `Pending` once before answering.
    pub fn yield_before_reply(&self) {
        self.yield_first.set(true);
    }

    pub fn set_fragment(&self, fragment: Result<String, ClientError>) {
        *self.fragment.borrow_mut() = Some(fragment);
    }

    pub fn calls(&self) -> Vec<DeleteCall> {
        self.calls.borrow().clone()
    }

    pub fn fragment_urls(&self) -> Vec<String> {
        self.fragment_urls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn bulk_delete(&self, call: &DeleteCall) -> Result<HttpReply, ClientError> {
        self.calls.borrow_mut().push(call.clone());
        if self.yield_first.replace(false) {
            YieldNow::default().await;
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no reply queued".into())))
    }

    async fn fetch_fragment(&self, url: &str) -> Result<String, ClientError> {
        self.fragment_urls.borrow_mut().push(url.to_string());
        self.fragment
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(ClientError::Status(404)))
    }
}

#[derive(Default)]
pub struct FakeNotifier {
    shown: RefCell<Vec<Notification>>,
}

impl FakeNotifier {
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.borrow().clone()
    }
}

impl Notifier for FakeNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.borrow_mut().push(notification);
    }
}

/// Returns `Pending` once, waking itself so the executor polls again.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
