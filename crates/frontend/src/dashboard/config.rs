//! Dashboard configuration.
//!
//! Defaults come from the entity kind; the page can override them with
//! data attributes on `<body>`:
//!
//! ```html
//! <body data-dashboard="returns"
//!       data-delete-url="/returns/bulk-delete/"
//!       data-delete-strategy="patch"
//!       data-confirm-delete="true"
//!       data-log-level="info">
//! ```

use crate::shared::error::ClientError;
use contracts::{EntityKind, RowId};
use std::str::FromStr;

pub const MODAL_ID: &str = "modal";
pub const MODAL_BODY_ID: &str = "modal-body";
pub const SELECT_ALL_ID: &str = "select-all";
pub const DELETE_TRIGGER_SELECTOR: &str = "[data-bulk-delete]";
pub const CSRF_COOKIE: &str = "csrftoken";

/// What the page does after the server answered a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileStrategy {
    /// Reload on success, alert on failure
    Reload,
    /// Remove rows in place and show a banner
    PatchInPlace,
}

impl FromStr for ReconcileStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reload" => Ok(ReconcileStrategy::Reload),
            "patch" | "in-place" | "inplace" => Ok(ReconcileStrategy::PatchInPlace),
            other => Err(format!("Unknown delete strategy: {}", other)),
        }
    }
}

/// How checkbox values are sent in the `ids` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdEncoding {
    Text,
    Integer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub entity: EntityKind,
    pub delete_url: String,
    pub checkbox_name: String,
    pub table_body_id: String,
    pub create_button_id: String,
    pub modal_id: String,
    pub modal_body_id: String,
    pub select_all_id: String,
    pub delete_trigger_selector: String,
    pub strategy: ReconcileStrategy,
    pub confirm_delete: bool,
    /// Cookie consulted after the form field and meta tag
    pub csrf_cookie: Option<String>,
    pub ajax_header: bool,
    pub id_encoding: IdEncoding,
}

impl DashboardConfig {
    /// Defaults per entity. The returns list confirms, patches in place and
    /// sends numeric ids; disputes and orders reload the page.
    pub fn for_entity(entity: EntityKind, delete_url: impl Into<String>) -> Self {
        let returns = entity == EntityKind::Returns;
        Self {
            entity,
            delete_url: delete_url.into(),
            checkbox_name: entity.checkbox_name(),
            table_body_id: entity.table_body_id(),
            create_button_id: entity.create_button_id(),
            modal_id: MODAL_ID.to_string(),
            modal_body_id: MODAL_BODY_ID.to_string(),
            select_all_id: SELECT_ALL_ID.to_string(),
            delete_trigger_selector: DELETE_TRIGGER_SELECTOR.to_string(),
            strategy: if returns {
                ReconcileStrategy::PatchInPlace
            } else {
                ReconcileStrategy::Reload
            },
            confirm_delete: returns,
            csrf_cookie: returns.then(|| CSRF_COOKIE.to_string()),
            ajax_header: returns,
            id_encoding: if returns {
                IdEncoding::Integer
            } else {
                IdEncoding::Text
            },
        }
    }

    pub fn with_strategy(mut self, strategy: ReconcileStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm_delete = confirm;
        self
    }

    pub fn encode_ids(&self, raw: &[String]) -> Vec<RowId> {
        raw.iter()
            .map(|value| match self.id_encoding {
                IdEncoding::Text => RowId::Text(value.clone()),
                IdEncoding::Integer => RowId::integer_or_text(value),
            })
            .collect()
    }
}

/// Raw `data-*` values read from `<body>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageOverrides {
    pub entity: Option<String>,
    pub delete_url: Option<String>,
    pub strategy: Option<String>,
    pub confirm: Option<String>,
    pub log_level: Option<String>,
}

impl PageOverrides {
    /// Console log level from `data-log-level`, `debug` when absent or invalid.
    pub fn level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(log::Level::Debug)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Builds the configuration for the current page.
///
/// `detected` is the entity whose table body exists in the document;
/// `legacy_url` reads the old `window.<entity>DeleteUrl` global.
pub fn resolve(
    overrides: &PageOverrides,
    detected: Option<EntityKind>,
    legacy_url: impl FnOnce(EntityKind) -> Option<String>,
) -> Result<DashboardConfig, ClientError> {
    let entity = match overrides.entity.as_deref() {
        Some(name) => name.parse::<EntityKind>().map_err(ClientError::Config)?,
        None => detected.ok_or_else(|| ClientError::Config("no dashboard table on this page".into()))?,
    };

    let delete_url = overrides
        .delete_url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| legacy_url(entity).filter(|url| !url.trim().is_empty()))
        .unwrap_or_default();
    if delete_url.is_empty() {
        log::warn!("No delete URL configured for {}; bulk delete is disabled", entity);
    }

    let mut config = DashboardConfig::for_entity(entity, delete_url);

    if let Some(raw) = overrides.strategy.as_deref() {
        match raw.parse::<ReconcileStrategy>() {
            Ok(strategy) => config.strategy = strategy,
            Err(e) => log::warn!("{}; keeping default", e),
        }
    }
    if let Some(raw) = overrides.confirm.as_deref() {
        match parse_flag(raw) {
            Some(flag) => config.confirm_delete = flag,
            None => log::warn!("Invalid data-confirm-delete value: {}", raw),
        }
    }

    Ok(config)
}
