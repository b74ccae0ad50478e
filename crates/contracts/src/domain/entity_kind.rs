use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity types that have a list dashboard with bulk operations.
///
/// Every DOM name the dashboard reads is derived from the kind, so a
/// template only needs to follow the naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Disputes,
    Orders,
    Returns,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Disputes, EntityKind::Orders, EntityKind::Returns];

    /// "dispute", "order", "return"
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Disputes => "dispute",
            EntityKind::Orders => "order",
            EntityKind::Returns => "return",
        }
    }

    /// "disputes", "orders", "returns"
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Disputes => "disputes",
            EntityKind::Orders => "orders",
            EntityKind::Returns => "returns",
        }
    }

    /// Name attribute shared by the row checkboxes, e.g. `selected_disputes`.
    pub fn checkbox_name(&self) -> String {
        format!("selected_{}", self.plural())
    }

    /// Id of the `<tbody>` that partial swaps replace, e.g. `disputes-table-body`.
    pub fn table_body_id(&self) -> String {
        format!("{}-table-body", self.plural())
    }

    /// Id of the "create" button, e.g. `create-dispute-btn`.
    pub fn create_button_id(&self) -> String {
        format!("create-{}-btn", self.singular())
    }

    /// Name of the window global older templates use for the delete endpoint.
    pub fn legacy_delete_url_global(&self) -> String {
        format!("{}DeleteUrl", self.singular())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.singular() == needle || kind.plural() == needle)
            .ok_or_else(|| format!("Unknown dashboard entity: {}", s))
    }
}
