//! Wire types shared between the dashboard client and the server endpoints.

pub mod domain;
pub mod shared;

pub use domain::entity_kind::EntityKind;
pub use shared::bulk_delete::{BulkDeleteRequest, BulkDeleteResponse, RowId};
