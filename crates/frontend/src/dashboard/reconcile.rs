use super::config::ReconcileStrategy;
use super::messages;
use crate::shared::api::HttpReply;
use crate::shared::error::ClientError;
use contracts::{BulkDeleteResponse, EntityKind};

/// What the page should do after a bulk delete round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Reload,
    RowsRemoved { deleted: u64 },
    Failed { message: String },
}

/// Maps the server answer (or transport error) to an outcome.
///
/// `Reload` only looks at the status. `PatchInPlace` trusts the JSON body
/// whatever the status is; `selected` stands in for a missing
/// `deleted_count`.
pub fn interpret(
    strategy: ReconcileStrategy,
    entity: EntityKind,
    selected: usize,
    reply: Result<HttpReply, ClientError>,
) -> DeleteOutcome {
    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("Error deleting {}: {}", entity, e);
            return failure(strategy, entity, None);
        }
    };

    match strategy {
        ReconcileStrategy::Reload if reply.is_success() => DeleteOutcome::Reload,
        ReconcileStrategy::Reload => {
            log::error!("Deleting {} failed: {}", entity, ClientError::Status(reply.status));
            failure(strategy, entity, None)
        }
        ReconcileStrategy::PatchInPlace => {
            match serde_json::from_str::<BulkDeleteResponse>(&reply.body) {
                Ok(resp) if resp.success => DeleteOutcome::RowsRemoved {
                    deleted: resp.deleted_count.unwrap_or(selected as u64),
                },
                Ok(resp) => failure(strategy, entity, resp.error),
                Err(e) => {
                    log::error!(
                        "Deleting {} returned HTTP {} with an unreadable body: {}",
                        entity,
                        reply.status,
                        ClientError::from(e)
                    );
                    failure(strategy, entity, None)
                }
            }
        }
    }
}

fn failure(strategy: ReconcileStrategy, entity: EntityKind, server_error: Option<String>) -> DeleteOutcome {
    let message = match strategy {
        ReconcileStrategy::Reload => messages::delete_failed(entity),
        ReconcileStrategy::PatchInPlace => server_error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| messages::delete_error(entity)),
    };
    DeleteOutcome::Failed { message }
}
