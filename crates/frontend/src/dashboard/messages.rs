//! User-facing texts of the bulk delete flow.

use contracts::EntityKind;

pub fn nothing_selected(entity: EntityKind) -> String {
    match entity {
        EntityKind::Returns => "Please select at least one return to delete.".to_string(),
        _ => format!("No {} selected.", entity.plural()),
    }
}

pub fn confirm_delete(entity: EntityKind, count: usize) -> String {
    format!(
        "Are you sure you want to delete {} selected {}(s)?",
        count,
        entity.singular()
    )
}

pub fn delete_failed(entity: EntityKind) -> String {
    format!("Failed to delete {}.", entity.plural())
}

pub fn deleted(entity: EntityKind, count: u64) -> String {
    format!("Successfully deleted {} {}(s).", count, entity.singular())
}

pub fn delete_error(entity: EntityKind) -> String {
    format!("Error deleting {}. Please try again.", entity.plural())
}
