use std::collections::BTreeSet;

use log::info;

use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome};
use crate::error::{ClienteleError, Result};
use crate::fields::Tag;
use crate::index::Index;

use super::helpers::resolve_index;

/// Attaches policy tags to the client at `index`.
///
/// Set union: a tag the client already carries is a quiet no-op. The
/// priority marker is excluded from the request; only the priority command
/// changes it.
pub fn add(book: &mut ClientBook, index: Index, tags: BTreeSet<Tag>) -> Result<CommandOutcome> {
    let view = book.visible_clients();
    let target = resolve_index(&view, index)?;
    let requested = without_priority(tags);

    let mut merged = target.tags().clone();
    merged.extend(requested);
    let updated = target.with_tags(merged);

    book.set_client(&target, updated.clone())?;
    info!("added policies to client {}", updated.name());

    let mut result = CommandOutcome::default();
    result.add_message(CommandMessage::success(format!(
        "Policies added to client: {}",
        updated
    )));
    result.affected_clients.push(updated);
    Ok(result)
}

/// Detaches policy tags from the client at `index`.
///
/// All-or-nothing: if any requested tag is not attached, nothing is removed
/// and the first missing tag is reported. The priority marker is excluded
/// the same way as for [`add`].
pub fn remove(book: &mut ClientBook, index: Index, tags: BTreeSet<Tag>) -> Result<CommandOutcome> {
    let view = book.visible_clients();
    let target = resolve_index(&view, index)?;
    let requested = without_priority(tags);

    for tag in &requested {
        if !target.tags().contains(tag) {
            return Err(ClienteleError::PolicyNotFound(tag.text().to_string()));
        }
    }

    let remaining: BTreeSet<Tag> = target
        .tags()
        .iter()
        .filter(|tag| !requested.contains(tag))
        .cloned()
        .collect();
    let updated = target.with_tags(remaining);

    book.set_client(&target, updated.clone())?;
    info!("removed policies from client {}", updated.name());

    let mut result = CommandOutcome::default();
    result.add_message(CommandMessage::success(format!(
        "Policies removed from client: {}",
        updated
    )));
    result.affected_clients.push(updated);
    Ok(result)
}

fn without_priority(tags: BTreeSet<Tag>) -> BTreeSet<Tag> {
    tags.into_iter().filter(|tag| !tag.is_priority()).collect()
}
