use log::info;

use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome};
use crate::error::{ClienteleError, Result};
use crate::index::Index;

use super::helpers::resolve_indices;

/// Deletes the clients at the given view positions.
///
/// Every index is checked against the visible snapshot before the first
/// removal, so a bad index deletes nothing. The success message reports the
/// deleted clients in ascending index order no matter how the indices were
/// given.
pub fn run(book: &mut ClientBook, indices: &[Index]) -> Result<CommandOutcome> {
    let view = book.visible_clients();
    let mut resolved = resolve_indices(&view, indices)?;
    resolved.sort_by_key(|(index, _)| *index);

    // Highest position first, so each removal leaves the remaining targets
    // where the snapshot found them.
    for (_, client) in resolved.iter().rev() {
        book.remove_client(client)?;
    }
    info!("deleted {} clients", resolved.len());

    let descriptions: Vec<String> = resolved
        .iter()
        .map(|(_, client)| client.to_string())
        .collect();
    let mut result = CommandOutcome::default();
    result.add_message(CommandMessage::success(if descriptions.len() == 1 {
        format!("Deleted client: {}", descriptions[0])
    } else {
        format!("Deleted clients: {}", descriptions.join(", "))
    }));
    result.affected_clients = resolved.into_iter().map(|(_, client)| client).collect();
    Ok(result)
}

/// The explicit multi-delete form: at least two distinct indices.
pub fn run_multi(book: &mut ClientBook, indices: &[Index]) -> Result<CommandOutcome> {
    if indices.len() < 2 {
        return Err(ClienteleError::NotEnoughIndices);
    }
    run(book, indices)
}
