use log::info;

use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome, ContactUpdate};
use crate::error::{ClienteleError, Result};
use crate::index::Index;

use super::helpers::resolve_index;

/// Replaces contact fields on the client at `index`.
///
/// An update with no fields is refused outright. Changing the phone changes
/// the client's identity, so the registry's duplicate check applies: landing
/// on another client's identity fails with `DuplicateClient` and nothing is
/// written.
pub fn run(book: &mut ClientBook, index: Index, update: ContactUpdate) -> Result<CommandOutcome> {
    if update.is_empty() {
        return Err(ClienteleError::NothingToUpdate);
    }

    let view = book.visible_clients();
    let target = resolve_index(&view, index)?;

    let mut updated = target.clone();
    if let Some(phone) = update.phone {
        updated = updated.with_phone(phone);
    }
    if let Some(email) = update.email {
        updated = updated.with_email(email);
    }
    if let Some(address) = update.address {
        updated = updated.with_address(address);
    }

    book.set_client(&target, updated.clone())?;
    info!("updated contact fields for {}", updated.name());

    let mut result = CommandOutcome::default();
    result.add_message(CommandMessage::success(format!(
        "Updated client: {}",
        updated
    )));
    result.affected_clients.push(updated);
    Ok(result)
}
