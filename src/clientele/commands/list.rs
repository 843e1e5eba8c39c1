use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome};
use crate::error::Result;

/// Clears any active filter and lists every client in the registry.
pub fn run(book: &mut ClientBook) -> Result<CommandOutcome> {
    book.clear_filter();
    let listed = book.visible_clients();

    let mut result = CommandOutcome::default();
    if listed.is_empty() {
        result.add_message(CommandMessage::info("There are no clients in the registry."));
    } else {
        result.add_message(CommandMessage::success("Listed all clients."));
    }
    Ok(result.with_listed_clients(listed))
}
