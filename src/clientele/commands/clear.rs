use log::info;

use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome};
use crate::error::Result;

/// Empties the registry. The active filter, if any, is left installed.
pub fn run(book: &mut ClientBook) -> Result<CommandOutcome> {
    let removed = book.registry().len();
    book.set_clients(Vec::new())?;
    info!("cleared the registry ({} clients removed)", removed);

    let mut result = CommandOutcome::default();
    result.add_message(CommandMessage::success(
        "The client registry has been cleared.",
    ));
    Ok(result)
}
