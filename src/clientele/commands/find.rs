use log::info;

use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome};
use crate::error::Result;
use crate::predicate::ClientPredicate;

/// Installs `predicate` as the active filter and lists what it matches.
///
/// The filter stays in place afterwards: subsequent index-taking commands
/// operate on the narrowed view until another find or a list resets it.
pub fn run(book: &mut ClientBook, predicate: ClientPredicate) -> Result<CommandOutcome> {
    book.set_filter(predicate);
    let listed = book.visible_clients();
    info!("search matched {} clients", listed.len());

    let mut result = CommandOutcome::default();
    result.add_message(CommandMessage::info(format!(
        "{} clients listed!",
        listed.len()
    )));
    Ok(result.with_listed_clients(listed))
}
