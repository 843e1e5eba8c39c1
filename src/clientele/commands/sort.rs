use log::info;

use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome};
use crate::error::Result;

#[derive(Clone, Copy)]
enum Order {
    Name,
    Priority,
}

/// Sorts the registry alphabetically by name, case-insensitively.
pub fn by_name(book: &mut ClientBook) -> Result<CommandOutcome> {
    sort(book, Order::Name)
}

/// Sorts priority-marked clients to the front, alphabetically within each
/// group.
pub fn by_priority(book: &mut ClientBook) -> Result<CommandOutcome> {
    sort(book, Order::Priority)
}

fn sort(book: &mut ClientBook, order: Order) -> Result<CommandOutcome> {
    let mut result = CommandOutcome::default();

    if book.registry().is_empty() {
        result.add_message(CommandMessage::info("There are no clients to sort."));
        return Ok(result);
    }

    match order {
        Order::Name => {
            book.sort_by_name();
            result.add_message(CommandMessage::success(
                "Clients sorted in alphabetical order.",
            ));
        }
        Order::Priority => {
            book.sort_by_priority();
            result.add_message(CommandMessage::success(
                "Clients sorted in priority order.",
            ));
        }
    }
    info!("sorted {} clients", book.registry().len());

    result.listed_clients = book.visible_clients();
    Ok(result)
}
