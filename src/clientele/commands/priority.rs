use log::info;

use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome};
use crate::error::Result;
use crate::fields::Tag;
use crate::index::Index;
use crate::model::Client;

use super::helpers::resolve_indices;

/// Flips the priority marker on the clients at the given view positions.
///
/// Every index is validated and every replacement computed before the first
/// one is applied; a bad index toggles nothing. Each toggled client gets its
/// own success message, in the order the indices were given.
pub fn run(book: &mut ClientBook, indices: &[Index]) -> Result<CommandOutcome> {
    let resolved = resolve_indices(&book.visible_clients(), indices)?;

    let toggles: Vec<(Client, Client)> = resolved
        .into_iter()
        .map(|(_, client)| {
            let toggled = toggle(&client);
            (client, toggled)
        })
        .collect();

    let mut result = CommandOutcome::default();
    for (original, toggled) in toggles {
        book.set_client(&original, toggled.clone())?;
        let verb = if toggled.has_priority() {
            "Priority set for client"
        } else {
            "Priority removed from client"
        };
        result.add_message(CommandMessage::success(format!("{}: {}", verb, toggled)));
        result.affected_clients.push(toggled);
    }
    info!("toggled priority on {} clients", result.affected_clients.len());

    Ok(result)
}

fn toggle(client: &Client) -> Client {
    let mut tags = client.tags().clone();
    if client.has_priority() {
        tags.remove(&Tag::priority());
    } else {
        tags.insert(Tag::priority());
    }
    client.with_tags(tags)
}
