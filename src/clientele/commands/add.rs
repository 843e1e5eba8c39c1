use std::collections::BTreeSet;

use log::{info, warn};

use crate::book::ClientBook;
use crate::commands::{CommandMessage, CommandOutcome};
use crate::error::Result;
use crate::fields::Tag;
use crate::model::Client;

/// Adds a client to the registry.
///
/// The priority marker is owned by the priority command, so a `Priority` tag
/// arriving with a new client is dropped rather than stored; the outcome
/// carries a warning when that happens. Fails with `DuplicateClient` when a
/// record with the same identity already exists.
pub fn run(book: &mut ClientBook, client: Client) -> Result<CommandOutcome> {
    let (client, priority_dropped) = strip_priority(client);

    book.add_client(client.clone())?;
    info!("added client {}", client.name());

    let mut result = CommandOutcome::default();
    result.add_message(CommandMessage::success(format!(
        "New client added: {}",
        client
    )));
    if priority_dropped {
        warn!("dropped priority tag on add of {}", client.name());
        result.add_message(CommandMessage::warning(
            "The priority marker is set with the priority command and was not added.",
        ));
    }
    result.affected_clients.push(client);
    Ok(result)
}

fn strip_priority(client: Client) -> (Client, bool) {
    if !client.has_priority() {
        return (client, false);
    }
    let tags: BTreeSet<Tag> = client
        .tags()
        .iter()
        .filter(|tag| !tag.is_priority())
        .cloned()
        .collect();
    (client.with_tags(tags), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ClienteleError;
    use crate::fields::{Address, Email, Name, Phone};

    fn client_tagged(name: &str, phone: &str, tags: &[&str]) -> Client {
        Client::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new("contact@example.com").unwrap(),
            Address::new("Blk 30 Geylang Street 29").unwrap(),
            tags.iter().map(|t| Tag::new(*t).unwrap()).collect(),
        )
    }

    #[test]
    fn adds_and_reports_the_client() {
        let mut book = ClientBook::new();
        let alex = client_tagged("Alex Yeoh", "91234567", &["friends"]);

        let outcome = run(&mut book, alex.clone()).unwrap();

        assert!(book.contains(&alex));
        assert_eq!(outcome.affected_clients, vec![alex.clone()]);
        assert!(outcome.messages[0].content.contains(&alex.to_string()));
    }

    #[test]
    fn rejects_identity_duplicates() {
        let mut book = ClientBook::new();
        run(&mut book, client_tagged("Alex Yeoh", "91234567", &[])).unwrap();

        let same_identity = client_tagged("Alex Yeoh", "91234567", &["friends"]);
        let err = run(&mut book, same_identity).unwrap_err();

        assert_eq!(err, ClienteleError::DuplicateClient);
        assert_eq!(book.registry().len(), 1);
    }

    #[test]
    fn drops_an_incoming_priority_tag_with_a_warning() {
        let mut book = ClientBook::new();
        let marked = client_tagged("Alex Yeoh", "91234567", &["priority", "health"]);

        let outcome = run(&mut book, marked).unwrap();

        let stored = &book.registry().clients()[0];
        assert!(!stored.has_priority());
        assert_eq!(stored.tags().len(), 1);
        assert!(outcome
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)));
    }

    #[test]
    fn plain_tags_pass_through_unwarned() {
        let mut book = ClientBook::new();
        let outcome = run(&mut book, client_tagged("Alex Yeoh", "91234567", &["health"])).unwrap();

        assert!(!outcome
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)));
    }
}
