//! Session state: the registry plus the active search filter.

use log::debug;

use crate::error::Result;
use crate::model::Client;
use crate::predicate::ClientPredicate;
use crate::registry::ClientRegistry;

/// What a session operates on: every command reads and mutates one of these.
///
/// The book pairs the [`ClientRegistry`] with the active search filter.
/// Index arguments in the command layer always refer to the *visible* list,
/// which is re-derived from registry plus filter on every read; there is no
/// cached view to fall out of date when a mutation lands.
#[derive(Debug, Clone, Default)]
pub struct ClientBook {
    registry: ClientRegistry,
    filter: Option<ClientPredicate>,
}

impl ClientBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: ClientRegistry) -> Self {
        Self {
            registry,
            filter: None,
        }
    }

    pub fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    /// The clients the active filter lets through, in registry order.
    pub fn visible_clients(&self) -> Vec<Client> {
        match &self.filter {
            Some(predicate) => self
                .registry
                .iter()
                .filter(|c| predicate.matches(c))
                .cloned()
                .collect(),
            None => self.registry.iter().cloned().collect(),
        }
    }

    pub fn filter(&self) -> Option<&ClientPredicate> {
        self.filter.as_ref()
    }

    pub fn set_filter(&mut self, predicate: ClientPredicate) {
        debug!("installing search filter {:?}", predicate);
        self.filter = Some(predicate);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn contains(&self, client: &Client) -> bool {
        self.registry.contains(client)
    }

    pub fn add_client(&mut self, client: Client) -> Result<()> {
        self.registry.add(client)
    }

    pub fn set_client(&mut self, target: &Client, replacement: Client) -> Result<()> {
        self.registry.set_client(target, replacement)
    }

    pub fn remove_client(&mut self, client: &Client) -> Result<()> {
        self.registry.remove(client)
    }

    pub fn set_clients(&mut self, clients: Vec<Client>) -> Result<()> {
        self.registry.set_clients(clients)
    }

    pub fn sort_by_name(&mut self) {
        self.registry.sort_by_name()
    }

    pub fn sort_by_priority(&mut self) {
        self.registry.sort_by_priority()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Address, Email, Name, Phone};

    fn client(name: &str, phone: &str) -> Client {
        Client::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new("contact@example.com").unwrap(),
            Address::new("Blk 30 Geylang Street 29").unwrap(),
            Default::default(),
        )
    }

    #[test]
    fn without_a_filter_everything_is_visible() {
        let mut book = ClientBook::new();
        book.add_client(client("Alex Yeoh", "91234567")).unwrap();
        book.add_client(client("Bernice Yu", "99272758")).unwrap();

        assert_eq!(book.visible_clients().len(), 2);
    }

    #[test]
    fn filter_narrows_the_view() {
        let mut book = ClientBook::new();
        book.add_client(client("Alex Yeoh", "91234567")).unwrap();
        book.add_client(client("Bernice Yu", "99272758")).unwrap();

        book.set_filter(ClientPredicate::any(["bernice"]));
        let visible = book.visible_clients();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name().as_str(), "Bernice Yu");

        book.clear_filter();
        assert_eq!(book.visible_clients().len(), 2);
    }

    #[test]
    fn view_rederives_after_mutations() {
        let mut book = ClientBook::new();
        book.add_client(client("Alex Yeoh", "91234567")).unwrap();
        book.set_filter(ClientPredicate::any(["yeoh"]));
        assert_eq!(book.visible_clients().len(), 1);

        // A matching client added after the filter was installed shows up.
        book.add_client(client("Marcus Yeoh", "87654321")).unwrap();
        assert_eq!(book.visible_clients().len(), 2);

        // Removing one is reflected immediately.
        let visible = book.visible_clients();
        book.remove_client(&visible[0]).unwrap();
        assert_eq!(book.visible_clients().len(), 1);
    }

    #[test]
    fn visible_order_follows_registry_order() {
        let mut book = ClientBook::new();
        book.add_client(client("Bernice Yu", "99272758")).unwrap();
        book.add_client(client("Alex Yeoh", "91234567")).unwrap();

        book.sort_by_name();
        let names: Vec<_> = book
            .visible_clients()
            .iter()
            .map(|c| c.name().as_str().to_string())
            .collect();
        assert_eq!(names, vec!["Alex Yeoh", "Bernice Yu"]);
    }
}
