//! The uniqueness-enforcing client collection.
//!
//! A [`ClientRegistry`] is an ordered sequence of [`Client`]s that never
//! holds two records for the same client (by [`Client::is_same_client`]).
//! Element *lookup* for replace and remove uses full equality; the identity
//! rule only guards what may coexist. Insertion order is preserved except
//! under an explicit sort.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ClienteleError, Result};
use crate::model::Client;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClientRegistry {
    clients: Vec<Client>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an existing list, typically a loaded snapshot.
    ///
    /// # Errors
    ///
    /// `DuplicateClient` if any two entries are the same client.
    pub fn from_clients(clients: Vec<Client>) -> Result<Self> {
        let mut registry = Self::new();
        registry.set_clients(clients)?;
        Ok(registry)
    }

    /// Whether some stored record is the same client as `client`.
    pub fn contains(&self, client: &Client) -> bool {
        self.clients.iter().any(|c| c.is_same_client(client))
    }

    /// Appends a client at the end.
    ///
    /// # Errors
    ///
    /// `DuplicateClient` if a record with the same identity is stored.
    pub fn add(&mut self, client: Client) -> Result<()> {
        if self.contains(&client) {
            return Err(ClienteleError::DuplicateClient);
        }
        debug!("adding client {}", client.name());
        self.clients.push(client);
        Ok(())
    }

    /// Replaces the record equal to `target` with `replacement`, in place.
    ///
    /// Changing identity is allowed as long as the new identity does not
    /// collide with a *different* stored record; re-editing a client's own
    /// contact fields therefore always passes the duplicate check.
    ///
    /// # Errors
    ///
    /// `ClientNotFound` if no stored record equals `target`;
    /// `DuplicateClient` on an identity collision with another record.
    pub fn set_client(&mut self, target: &Client, replacement: Client) -> Result<()> {
        let index = self
            .clients
            .iter()
            .position(|c| c == target)
            .ok_or(ClienteleError::ClientNotFound)?;

        if !target.is_same_client(&replacement) && self.contains(&replacement) {
            return Err(ClienteleError::DuplicateClient);
        }

        debug!("replacing client {}", target.name());
        self.clients[index] = replacement;
        Ok(())
    }

    /// Removes the first record equal to `client`.
    ///
    /// # Errors
    ///
    /// `ClientNotFound` if no stored record is equal (identity alone does
    /// not count).
    pub fn remove(&mut self, client: &Client) -> Result<()> {
        let index = self
            .clients
            .iter()
            .position(|c| c == client)
            .ok_or(ClienteleError::ClientNotFound)?;

        debug!("removing client {}", client.name());
        self.clients.remove(index);
        Ok(())
    }

    /// Replaces the whole sequence, keeping the given order.
    ///
    /// # Errors
    ///
    /// `DuplicateClient` if the new list contains two records for the same
    /// client; the registry is left untouched in that case.
    pub fn set_clients(&mut self, clients: Vec<Client>) -> Result<()> {
        if !all_unique(&clients) {
            return Err(ClienteleError::DuplicateClient);
        }
        debug!("resetting registry to {} clients", clients.len());
        self.clients = clients;
        Ok(())
    }

    /// Case-insensitive alphabetical order by name.
    pub fn sort_by_name(&mut self) {
        debug!("sorting {} clients by name", self.clients.len());
        self.clients
            .sort_by_key(|c| c.name().as_str().to_lowercase());
    }

    /// Priority-tagged clients first, then alphabetical by name within each
    /// partition. Stable, so running it twice changes nothing.
    pub fn sort_by_priority(&mut self) {
        debug!("sorting {} clients by priority", self.clients.len());
        self.clients
            .sort_by_key(|c| (!c.has_priority(), c.name().as_str().to_lowercase()));
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl<'a> IntoIterator for &'a ClientRegistry {
    type Item = &'a Client;
    type IntoIter = std::slice::Iter<'a, Client>;

    fn into_iter(self) -> Self::IntoIter {
        self.clients.iter()
    }
}

fn all_unique(clients: &[Client]) -> bool {
    for (i, a) in clients.iter().enumerate() {
        for b in &clients[i + 1..] {
            if a.is_same_client(b) {
                return false;
            }
        }
    }
    true
}

impl<'de> Deserialize<'de> for ClientRegistry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let clients = Vec::<Client>::deserialize(deserializer)?;
        ClientRegistry::from_clients(clients).map_err(serde::de::Error::custom)
    }
}
