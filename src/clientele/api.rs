//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all clientele operations, regardless of the front
//! end driving them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: one [`ClienteleApi`] wraps one [`ClientBook`]
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CommandOutcome>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, files, or terminals
//! - **Presentation concerns**: Returns data structures, not rendered text
//!
//! ## The Persistence Boundary
//!
//! Hosts that persist the registry serialize [`ClienteleApi::registry`] with
//! serde and feed a loaded snapshot back through
//! [`ClienteleApi::load_clients`], which re-checks the uniqueness invariant
//! and rejects corrupt data instead of adopting it.

use std::collections::BTreeSet;

use crate::book::ClientBook;
use crate::commands;
use crate::error::Result;
use crate::fields::Tag;
use crate::index::Index;
use crate::model::Client;
use crate::predicate::ClientPredicate;
use crate::registry::ClientRegistry;

/// The main API facade for clientele operations.
///
/// All front ends (a command parser, a test harness, anything else) should
/// interact through this type.
#[derive(Debug, Default)]
pub struct ClienteleApi {
    book: ClientBook,
}

impl ClienteleApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: ClientRegistry) -> Self {
        Self {
            book: ClientBook::with_registry(registry),
        }
    }

    pub fn add_client(&mut self, client: Client) -> Result<commands::CommandOutcome> {
        commands::add::run(&mut self.book, client)
    }

    pub fn delete_clients(&mut self, indices: &[Index]) -> Result<commands::CommandOutcome> {
        commands::delete::run(&mut self.book, indices)
    }

    pub fn delete_clients_multi(&mut self, indices: &[Index]) -> Result<commands::CommandOutcome> {
        commands::delete::run_multi(&mut self.book, indices)
    }

    pub fn add_policies(
        &mut self,
        index: Index,
        tags: BTreeSet<Tag>,
    ) -> Result<commands::CommandOutcome> {
        commands::policy::add(&mut self.book, index, tags)
    }

    pub fn remove_policies(
        &mut self,
        index: Index,
        tags: BTreeSet<Tag>,
    ) -> Result<commands::CommandOutcome> {
        commands::policy::remove(&mut self.book, index, tags)
    }

    pub fn toggle_priority(&mut self, indices: &[Index]) -> Result<commands::CommandOutcome> {
        commands::priority::run(&mut self.book, indices)
    }

    pub fn update_contact(
        &mut self,
        index: Index,
        update: commands::ContactUpdate,
    ) -> Result<commands::CommandOutcome> {
        commands::update::run(&mut self.book, index, update)
    }

    pub fn sort_by_name(&mut self) -> Result<commands::CommandOutcome> {
        commands::sort::by_name(&mut self.book)
    }

    pub fn sort_by_priority(&mut self) -> Result<commands::CommandOutcome> {
        commands::sort::by_priority(&mut self.book)
    }

    pub fn find_any<I, S>(&mut self, keywords: I) -> Result<commands::CommandOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        commands::find::run(&mut self.book, ClientPredicate::any(keywords))
    }

    pub fn find_all<I, S>(&mut self, keywords: I) -> Result<commands::CommandOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        commands::find::run(&mut self.book, ClientPredicate::all(keywords))
    }

    pub fn list_clients(&mut self) -> Result<commands::CommandOutcome> {
        commands::list::run(&mut self.book)
    }

    pub fn clear(&mut self) -> Result<commands::CommandOutcome> {
        commands::clear::run(&mut self.book)
    }

    /// Replaces the whole registry with a loaded snapshot.
    pub fn load_clients(&mut self, clients: Vec<Client>) -> Result<()> {
        self.book.set_clients(clients)
    }

    pub fn registry(&self) -> &ClientRegistry {
        self.book.registry()
    }

    pub fn visible_clients(&self) -> Vec<Client> {
        self.book.visible_clients()
    }

    pub fn book(&self) -> &ClientBook {
        &self.book
    }
}

pub use commands::{CommandMessage, CommandOutcome, ContactUpdate, MessageLevel};
