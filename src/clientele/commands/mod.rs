use crate::fields::{Address, Email, Phone};
use crate::model::Client;

pub mod add;
pub mod clear;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod list;
pub mod policy;
pub mod priority;
pub mod sort;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CommandMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CommandMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back: feedback messages for the host to render,
/// the clients the mutation touched, and the clients a query listed.
#[derive(Debug, Default)]
pub struct CommandOutcome {
    pub affected_clients: Vec<Client>,
    pub listed_clients: Vec<Client>,
    pub messages: Vec<CommandMessage>,
}

impl CommandOutcome {
    pub fn add_message(&mut self, message: CommandMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_clients(mut self, clients: Vec<Client>) -> Self {
        self.affected_clients = clients;
        self
    }

    pub fn with_listed_clients(mut self, clients: Vec<Client>) -> Self {
        self.listed_clients = clients;
        self
    }
}

/// The contact fields an update may replace. Name and tags have no slot
/// here: renames go through delete-and-add, tags through the policy and
/// priority commands.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }
}
