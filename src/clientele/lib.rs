//! # Clientele Architecture
//!
//! Clientele is a **UI-agnostic client registry library**. It keeps a single
//! user's list of clients (validated contact fields, policy tags, a priority
//! marker) and exposes every operation as a plain Rust call. There is no
//! binary here: parsing, rendering, and persistence are jobs for whatever
//! front end embeds the crate.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - One method per operation, zero business logic            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Orchestration: resolve indices, validate, then apply     │
//! │  - Multi-target operations are all-or-nothing               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (book.rs, index.rs, predicate.rs)            │
//! │  - ClientBook: registry + the active search filter          │
//! │  - The visible view is re-derived on every read             │
//! │  - One-based Index into that view                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer (registry.rs, model.rs, fields/)                │
//! │  - ClientRegistry: ordered, duplicate-rejecting collection  │
//! │  - Client: immutable aggregate of validated field types     │
//! │  - Fields: normalize-then-validate newtypes                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity vs. Equality
//!
//! Two clients are *the same client* when their normalized name and phone
//! match; that is what the registry's duplicate check uses. Full `==`
//! compares every field. Replace/remove target lookups use full equality,
//! so "the same client" can exist in several editions but only one of them
//! can be stored at a time.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CommandOutcome>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** touches the filesystem
//!
//! Hosts that want persistence serialize the registry with serde; hosts that
//! want logs install a `log` backend.
//!
//! ## Testing Strategy
//!
//! 1. **Fields and registry**: exhaustive unit tests next to the code. This
//!    is where the lion's share of testing lives.
//! 2. **Commands** (`commands/*.rs`): unit tests of orchestration against an
//!    in-memory book.
//! 3. **Facade** (`tests/`): one end-to-end scenario through `ClienteleApi`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Orchestration for each operation
//! - [`book`]: Session state (registry + active filter)
//! - [`registry`]: The uniqueness-enforcing collection
//! - [`model`]: The `Client` aggregate
//! - [`fields`]: Self-validating field types (`Name`, `Phone`, ...)
//! - [`predicate`]: Keyword search predicates
//! - [`index`]: One-based indexing into the visible view
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod error;
pub mod fields;
pub mod index;
pub mod model;
pub mod predicate;
pub mod registry;
