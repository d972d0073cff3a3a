//! # Grimoire Architecture
//!
//! Grimoire is a **UI-agnostic card catalog library**. It loads a collection of
//! cards once, lets a user filter, sort and pick cards, and keeps the picked
//! cards (the selection) across sessions. The bundled command line tool is one
//! client of it; nothing below the CLI knows about a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders projections, exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Event
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns Catalog + ViewState, dispatches events              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - browse / select / reset / config, returning CmdResult    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: catalog.rs (state), view.rs (pure projection)        │
//! │  Collaborators: source.rs (cards in), store/ (selection out)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! The [`catalog::Catalog`] holds the only mutable state that outlives a
//! session: the selection. It is written to the [`store::KeyValueStore`] in
//! full on every change. Filter, sort and visibility live in
//! [`view::ViewState`] and reset every session.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade and the [`api::Event`] contract
//! - [`catalog`]: Card collection and persisted selection
//! - [`selection`]: The ordered, duplicate-free id set
//! - [`view`]: Filtering, sorting and derived filter choices
//! - [`commands`]: Business logic per user action
//! - [`source`]: Card retrieval
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: The [`model::Card`] record
//! - [`palette`]: Domain colors
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod palette;
pub mod selection;
pub mod source;
pub mod store;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
