//! # API Facade
//!
//! [`GrimoireApi`] is the single entry point for UI clients. It owns the
//! [`Catalog`] (cards plus persisted selection) and the [`ViewState`]
//! (filter, sort, visibility), and turns user [`Event`]s into state changes.
//!
//! ## Event contract
//!
//! A client never reaches into the catalog directly. It reports what the user
//! did as an [`Event`] and gets back a [`CmdResult`] whose `projection` is the
//! complete, freshly derived view to render. Every event, including ones that
//! only touch view parameters, yields a new projection.
//!
//! ```text
//! user action ──► Event ──► dispatch ──► mutate Catalog / ViewState
//!                                              │
//!                  render ◄── Projection ◄─────┘
//! ```
//!
//! ## Startup
//!
//! [`GrimoireApi::load`] fetches the cards once, hands them to the catalog and
//! restores the persisted selection. A failed fetch is returned as an error
//! and the client should stop: an empty catalog would be indistinguishable
//! from "no cards match".
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `GrimoireApi<FileStore>`
//! - Testing: `GrimoireApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::source::CardSource;
use crate::store::KeyValueStore;
use crate::view::{SortMode, ViewState};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// New domain filter; empty clears it.
    DomainFilterChanged(String),
    /// New level filter as typed; empty clears it.
    LevelFilterChanged(String),
    SortChanged(SortMode),
    ToggleSelect(String),
    ToggleVisibility,
    ResetSelection,
}

pub struct GrimoireApi<S: KeyValueStore> {
    catalog: Catalog<S>,
    view: ViewState,
    paths: commands::GrimoirePaths,
}

impl<S: KeyValueStore> GrimoireApi<S> {
    pub fn new(catalog: Catalog<S>, paths: commands::GrimoirePaths) -> Self {
        Self {
            catalog,
            view: ViewState::default(),
            paths,
        }
    }

    /// Fetches the collection, restores the selection and projects the first view.
    pub fn load<C: CardSource>(&mut self, source: &C) -> Result<commands::CmdResult> {
        let cards = source.fetch()?;
        self.catalog.initialize(cards);
        self.catalog.restore_selection();
        self.project()
    }

    pub fn dispatch(&mut self, event: Event) -> Result<commands::CmdResult> {
        tracing::debug!(?event, "dispatch");
        match event {
            Event::DomainFilterChanged(domain) => {
                self.view.filter.set_domain(&domain);
                self.project()
            }
            Event::LevelFilterChanged(level) => {
                self.view.filter.set_level(&level);
                self.project()
            }
            Event::SortChanged(sort) => {
                self.view.sort = sort;
                self.project()
            }
            Event::ToggleSelect(id) => {
                commands::select::toggle(&mut self.catalog, &self.view, &[id])
            }
            Event::ToggleVisibility => {
                self.view.visible = !self.view.visible;
                self.project()
            }
            Event::ResetSelection => commands::reset::run(&mut self.catalog, &self.view),
        }
    }

    /// Toggles several ids and returns one combined result.
    pub fn toggle_many<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::select::toggle(&mut self.catalog, &self.view, ids)
    }

    /// Re-derives the view without changing anything.
    pub fn project(&self) -> Result<commands::CmdResult> {
        commands::browse::run(&self.catalog, &self.view)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn paths(&self) -> &commands::GrimoirePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::view::Projection;
pub use commands::{CmdMessage, CmdResult, GrimoirePaths, MessageLevel};
