//! # CLI Layer
//!
//! This module is **one possible UI client** for grimoire. It is the only
//! place that parses arguments, writes to stdout, and decides exit codes.
//!
//! Each invocation is one session: cards are loaded, the stored selection is
//! restored, the command's events are dispatched to the API, and the final
//! projection is rendered. Filter, sort and visibility come from flags and
//! are forgotten when the process exits; only the selection persists.
//!
//! ## Locations
//!
//! - Data directory: `$GRIMOIRE_HOME`, else the platform data dir
//! - Card file: `--cards`, else `$GRIMOIRE_CARDS`, else `cards-file` from config

use super::render::{print_config, print_filters, print_messages, print_projection, print_selected};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use grimoire::api::{ConfigAction, Event, GrimoireApi, GrimoirePaths};
use grimoire::catalog::Catalog;
use grimoire::config::{ConfigKey, GrimoireConfig};
use grimoire::error::{GrimoireError, Result};
use grimoire::logging;
use grimoire::source::FileSource;
use grimoire::store::fs::FileStore;
use grimoire::view::SortMode;
use std::path::PathBuf;

const HOME_ENV: &str = "GRIMOIRE_HOME";
const CARDS_ENV: &str = "GRIMOIRE_CARDS";

struct AppContext {
    api: GrimoireApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let paths = resolve_paths()?;

    // Config does not need the card collection.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&paths, *key, value.clone());
    }

    let mut ctx = init_context(&cli, paths)?;

    match cli.command {
        Some(Commands::List {
            domain,
            level,
            sort,
            hide_all,
        }) => handle_list(&mut ctx, domain, level, sort, hide_all),
        Some(Commands::Select { ids }) => handle_select(&mut ctx, ids),
        Some(Commands::Selected) => handle_selected(&ctx),
        Some(Commands::Reset) => handle_reset(&mut ctx),
        Some(Commands::Filters) => handle_filters(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&mut ctx, None, None, SortMode::default(), false),
    }
}

fn resolve_paths() -> Result<GrimoirePaths> {
    let data_dir = match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => ProjectDirs::from("com", "grimoire", "grimoire")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                GrimoireError::Config(format!(
                    "Could not determine a data directory; set {}",
                    HOME_ENV
                ))
            })?,
    };
    Ok(GrimoirePaths { data_dir })
}

fn init_context(cli: &Cli, paths: GrimoirePaths) -> Result<AppContext> {
    let config = GrimoireConfig::load(&paths.data_dir)?;

    let cards_path = cli
        .cards
        .clone()
        .or_else(|| std::env::var_os(CARDS_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(&config.cards_file));
    tracing::debug!(data_dir = %paths.data_dir.display(), cards = %cards_path.display(), "session paths");

    let store = FileStore::new(paths.data_dir.clone());
    let catalog = Catalog::with_key(store, config.selection_key.clone());
    let mut api = GrimoireApi::new(catalog, paths);
    api.load(&FileSource::new(cards_path))?;

    Ok(AppContext { api })
}

fn handle_list(
    ctx: &mut AppContext,
    domain: Option<String>,
    level: Option<String>,
    sort: SortMode,
    hide_all: bool,
) -> Result<()> {
    let mut events = Vec::new();
    if let Some(domain) = domain {
        events.push(Event::DomainFilterChanged(domain));
    }
    if let Some(level) = level {
        events.push(Event::LevelFilterChanged(level));
    }
    if hide_all {
        events.push(Event::ToggleVisibility);
    }

    let mut result = ctx.api.dispatch(Event::SortChanged(sort))?;
    for event in events {
        result = ctx.api.dispatch(event)?;
    }

    if let Some(projection) = &result.projection {
        print_projection(projection);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_select(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_many(&ids)?;
    print_messages(&result.messages);
    if let Some(projection) = &result.projection {
        println!();
        print_selected(projection);
    }
    Ok(())
}

fn handle_selected(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.project()?;
    if let Some(projection) = &result.projection {
        print_selected(projection);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.dispatch(Event::ResetSelection)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_filters(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.project()?;
    if let Some(projection) = &result.projection {
        print_filters(projection);
    }
    Ok(())
}

fn handle_config(paths: &GrimoirePaths, key: Option<ConfigKey>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::Show,
        (Some(key), None) => ConfigAction::Get(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = grimoire::commands::config::run(paths, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
