use clap::{Parser, Subcommand};
use grimoire::config::ConfigKey;
use grimoire::view::SortMode;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GRIMOIRE_GIT_HASH");
    const COMMIT_DATE: &str = env!("GRIMOIRE_COMMIT_DATE");
    const IS_RELEASE: &str = env!("GRIMOIRE_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "grimoire", bin_name = "grimoire", version = get_version())]
#[command(about = "Browse a card catalog and keep your selection between sessions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Card collection to load (JSON array); overrides GRIMOIRE_CARDS and config
    #[arg(long, global = true, value_name = "PATH")]
    pub cards: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. info, grimoire=trace); overrides RUST_LOG and GRIMOIRE_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse cards not yet selected, followed by the selection
    #[command(alias = "ls")]
    List {
        /// Only cards of this domain (exact match)
        #[arg(short, long)]
        domain: Option<String>,

        /// Only cards of this level
        #[arg(short, long, allow_hyphen_values = true)]
        level: Option<String>,

        /// Ordering: level-asc, level-desc or title
        #[arg(short, long, default_value_t = SortMode::LevelAscending)]
        sort: SortMode,

        /// Hide the browse section, show only the selection
        #[arg(long)]
        hide_all: bool,
    },

    /// Select or deselect cards by id
    #[command(alias = "toggle", alias = "s")]
    Select {
        /// Card ids; each one flips between selected and not selected
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show the selected cards
    Selected,

    /// Deselect every card
    Reset,

    /// Show the domains and levels present in the catalog
    Filters,

    /// Get or set configuration
    Config {
        /// Configuration key (cards-file, selection-key)
        key: Option<ConfigKey>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
