use crate::commands::{CmdMessage, CmdResult, GrimoirePaths};
use crate::config::{ConfigKey, GrimoireConfig};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Every entry, carried in `CmdResult::config`.
    Show,
    /// One entry's value as an info message.
    Get(ConfigKey),
    /// Validate, save, and echo the stored value.
    Set(ConfigKey, String),
}

/// Reads or updates `config.json` in the data directory. The resulting
/// configuration is always returned, so a client can re-render it.
pub fn run(paths: &GrimoirePaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = GrimoireConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::Show => {}
        ConfigAction::Get(key) => {
            result.add_message(CmdMessage::info(config.get(key)));
        }
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(&paths.data_dir)?;
            tracing::info!(%key, value = config.get(key), "config saved");
            result.add_message(CmdMessage::success(format!(
                "Saved {} = {}",
                key,
                config.get(key)
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrimoireError;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> GrimoirePaths {
        GrimoirePaths {
            data_dir: temp.path().to_path_buf(),
        }
    }

    #[test]
    fn show_returns_defaults_without_writing() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::Show).unwrap();
        assert_eq!(result.config, Some(GrimoireConfig::default()));
        assert!(result.messages.is_empty());
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn set_saves_trimmed_value() {
        let temp = TempDir::new().unwrap();
        let p = paths(&temp);
        let result = run(&p, ConfigAction::Set(ConfigKey::CardsFile, " deck.json ".into())).unwrap();
        assert_eq!(result.messages[0].content, "Saved cards-file = deck.json");

        let result = run(&p, ConfigAction::Get(ConfigKey::CardsFile)).unwrap();
        assert_eq!(result.messages[0].content, "deck.json");
        assert_eq!(result.config.unwrap().cards_file, "deck.json");
    }

    #[test]
    fn blank_value_is_rejected_and_nothing_saved() {
        let temp = TempDir::new().unwrap();
        let err = run(&paths(&temp), ConfigAction::Set(ConfigKey::SelectionKey, "".into()))
            .unwrap_err();
        assert!(matches!(err, GrimoireError::Config(_)));
        assert!(!temp.path().join("config.json").exists());
    }
}
