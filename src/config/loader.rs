use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::AppConfig;

const CONFIG_DIR: &str = "lazytodo";
const CONFIG_FILE: &str = "config.toml";

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Parse a config document. Missing tables and keys fall back to defaults.
pub fn parse(content: &str) -> color_eyre::Result<AppConfig> {
    Ok(toml::from_str(content)?)
}

pub fn load() -> color_eyre::Result<AppConfig> {
    let Some(path) = config_path() else {
        debug!("No config directory found, using defaults");
        return Ok(AppConfig::default());
    };
    load_from(&path)
}

fn load_from(path: &Path) -> color_eyre::Result<AppConfig> {
    if !path.exists() {
        debug!(?path, "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config = parse(&content)?;
    debug!(?path, "Loaded config");
    Ok(config)
}

fn save_to(path: &Path, config: &AppConfig) -> color_eyre::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    debug!(?path, "Saved config");
    Ok(())
}

/// Remember the chosen theme for the next session.
pub fn save_theme(theme_name: &str) -> color_eyre::Result<()> {
    let Some(path) = config_path() else {
        warn!("Could not determine config directory");
        return Ok(());
    };
    save_theme_to(&path, theme_name)
}

/// Rewrite the theme name, keeping the rest of the file. An unreadable
/// config is reported instead of being replaced with defaults.
fn save_theme_to(path: &Path, theme_name: &str) -> color_eyre::Result<()> {
    let mut config = load_from(path)?;
    config.theme.name = theme_name.to_string();
    save_to(path, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.theme.name, "Catppuccin Mocha");
        assert_eq!(config.keybindings.global.quit.display(), "q");
    }

    #[test]
    fn test_partial_keybindings() {
        let config = parse(
            r#"
            [theme]
            name = "Material"

            [keybindings.counter]
            increment = "k"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.name, "Material");
        let k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert!(config.keybindings.counter.increment.matches(&k));
        assert_eq!(config.keybindings.counter.decrement.display(), "-/Down");
        assert_eq!(config.keybindings.todos.delete.display(), "d/Delete");
    }

    #[test]
    fn test_list_binding() {
        let config = parse(
            r#"
            [keybindings.todos]
            delete = ["x", "ctrl+d"]
            "#,
        )
        .unwrap();
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert!(config.keybindings.todos.delete.matches(&ctrl_d));
    }

    #[test]
    fn test_invalid_key_is_an_error() {
        assert!(parse("[keybindings.global]\nquit = \"hyper+q\"").is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.theme.name, config.theme.name);
        assert_eq!(
            parsed.keybindings.counter.increment,
            config.keybindings.counter.increment
        );
    }

    #[test]
    fn test_save_theme_keeps_custom_keybindings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[keybindings.global]\nquit = \"x\"\n").unwrap();

        save_theme_to(&path, "Catppuccin Latte").unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.theme.name, "Catppuccin Latte");
        assert_eq!(config.keybindings.global.quit.display(), "x");
    }

    #[test]
    fn test_save_theme_refuses_to_overwrite_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let malformed = "[keybindings.global]\nquit = \"x\"\n[theme\nname = \"Material\"\n";
        fs::write(&path, malformed).unwrap();

        assert!(save_theme_to(&path, "Catppuccin Latte").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), malformed);
    }

    #[test]
    fn test_save_theme_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lazytodo").join(CONFIG_FILE);

        save_theme_to(&path, "Material").unwrap();

        assert_eq!(load_from(&path).unwrap().theme.name, "Material");
    }
}
