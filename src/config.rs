use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// List every symbol in the launcher's root catalog instead of a single
    /// "Symbol:" entry that has to be opened first. Default: false.
    #[serde(default)]
    pub display_items_in_root: bool,
}

// ── Settings file ─────────────────────────────────────────────────────────────

/// On-disk layout: plugin settings live under `[main]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    main: Settings,
}

impl Settings {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(raw).context("Failed to parse plugin settings")?;
        Ok(file.main)
    }

    /// Load from disk, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file at {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("Failed to parse settings file at {}", path.display()))
    }
}

/// Write the commented default settings file (only if it doesn't exist).
pub fn write_default_if_missing(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_SETTINGS_TOML)?;
    Ok(path.to_path_buf())
}

// ── Default settings template ─────────────────────────────────────────────────

pub const DEFAULT_SETTINGS_TOML: &str = r#"# Symbols plugin settings

[main]
# List every symbol directly in the launcher catalog.
# When false, type "Symbol:" (or start with "symbol" / "smbl") to search.
display_items_in_root = false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        assert!(!Settings::default().display_items_in_root);
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
        assert_eq!(Settings::from_toml_str("[main]").unwrap(), Settings::default());
    }

    #[test]
    fn test_template_parses_to_defaults() {
        assert_eq!(Settings::from_toml_str(DEFAULT_SETTINGS_TOML).unwrap(), Settings::default());
    }

    #[test]
    fn test_display_items_in_root() {
        let settings = Settings::from_toml_str("[main]\ndisplay_items_in_root = true\n").unwrap();
        assert!(settings.display_items_in_root);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(Settings::from_toml_str("[main]\ndisplay_items_in_root = \"yes\"\n").is_err());
        assert!(Settings::from_toml_str("[main\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("symbols.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_write_default_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plugins").join("symbols.toml");

        let written = write_default_if_missing(&path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS_TOML);

        fs::write(&path, "[main]\ndisplay_items_in_root = true\n").unwrap();
        write_default_if_missing(&path).unwrap();
        assert!(Settings::load(&path).unwrap().display_items_in_root);
    }
}
