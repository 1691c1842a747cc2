use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parse::{Parser, SequentialIds, UuidIds};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub continuation_prompt: String,
    /// History file for the interactive editor. `~` is expanded.
    #[serde(default)]
    pub history_file: String,
    #[serde(default)]
    pub history_size: usize,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default)]
    pub log_level: String,
    /// Directory holding `mmsh.log`. `~` is expanded.
    #[serde(default)]
    pub log_dir: String,
    #[serde(default)]
    pub id_scheme: IdScheme,
}

/// How command identifiers are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Uuid,
    Sequential,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Drop operator entities and empty fragments from printed results.
    #[serde(default)]
    pub real_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Pretty,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    output: OutputOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    prompt: Option<String>,
    continuation_prompt: Option<String>,
    history_file: Option<String>,
    history_size: Option<usize>,
    log_level: Option<String>,
    log_dir: Option<String>,
    id_scheme: Option<IdScheme>,
}

#[derive(Debug, Deserialize, Default)]
struct OutputOverlay {
    format: Option<OutputFormat>,
    real_only: Option<bool>,
}

/// Overwrite `base` when the overlay sets a value.
fn merge_scalar<T>(base: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *base = v;
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/mmsh/config.toml (if exists)
    ///
    /// Every key the user sets overrides the default; the rest stay.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/mmsh/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/mmsh/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                log::warn!("config parse error: {e}");
                eprintln!("mmsh: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        merge_scalar(&mut self.settings.prompt, s.prompt);
        merge_scalar(&mut self.settings.continuation_prompt, s.continuation_prompt);
        merge_scalar(&mut self.settings.history_file, s.history_file);
        merge_scalar(&mut self.settings.history_size, s.history_size);
        merge_scalar(&mut self.settings.log_level, s.log_level);
        merge_scalar(&mut self.settings.log_dir, s.log_dir);
        merge_scalar(&mut self.settings.id_scheme, s.id_scheme);

        let o = overlay.output;
        merge_scalar(&mut self.output.format, o.format);
        merge_scalar(&mut self.output.real_only, o.real_only);
    }

    /// Render the merged configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Parser using the configured identifier scheme.
    pub fn parser(&self) -> Parser {
        match self.settings.id_scheme {
            IdScheme::Uuid => Parser::with_ids(UuidIds),
            IdScheme::Sequential => Parser::with_ids(SequentialIds::default()),
        }
    }

    /// Expanded history file path.
    pub fn history_path(&self) -> PathBuf {
        expand_path(&self.settings.history_file)
    }

    /// Expanded log directory.
    pub fn log_dir(&self) -> PathBuf {
        expand_path(&self.settings.log_dir)
    }

    /// Configured log level; unrecognized values fall back to `info`.
    pub fn log_level(&self) -> log::LevelFilter {
        self.settings
            .log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert_eq!(config.settings.prompt, "mmsh>");
        assert_eq!(config.settings.continuation_prompt, ">");
        assert_eq!(config.settings.history_size, 1000);
        assert_eq!(config.settings.id_scheme, IdScheme::Uuid);
        assert_eq!(config.output.format, OutputFormat::Pretty);
        assert!(!config.output.real_only);
    }

    #[test]
    fn default_log_level_is_info() {
        let config = Config::default_config();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn bad_log_level_falls_back() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            log_level = "chatty"
        "#,
        );
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn overlay_overrides_scalars() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            prompt = "$"
            log_level = "debug"
            id_scheme = "sequential"

            [output]
            format = "json"
        "#,
        );
        assert_eq!(config.settings.prompt, "$");
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        assert_eq!(config.settings.id_scheme, IdScheme::Sequential);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn overlay_omitted_settings_unchanged() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [output]
            real_only = true
        "#,
        );
        assert!(config.output.real_only);
        assert_eq!(config.settings.prompt, "mmsh>");
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let mut config = Config::default_config();
        config.apply_overlay_str("");
        assert_eq!(config.settings.prompt, "mmsh>");
        assert_eq!(config.output.format, OutputFormat::Pretty);
    }

    #[test]
    fn sequential_scheme_gives_sequential_ids() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            id_scheme = "sequential"
        "#,
        );
        let cmds = config.parser().parse("a | b").unwrap();
        assert_eq!(cmds[2].input.as_deref(), Some("cmd-1"));
    }

    #[test]
    fn history_path_expands_tilde() {
        let config = Config::default_config();
        let path = config.history_path();
        assert!(path.ends_with(".local/share/mmsh/history"));
        if std::env::var_os("HOME").is_some() {
            assert!(!path.starts_with("~"));
        }
    }

    #[test]
    fn dump_round_trips() {
        let config = Config::default_config();
        let text = config.to_toml().unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.settings.prompt, config.settings.prompt);
        assert_eq!(back.output.format, config.output.format);
    }
}
