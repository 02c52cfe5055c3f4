//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `TEXTMETRICS_*` environment variables (`__` separates nested keys)
//! - Files passed with [`ConfigLoader::with_file`]
//! - `textmetrics.<ext>` in current directory or any parent
//! - `.textmetrics.<ext>` in current directory or any parent
//! - `~/.config/textmetrics/config.<ext>` (user config)
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use textmetrics_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::analysis::Tuning;
use crate::error::{ConfigError, ConfigResult};
use crate::stop_words::StopWordSet;

/// Stop-word customization.
///
/// Applied in order: start from the built-in English list (unless
/// `replace_defaults`), add words from `file`, add `extra`, drop `remove`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct StopWordsConfig {
    /// Additional stop words.
    pub extra: Vec<String>,
    /// Words to take out of the set.
    pub remove: Vec<String>,
    /// Word list file, one word per line. Relative to the config file.
    pub file: Option<Utf8PathBuf>,
    /// Start from an empty set instead of the built-in list.
    pub replace_defaults: bool,
}

impl StopWordsConfig {
    /// Build the stop-word set.
    ///
    /// Relative `file` paths are resolved against `base_dir` when given.
    pub fn build(&self, base_dir: Option<&Utf8Path>) -> ConfigResult<StopWordSet> {
        let mut set = if self.replace_defaults {
            StopWordSet::default()
        } else {
            StopWordSet::english()
        };

        if let Some(ref file_path) = self.file {
            let resolved = match base_dir {
                Some(dir) if file_path.is_relative() => dir.join(file_path),
                _ => file_path.clone(),
            };
            let content = std::fs::read_to_string(resolved.as_std_path()).map_err(|e| {
                ConfigError::StopWordsFile {
                    path: resolved,
                    source: e,
                }
            })?;
            let listed = StopWordSet::parse_list(&content);
            set = set.with_words(listed.sorted());
        }

        Ok(set.with_words(&self.extra).without_words(&self.remove))
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the JSON log file.
    pub log_level: LogLevel,
    /// Directory for JSONL log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Default target keyword for `analyze`.
    pub target_keyword: Option<String>,
    /// Default minimum reading-ease score for the `readability` gate.
    pub min_readability: Option<f64>,
    /// Maximum input size in bytes (default: 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Turn off the input size check entirely.
    #[serde(default)]
    pub disable_input_limit: bool,
    /// Stop-word customization.
    pub stop_words: StopWordsConfig,
    /// Analysis thresholds.
    pub tuning: Tuning,
}

impl Config {
    /// The input limit to enforce, or `None` when disabled.
    pub fn effective_max_input_bytes(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Debug level logging.
    Debug,
    /// Info level logging (default).
    #[default]
    Info,
    /// Warning level logging.
    Warn,
    /// Error level logging.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which configuration files were loaded.
///
/// Returned alongside [`Config`] by [`ConfigLoader::load`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project files from the closest directory, low to high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// The user config file, if found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit files, in the order given.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The highest-precedence file that was loaded.
    ///
    /// Relative paths inside the configuration resolve against its directory.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported config file extensions, lowest precedence first.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and project file names.
const APP_NAME: &str = "textmetrics";

/// Environment variable prefix.
const ENV_PREFIX: &str = "TEXTMETRICS_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Directory to start the project config search from.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include the user config file.
    include_user_config: bool,
    /// File or directory name that stops the upward search.
    boundary_marker: Option<String>,
    /// Explicit config files, highest file precedence.
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with user config enabled and a `.git` boundary.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Search for project config starting at `path` and walking up.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward search at a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Walk all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file. Later files override earlier ones.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`TEXTMETRICS_LOG_LEVEL`, `TEXTMETRICS_TUNING__LIMITS__TOP_KEYWORDS`)
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/textmetrics/config.<ext>`)
    /// 5. Default values
    ///
    /// Tuning thresholds are validated after merging.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        config.tuning.validate()?;

        tracing::info!(
            log_level = config.log_level.as_str(),
            primary = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Walk up from `start` to the closest directory holding any config
    /// file. Dotfiles come before regular files so the regular file wins.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();
            for stem in [format!(".{APP_NAME}"), APP_NAME.to_string()] {
                for ext in CONFIG_EXTENSIONS {
                    let candidate = dir.join(format!("{stem}.{ext}"));
                    if candidate.is_file() {
                        found.push(candidate);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // A config next to the marker still counts; checked above.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/textmetrics/` on Linux, `~/Library/Application Support/textmetrics/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path.to_path_buf()).unwrap()
    }

    fn load_file(path: &Utf8Path) -> ConfigResult<(Config, ConfigSources)> {
        ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_file(path)
            .load()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.target_keyword.is_none());
        assert_eq!(config.tuning, Tuning::default());
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            r#"log_level = "debug"
log_dir = "/tmp/textmetrics"
target_keyword = "cloud hosting"
"#,
        )
        .unwrap();

        let (config, sources) = load_file(&utf8(&config_path)).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/textmetrics")
        );
        assert_eq!(config.target_keyword.as_deref(), Some("cloud hosting"));
        assert_eq!(sources.primary_file(), Some(utf8(&config_path).as_path()));
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, "min_readability = 40.0\n").unwrap();
        let over = tmp.path().join("override.toml");
        fs::write(&over, "min_readability = 65.0\n").unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&base))
            .with_file(utf8(&over))
            .load()
            .unwrap();

        assert_eq!(config.min_readability, Some(65.0));
    }

    #[test]
    fn test_project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("content").join("blog");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(
            project_dir.join(".textmetrics.toml"),
            r#"log_level = "debug""#,
        )
        .unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(&sub_dir))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(parent.join(".textmetrics.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(utf8(&work))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn test_explicit_file_overrides_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".textmetrics.toml"), r#"log_level = "warn""#).unwrap();
        let over = tmp.path().join("override.toml");
        fs::write(&over, r#"log_level = "error""#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path()))
            .with_file(utf8(&over))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 1);
        assert_eq!(sources.primary_file(), Some(utf8(&over).as_path()));
    }

    #[test]
    fn dotfile_before_regular_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".textmetrics.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join("textmetrics.yaml"), "log_level: error\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path()))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join(".textmetrics.toml"), "target_keyword = \"seo\"\n").unwrap();
        fs::write(child.join("textmetrics.json"), r#"{"log_level": "warn"}"#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(&child))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.target_keyword.is_none());
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_or_error_succeeds_with_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, r#"log_level = "debug""#).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(&config_path))
            .load_or_error()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("textmetrics"));
        }
    }

    #[test]
    fn input_limit_defaults_and_overrides() {
        assert_eq!(
            Config::default().effective_max_input_bytes(),
            Some(crate::DEFAULT_MAX_INPUT_BYTES)
        );

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "max_input_bytes = 1024\n").unwrap();
        let (config, _) = load_file(&utf8(&config_path)).unwrap();
        assert_eq!(config.effective_max_input_bytes(), Some(1024));

        fs::write(
            &config_path,
            "max_input_bytes = 1024\ndisable_input_limit = true\n",
        )
        .unwrap();
        let (config, _) = load_file(&utf8(&config_path)).unwrap();
        assert!(config.disable_input_limit);
        assert_eq!(config.effective_max_input_bytes(), None);
    }

    #[test]
    fn tuning_from_yaml_keeps_unspecified_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        fs::write(
            &config_path,
            "tuning:\n  keyword_density:\n    stuffing: 6.0\n  recommendations:\n    min_words: 500\n",
        )
        .unwrap();

        let (config, _) = load_file(&utf8(&config_path)).unwrap();
        assert_eq!(config.tuning.keyword_density.stuffing, 6.0);
        assert_eq!(config.tuning.keyword_density.high, 3.0);
        assert_eq!(config.tuning.recommendations.min_words, 500);
        assert_eq!(config.tuning.limits.top_phrases, 15);
    }

    #[test]
    fn invalid_tuning_is_rejected_on_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            "[tuning.keyword_density]\nlow = 4.0\nhigh = 3.0\n",
        )
        .unwrap();

        let err = load_file(&utf8(&config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTuning(_)));
    }

    #[test]
    fn malformed_file_is_a_deserialize_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "max_input_bytes = \"lots\"\n").unwrap();

        let err = load_file(&utf8(&config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }

    #[test]
    fn stop_words_config_from_yaml() {
        let yaml = r#"
stop_words:
  extra: ["acme", "Widget"]
  remove: ["about"]
  file: "stopwords.txt"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.stop_words.extra, vec!["acme", "Widget"]);
        assert_eq!(config.stop_words.remove, vec!["about"]);
        assert_eq!(
            config.stop_words.file.as_ref().map(|f| f.as_str()),
            Some("stopwords.txt")
        );
        assert!(!config.stop_words.replace_defaults);
    }

    #[test]
    fn stop_words_build_defaults() {
        let set = StopWordsConfig::default().build(None).unwrap();
        assert_eq!(set, StopWordSet::english());
    }

    #[test]
    fn stop_words_build_extra_and_remove() {
        let cfg = StopWordsConfig {
            extra: vec!["Acme".to_string()],
            remove: vec!["about".to_string()],
            ..Default::default()
        };
        let set = cfg.build(None).unwrap();
        assert!(set.contains("acme"));
        assert!(!set.contains("about"));
        assert!(set.contains("the"));
    }

    #[test]
    fn stop_words_file_resolves_relative_to_base_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("words.txt"), "# brand names\nacme\nwidgetco\n").unwrap();

        let cfg = StopWordsConfig {
            file: Some(Utf8PathBuf::from("words.txt")),
            replace_defaults: true,
            ..Default::default()
        };
        let set = cfg.build(Some(&utf8(tmp.path()))).unwrap();
        assert_eq!(set.sorted(), vec!["acme", "widgetco"]);
    }

    #[test]
    fn stop_words_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let cfg = StopWordsConfig {
            file: Some(Utf8PathBuf::from("missing.txt")),
            ..Default::default()
        };
        let err = cfg.build(Some(&utf8(tmp.path()))).unwrap_err();
        match err {
            ConfigError::StopWordsFile { path, .. } => {
                assert!(path.as_str().ends_with("missing.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "[tuning.flesch]\nbase = 190.0\n").unwrap();

        // SAFETY: Test environment, mutex serializes env access across tests.
        unsafe {
            std::env::set_var("TEXTMETRICS_TUNING__FLESCH__BASE", "200.5");
        }

        let (config, _sources) = load_file(&utf8(&config_path)).unwrap();
        assert_eq!(config.tuning.flesch.base, 200.5);

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("TEXTMETRICS_TUNING__FLESCH__BASE");
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_sets_nested_tuning() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: Test environment, mutex serializes env access across tests.
        unsafe {
            std::env::set_var("TEXTMETRICS_TUNING__LIMITS__TOP_KEYWORDS", "7");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.tuning.limits.top_keywords, 7);

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("TEXTMETRICS_TUNING__LIMITS__TOP_KEYWORDS");
        }
    }
}
