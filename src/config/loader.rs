//! Configuration loader with tier-based merging.

use super::types::Config;
use crate::error::{SeoError, SeoResult};
use crate::format::OutputFormat;
use crate::merge::deep_merge_all;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "config.yaml";

/// Configuration tier priority (lowest to highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    Defaults = 0,
    Project = 1,
    User = 2,
    Environment = 3,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Defaults => write!(f, "defaults"),
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Environment => write!(f, "environment"),
        }
    }
}

/// Directories searched for `config.yaml`.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub project_dir: Option<PathBuf>,
    pub user_dir: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// Discover configuration paths from environment and defaults.
    pub fn discover() -> Self {
        let user_dir = std::env::var("SEO_META_USER_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".seo-meta")));

        let project_dir = std::env::var("SEO_META_PROJECT_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from("seo-meta")));

        Self {
            project_dir,
            user_dir,
        }
    }

    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            user_dir,
        }
    }

    fn tier_files(&self) -> Vec<(ConfigTier, PathBuf)> {
        let mut files = Vec::new();
        if let Some(ref dir) = self.project_dir {
            files.push((ConfigTier::Project, dir.join(CONFIG_FILE)));
        }
        if let Some(ref dir) = self.user_dir {
            files.push((ConfigTier::User, dir.join(CONFIG_FILE)));
        }
        files
    }
}

/// Read a YAML (or JSON) file into a JSON value.
pub fn read_yaml_value(path: &Path) -> SeoResult<Value> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| SeoError::io(&display, e))?;
    serde_yaml::from_str::<Value>(&content).map_err(|e| SeoError::parse(&display, e))
}

/// Configuration loader that handles tier-based merging.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    pub paths: ConfigPaths,
    config: Config,
    /// Files that contributed to the configuration, lowest tier first.
    sources: Vec<(ConfigTier, PathBuf)>,
}

impl ConfigLoader {
    /// Load configuration from all tiers with proper merging.
    pub fn load() -> SeoResult<Self> {
        Self::load_with_paths(ConfigPaths::discover())
    }

    /// Load configuration with explicit paths.
    ///
    /// `SEO_META_CONFIG_PATH`, when set, replaces the project and user tiers.
    pub fn load_with_paths(paths: ConfigPaths) -> SeoResult<Self> {
        let explicit = std::env::var("SEO_META_CONFIG_PATH").ok().map(PathBuf::from);
        Self::load_from(paths, explicit)
    }

    /// Load from tiers (or an explicit file) and apply environment overrides.
    pub fn load_from(paths: ConfigPaths, explicit: Option<PathBuf>) -> SeoResult<Self> {
        let mut loader = Self::load_tiers(paths, explicit)?;
        apply_env_overrides(&mut loader.config, |key| std::env::var(key).ok());
        Ok(loader)
    }

    /// Merge defaults with the tier files, without environment overrides.
    ///
    /// An explicit file must exist and parse; tier files that are missing
    /// or malformed are skipped.
    pub fn load_tiers(paths: ConfigPaths, explicit: Option<PathBuf>) -> SeoResult<Self> {
        let mut configs: Vec<Value> = Vec::new();
        let mut sources = Vec::new();

        let defaults =
            serde_json::to_value(Config::default()).map_err(|e| SeoError::parse("defaults", e))?;
        configs.push(defaults);

        if let Some(path) = explicit {
            configs.push(read_yaml_value(&path)?);
            sources.push((ConfigTier::User, path));
        } else {
            for (tier, path) in paths.tier_files() {
                if !path.exists() {
                    continue;
                }
                match read_yaml_value(&path) {
                    Ok(value) => {
                        debug!(tier = %tier, path = %path.display(), "Loaded config tier");
                        configs.push(value);
                        sources.push((tier, path));
                    }
                    Err(e) => {
                        warn!(tier = %tier, error = %e, "Skipping unreadable config file");
                    }
                }
            }
        }

        let merged = deep_merge_all(configs);
        let config: Config =
            serde_json::from_value(merged).map_err(|e| SeoError::parse("merged config", e))?;

        Ok(Self {
            paths,
            config,
            sources,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Files that were merged, lowest tier first.
    pub fn sources(&self) -> &[(ConfigTier, PathBuf)] {
        &self.sources
    }
}

/// Apply `SEO_META_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(title) = lookup("SEO_META_TITLE") {
        config.seo.title = title;
    }

    if let Some(url) = lookup("SEO_META_SITE_URL") {
        config.seo.canonical = Some(url);
    }

    if let Some(no_index) = lookup("SEO_META_NO_INDEX") {
        match no_index.to_lowercase().as_str() {
            "1" | "true" | "yes" => config.seo.no_index = Some(true),
            "0" | "false" | "no" => config.seo.no_index = Some(false),
            other => warn!(value = %other, "Ignoring invalid SEO_META_NO_INDEX"),
        }
    }

    if let Some(format) = lookup("SEO_META_FORMAT") {
        match OutputFormat::from_str(&format) {
            Some(format) => config.render.format = format,
            None => warn!(value = %format, "Ignoring invalid SEO_META_FORMAT"),
        }
    }
}
