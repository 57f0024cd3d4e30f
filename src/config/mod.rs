//! Site configuration.
//!
//! Configuration is read from three tiers and merged field by field:
//! 1. **Defaults** - `Config::default()`
//! 2. **Project** - `$CWD/seo-meta/config.yaml`
//! 3. **User** - `~/.seo-meta/config.yaml`
//!
//! followed by environment overrides.
//!
//! ## Environment Variables
//! - `SEO_META_CONFIG_PATH` - Explicit config file (replaces project and user tiers)
//! - `SEO_META_PROJECT_DIR` - Project config dir (default: `./seo-meta`)
//! - `SEO_META_USER_DIR` - User config dir (default: `~/.seo-meta`)
//! - `SEO_META_TITLE` - Default page title
//! - `SEO_META_SITE_URL` - Default canonical URL
//! - `SEO_META_NO_INDEX` - `true`/`1` to mark every page noindex
//! - `SEO_META_FORMAT` - `html` or `json` output

mod loader;
mod types;

pub use loader::{ConfigLoader, ConfigPaths, ConfigTier, apply_env_overrides, read_yaml_value};
pub use types::{Config, RenderConfig};
