//! Configuration types.

use crate::format::OutputFormat;
use crate::types::SeoMetadata;
use serde::{Deserialize, Serialize};

/// Site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide default metadata, used to seed the store.
    #[serde(default)]
    pub seo: SeoMetadata,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Rendering defaults for the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Merge pages over the defaults unless told otherwise.
    #[serde(default)]
    pub merge: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.format, OutputFormat::Html);
        assert!(!config.render.merge);
    }

    #[test]
    fn test_yaml_camel_case_seo() {
        let config: Config = serde_yaml::from_str(
            r#"
seo:
  title: Example
  noFollow: true
  twitter:
    site: "@example"
render:
  format: json
"#,
        )
        .unwrap();
        assert_eq!(config.seo.title, "Example");
        assert_eq!(config.seo.no_follow, Some(true));
        assert_eq!(
            config.seo.twitter.unwrap().site.as_deref(),
            Some("@example")
        );
        assert_eq!(config.render.format, OutputFormat::Json);
    }
}
