//! Render and tags subcommands.
//!
//! A page file is declared against a provider seeded with the configured
//! defaults, then the head is rendered from the store.

use super::FormatArg;
use crate::config::Config;
use crate::format::{OutputFormat, format_head_html, format_head_json};
use crate::head::{Head, SeoHead};
use crate::page::PageSeo;
use crate::store::SeoProvider;
use crate::types::MetaTag;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments for the render subcommand
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page metadata file (YAML or JSON)
    #[arg(value_name = "PAGE")]
    pub page: PathBuf,

    #[command(flatten)]
    pub merge: MergeFlags,

    /// Output format (default from config, then html)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for the tags subcommand
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Page metadata file (YAML or JSON)
    #[arg(value_name = "PAGE")]
    pub page: PathBuf,

    #[command(flatten)]
    pub merge: MergeFlags,
}

/// `--merge` / `--no-merge`; the last one given wins.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeFlags {
    /// Merge the page over the site defaults instead of replacing them
    #[arg(long, overrides_with = "no_merge")]
    pub merge: bool,

    /// Replace the site defaults even if the page file or config asks to merge
    #[arg(long, overrides_with = "merge")]
    pub no_merge: bool,
}

impl MergeFlags {
    pub fn merge() -> Self {
        Self {
            merge: true,
            no_merge: false,
        }
    }

    pub fn no_merge() -> Self {
        Self {
            merge: false,
            no_merge: true,
        }
    }

    /// The explicit choice, or `None` when neither flag was given.
    pub fn choice(&self) -> Option<bool> {
        if self.no_merge {
            Some(false)
        } else if self.merge {
            Some(true)
        } else {
            None
        }
    }
}

/// Declare a page file against the configured defaults and render the head.
///
/// An explicit flag decides the merge mode; otherwise the page is merged when
/// the page file or the config asks for it.
fn render_page(config: &Config, path: &Path, flags: MergeFlags) -> Result<Head> {
    let mut page =
        PageSeo::from_file(path).with_context(|| format!("loading page {}", path.display()))?;
    page.merge = flags.choice().unwrap_or(page.merge || config.render.merge);

    let provider = SeoProvider::new(config.seo.clone());
    let handle = provider.handle();
    let _guard = page.declare(&handle)?;
    Ok(SeoHead::new(handle).render()?)
}

/// Run `render`, returning the text to print.
pub fn run_render(config: &Config, args: &RenderArgs) -> Result<String> {
    let head = render_page(config, &args.page, args.merge)?;

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.render.format);
    info!(
        page = %args.page.display(),
        format = format.as_str(),
        elements = head.elements.len(),
        "Rendered head"
    );

    match format {
        OutputFormat::Html => Ok(format_head_html(&head)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&format_head_json(&head)?)?),
    }
}

/// Run `tags`, returning pretty JSON.
pub fn run_tags(config: &Config, args: &TagsArgs) -> Result<String> {
    let head = render_page(config, &args.page, args.merge)?;
    let tags: Vec<&MetaTag> = head.meta_tags().collect();
    Ok(serde_json::to_string_pretty(&tags)?)
}

/// Run `config`, returning YAML.
pub fn run_config(config: &Config) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}
