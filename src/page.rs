//! Per-page metadata declaration.

use crate::config::read_yaml_value;
use crate::error::{SeoError, SeoResult};
use crate::merge::Merge;
use crate::store::SeoHandle;
use crate::types::{PartialSeoMetadata, SeoMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Metadata a page declares for itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSeo {
    pub seo: SeoMetadata,
    /// Merge over the store's current/default metadata instead of replacing it.
    #[serde(default)]
    pub merge: bool,
}

impl PageSeo {
    pub fn new(seo: SeoMetadata) -> Self {
        Self { seo, merge: false }
    }

    pub fn merged(mut self) -> Self {
        self.merge = true;
        self
    }

    /// Load a page file (YAML or JSON).
    ///
    /// The file is either `{seo: ..., merge: ...}` or bare metadata, which
    /// declares with `merge` off.
    pub fn from_file(path: &Path) -> SeoResult<Self> {
        let value = read_yaml_value(path)?;
        let is_wrapped = matches!(&value, Value::Object(map) if map.contains_key("seo"));
        let display = path.display().to_string();
        if is_wrapped {
            serde_json::from_value(value).map_err(|e| SeoError::parse(&display, e))
        } else {
            let seo = serde_json::from_value(value).map_err(|e| SeoError::parse(&display, e))?;
            Ok(Self::new(seo))
        }
    }

    /// Metadata this page would install, given the store's current state.
    pub fn resolve(&self, handle: &SeoHandle) -> SeoResult<SeoMetadata> {
        if self.merge {
            let base = handle.resolved()?;
            Ok(base.merge(&PartialSeoMetadata::from(self.seo.clone())))
        } else {
            Ok(self.seo.clone())
        }
    }

    /// Install this page's metadata in the store.
    ///
    /// The returned guard clears the current metadata when dropped, which is
    /// how a page "unmounts".
    pub fn declare(&self, handle: &SeoHandle) -> SeoResult<PageGuard> {
        let seo = self.resolve(handle)?;
        debug!(title = %seo.title, merge = self.merge, "Page SEO declared");
        handle.update_current_seo(seo)?;
        Ok(PageGuard {
            handle: Some(handle.clone()),
        })
    }
}

/// Clears the page's metadata from the store on drop.
#[derive(Debug)]
#[must_use = "dropping the guard immediately clears the page's metadata"]
pub struct PageGuard {
    handle: Option<SeoHandle>,
}

impl PageGuard {
    /// Leave the page's metadata installed after the guard goes away.
    pub fn keep(mut self) {
        self.handle = None;
    }
}

impl Drop for PageGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            // The provider may already be gone; nothing left to clear then.
            let _ = handle.clear_current_seo();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeoProvider;
    use crate::types::OpenGraphMetadata;

    fn defaults() -> SeoMetadata {
        SeoMetadata {
            description: Some("Site description".into()),
            open_graph: Some(OpenGraphMetadata {
                site_name: Some("Example".into()),
                ..Default::default()
            }),
            ..SeoMetadata::new("Site")
        }
    }

    #[test]
    fn test_declare_replaces_without_merge() {
        let provider = SeoProvider::new(defaults());
        let handle = provider.handle();

        let _guard = PageSeo::new(SeoMetadata::new("About")).declare(&handle).unwrap();

        let resolved = handle.resolved().unwrap();
        assert_eq!(resolved.title, "About");
        assert_eq!(resolved.description, None);
        assert_eq!(resolved.open_graph, None);
    }

    #[test]
    fn test_declare_merges_over_defaults() {
        let provider = SeoProvider::new(defaults());
        let handle = provider.handle();
        let page = SeoMetadata {
            open_graph: Some(OpenGraphMetadata {
                title: Some("About".into()),
                ..Default::default()
            }),
            ..SeoMetadata::new("About")
        };

        let _guard = PageSeo::new(page).merged().declare(&handle).unwrap();

        let resolved = handle.resolved().unwrap();
        assert_eq!(resolved.title, "About");
        assert_eq!(resolved.description.as_deref(), Some("Site description"));
        let og = resolved.open_graph.unwrap();
        assert_eq!(og.title.as_deref(), Some("About"));
        assert_eq!(og.site_name.as_deref(), Some("Example"));
    }

    #[test]
    fn test_guard_drop_clears_current() {
        let provider = SeoProvider::new(defaults());
        let handle = provider.handle();

        {
            let _guard = PageSeo::new(SeoMetadata::new("About")).declare(&handle).unwrap();
            assert_eq!(handle.resolved().unwrap().title, "About");
        }

        assert_eq!(handle.current_seo().unwrap(), None);
        assert_eq!(handle.resolved().unwrap().title, "Site");
    }

    #[test]
    fn test_keep_leaves_metadata_installed() {
        let provider = SeoProvider::new(defaults());
        let handle = provider.handle();

        PageSeo::new(SeoMetadata::new("About"))
            .declare(&handle)
            .unwrap()
            .keep();

        assert_eq!(handle.resolved().unwrap().title, "About");
    }

    #[test]
    fn test_guard_outliving_provider_does_not_panic() {
        let provider = SeoProvider::new(defaults());
        let guard = PageSeo::new(SeoMetadata::new("About"))
            .declare(&provider.handle())
            .unwrap();
        drop(provider);
        drop(guard);
    }

    #[test]
    fn test_from_file_bare_and_wrapped() {
        let temp = tempfile::TempDir::new().unwrap();
        let bare = temp.path().join("bare.yaml");
        std::fs::write(&bare, "title: Bare\nkeywords: a,b\n").unwrap();
        let wrapped = temp.path().join("wrapped.json");
        std::fs::write(&wrapped, r#"{"seo": {"title": "Wrapped"}, "merge": true}"#).unwrap();

        let page = PageSeo::from_file(&bare).unwrap();
        assert_eq!(page.seo.title, "Bare");
        assert_eq!(page.seo.keywords.as_deref(), Some("a,b"));
        assert!(!page.merge);

        let page = PageSeo::from_file(&wrapped).unwrap();
        assert_eq!(page.seo.title, "Wrapped");
        assert!(page.merge);
    }

    #[test]
    fn test_from_file_without_title_is_parse_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("page.yaml");
        std::fs::write(&path, "description: no title\n").unwrap();

        assert!(matches!(
            PageSeo::from_file(&path),
            Err(SeoError::Parse { .. })
        ));
    }

    #[test]
    fn test_declare_without_provider_fails() {
        let result = PageSeo::new(SeoMetadata::new("About")).declare(&SeoHandle::detached());
        assert!(result.is_err());
    }
}
