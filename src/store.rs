//! Metadata store scoped to a provider.
//!
//! [`SeoProvider`] owns the default and current-page metadata for as long as
//! it lives. Consumers get an [`SeoHandle`], which only holds a weak
//! reference: once the provider is dropped every handle operation fails with
//! [`SeoError::Configuration`].
//!
//! The store is single-threaded; state changes happen on the thread that
//! renders pages, so there is no locking.

use crate::error::{SeoError, SeoResult};
use crate::types::SeoMetadata;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

#[derive(Debug)]
struct SeoState {
    default_seo: SeoMetadata,
    current_seo: Option<SeoMetadata>,
}

/// Owner of the metadata state for a subtree of pages.
#[derive(Debug)]
pub struct SeoProvider {
    state: Rc<RefCell<SeoState>>,
}

impl SeoProvider {
    /// Create a provider seeded with site-wide defaults.
    pub fn new(default_seo: SeoMetadata) -> Self {
        debug!(title = %default_seo.title, "SEO provider initialized");
        Self {
            state: Rc::new(RefCell::new(SeoState {
                default_seo,
                current_seo: None,
            })),
        }
    }

    /// A handle for consumers below this provider.
    pub fn handle(&self) -> SeoHandle {
        SeoHandle {
            state: Rc::downgrade(&self.state),
        }
    }
}

/// Access to a provider's metadata.
#[derive(Debug, Clone, Default)]
pub struct SeoHandle {
    state: Weak<RefCell<SeoState>>,
}

impl SeoHandle {
    /// A handle with no provider behind it. Every operation fails.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether the provider behind this handle is still alive.
    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }

    fn state(&self) -> SeoResult<Rc<RefCell<SeoState>>> {
        self.state.upgrade().ok_or_else(SeoError::no_provider)
    }

    pub fn default_seo(&self) -> SeoResult<SeoMetadata> {
        Ok(self.state()?.borrow().default_seo.clone())
    }

    pub fn current_seo(&self) -> SeoResult<Option<SeoMetadata>> {
        Ok(self.state()?.borrow().current_seo.clone())
    }

    /// The current page's metadata, falling back to the defaults.
    pub fn resolved(&self) -> SeoResult<SeoMetadata> {
        let state = self.state()?;
        let state = state.borrow();
        Ok(state
            .current_seo
            .clone()
            .unwrap_or_else(|| state.default_seo.clone()))
    }

    /// Replace the current page's metadata. This does not merge; callers
    /// wanting defaults folded in merge before calling.
    pub fn update_current_seo(&self, seo: SeoMetadata) -> SeoResult<()> {
        let state = self.state()?;
        debug!(title = %seo.title, "Current page SEO updated");
        state.borrow_mut().current_seo = Some(seo);
        Ok(())
    }

    /// Reset the current page's metadata so the defaults apply again.
    pub fn clear_current_seo(&self) -> SeoResult<()> {
        let state = self.state()?;
        debug!("Current page SEO cleared");
        state.borrow_mut().current_seo = None;
        Ok(())
    }
}
