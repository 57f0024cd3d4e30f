//! SEO metadata for web pages.
//!
//! Declare site-wide defaults and per-page metadata (title, description,
//! Open Graph, Twitter cards, JSON-LD, robots directives) and turn it into
//! document head elements.
//!
//! ```
//! use seo_meta::{PageSeo, SeoHead, SeoMetadata, SeoProvider};
//!
//! let mut defaults = SeoMetadata::new("Example");
//! defaults.description = Some("An example site".into());
//! let provider = SeoProvider::new(defaults);
//!
//! let _page = PageSeo::new(SeoMetadata::new("About"))
//!     .merged()
//!     .declare(&provider.handle())
//!     .unwrap();
//!
//! let head = SeoHead::new(provider.handle()).render().unwrap();
//! assert_eq!(head.title(), Some("About"));
//! assert_eq!(head.meta_tags().count(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod head;
pub mod logging;
pub mod merge;
pub mod page;
pub mod store;
pub mod tags;
pub mod types;

pub use error::{ErrorCode, SeoError, SeoResult};
pub use head::{Head, HeadElement, SeoHead, render_head};
pub use merge::{Merge, deep_merge};
pub use page::{PageGuard, PageSeo};
pub use store::{SeoHandle, SeoProvider};
pub use tags::{format_json_ld, format_open_graph_image, generate_meta_tags};
pub use types::*;
