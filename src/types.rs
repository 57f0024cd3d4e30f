//! Core metadata types.
//!
//! Field names serialize in camelCase so page and config files use the same
//! shape web applications already write (`openGraph`, `noIndex`, ...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// SEO metadata for a page, or the site-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    /// The title of the page.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The canonical URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraphMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterMetadata>,
    /// Extra tags appended after all generated ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_meta_tags: Option<Vec<MetaTag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<JsonLd>,
    /// Language of the page (`lang` attribute of the document).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_follow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl SeoMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Deep-partial of [`SeoMetadata`]: every field may be left unspecified.
///
/// Nested Open Graph and Twitter shapes are already all-optional, so they
/// act as their own partials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSeoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraphMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_meta_tags: Option<Vec<MetaTag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<JsonLd>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_follow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl From<SeoMetadata> for PartialSeoMetadata {
    fn from(seo: SeoMetadata) -> Self {
        Self {
            title: Some(seo.title),
            description: seo.description,
            canonical: seo.canonical,
            open_graph: seo.open_graph,
            twitter: seo.twitter,
            additional_meta_tags: seo.additional_meta_tags,
            json_ld: seo.json_ld,
            language: seo.language,
            no_index: seo.no_index,
            no_follow: seo.no_follow,
            keywords: seo.keywords,
        }
    }
}

/// Open Graph metadata (`og:*` tags).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub og_type: Option<OpenGraphType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<OpenGraphImages>,
}

/// Open Graph object type. Unknown types are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OpenGraphType {
    Website,
    Article,
    Profile,
    Book,
    Music,
    Other(String),
}

impl OpenGraphType {
    pub fn as_str(&self) -> &str {
        match self {
            OpenGraphType::Website => "website",
            OpenGraphType::Article => "article",
            OpenGraphType::Profile => "profile",
            OpenGraphType::Book => "book",
            OpenGraphType::Music => "music",
            OpenGraphType::Other(other) => other,
        }
    }
}

impl From<String> for OpenGraphType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "website" => OpenGraphType::Website,
            "article" => OpenGraphType::Article,
            "profile" => OpenGraphType::Profile,
            "book" => OpenGraphType::Book,
            "music" => OpenGraphType::Music,
            _ => OpenGraphType::Other(s),
        }
    }
}

impl From<&str> for OpenGraphType {
    fn from(s: &str) -> Self {
        OpenGraphType::from(s.to_string())
    }
}

impl From<OpenGraphType> for String {
    fn from(t: OpenGraphType) -> Self {
        match t {
            OpenGraphType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OpenGraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single Open Graph image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// MIME type, e.g. `image/png`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
}

impl OpenGraphImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
            width: None,
            height: None,
            image_type: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_type(mut self, image_type: impl Into<String>) -> Self {
        self.image_type = Some(image_type.into());
        self
    }
}

/// One image or an ordered list of images.
///
/// On the wire this is either an object or an array of objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenGraphImages {
    Single(OpenGraphImage),
    Many(Vec<OpenGraphImage>),
}

impl OpenGraphImages {
    /// View the images as a slice, in declaration order.
    pub fn as_slice(&self) -> &[OpenGraphImage] {
        match self {
            OpenGraphImages::Single(image) => std::slice::from_ref(image),
            OpenGraphImages::Many(images) => images,
        }
    }
}

impl From<OpenGraphImage> for OpenGraphImages {
    fn from(image: OpenGraphImage) -> Self {
        OpenGraphImages::Single(image)
    }
}

impl From<Vec<OpenGraphImage>> for OpenGraphImages {
    fn from(images: Vec<OpenGraphImage>) -> Self {
        OpenGraphImages::Many(images)
    }
}

/// Twitter card metadata (`twitter:*` tags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<TwitterCardType>,
    /// Author handle, emitted as `twitter:creator`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardType {
    Summary,
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCardType::Summary => "summary",
            TwitterCardType::SummaryLargeImage => "summary_large_image",
            TwitterCardType::App => "app",
            TwitterCardType::Player => "player",
        }
    }
}

/// Attribute that selects what a meta tag describes.
///
/// Exactly one selector exists per tag, so a tag cannot be ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetaKey {
    Name(String),
    Property(String),
    HttpEquiv(String),
}

impl MetaKey {
    /// HTML attribute name for this selector.
    pub fn attribute(&self) -> &'static str {
        match self {
            MetaKey::Name(_) => "name",
            MetaKey::Property(_) => "property",
            MetaKey::HttpEquiv(_) => "http-equiv",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            MetaKey::Name(v) | MetaKey::Property(v) | MetaKey::HttpEquiv(v) => v,
        }
    }
}

/// A generic `<meta>` tag descriptor.
///
/// Serializes as `{"name": "...", "content": "..."}` (or `property` /
/// `httpEquiv` in place of `name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaTag {
    #[serde(flatten)]
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name(name.into()),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property(property.into()),
            content: content.into(),
        }
    }

    pub fn http_equiv(http_equiv: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::HttpEquiv(http_equiv.into()),
            content: content.into(),
        }
    }
}

/// JSON-LD structured data: either already-serialized text or a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonLd {
    PreSerialized(String),
    Structured(Map<String, Value>),
}

impl From<String> for JsonLd {
    fn from(s: String) -> Self {
        JsonLd::PreSerialized(s)
    }
}

impl From<&str> for JsonLd {
    fn from(s: &str) -> Self {
        JsonLd::PreSerialized(s.to_string())
    }
}

impl From<Map<String, Value>> for JsonLd {
    fn from(map: Map<String, Value>) -> Self {
        JsonLd::Structured(map)
    }
}
