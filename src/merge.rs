//! Deep merge of metadata values.
//!
//! Records merge key by key; everything else (strings, flags, lists) is
//! replaced wholesale by the source value. Lists are never concatenated.
//! Merging never mutates its inputs: both sides are borrowed and a new value
//! is returned.

use crate::types::{
    JsonLd, OpenGraphImage, OpenGraphImages, OpenGraphMetadata, PartialSeoMetadata, SeoMetadata,
    TwitterMetadata,
};
use serde_json::{Map, Value};

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays, strings, numbers, booleans are replaced entirely
/// - If overlay is null, the base value is preserved (null means "not specified")
///
/// # Example
/// ```
/// use serde_json::json;
/// use seo_meta::merge::deep_merge;
///
/// let base = json!({
///     "@type": "Article",
///     "author": { "name": "Ada", "url": "https://example.com/ada" },
///     "keywords": ["a", "b"]
/// });
/// let overlay = json!({
///     "author": { "name": "Grace" },
///     "keywords": ["c"]
/// });
/// let result = deep_merge(base, overlay);
/// assert_eq!(result["author"]["url"], "https://example.com/ada");
/// assert_eq!(result["keywords"], json!(["c"]));
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Merge multiple values in order, with later values taking precedence.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, deep_merge)
}

/// Structural deep merge over the metadata shapes.
///
/// `Partial` is the deep-partial form of `Self`: unspecified fields keep the
/// target's value.
pub trait Merge: Sized {
    type Partial;

    /// Return a new value with `source` merged over `self`.
    fn merge(&self, source: &Self::Partial) -> Self;
}

/// Source wins when set; otherwise the target is kept.
fn overwrite<T: Clone>(target: &Option<T>, source: &Option<T>) -> Option<T> {
    source.clone().or_else(|| target.clone())
}

/// Recurse when both sides are records, otherwise behave like [`overwrite`].
fn merge_nested<T>(target: &Option<T>, source: &Option<T>) -> Option<T>
where
    T: Merge<Partial = T> + Clone,
{
    match (target, source) {
        (Some(target), Some(source)) => Some(target.merge(source)),
        (target, source) => overwrite(target, source),
    }
}

impl Merge for SeoMetadata {
    type Partial = PartialSeoMetadata;

    fn merge(&self, source: &PartialSeoMetadata) -> Self {
        Self {
            title: source.title.clone().unwrap_or_else(|| self.title.clone()),
            description: overwrite(&self.description, &source.description),
            canonical: overwrite(&self.canonical, &source.canonical),
            open_graph: merge_nested(&self.open_graph, &source.open_graph),
            twitter: merge_nested(&self.twitter, &source.twitter),
            additional_meta_tags: overwrite(
                &self.additional_meta_tags,
                &source.additional_meta_tags,
            ),
            json_ld: merge_nested(&self.json_ld, &source.json_ld),
            language: overwrite(&self.language, &source.language),
            no_index: overwrite(&self.no_index, &source.no_index),
            no_follow: overwrite(&self.no_follow, &source.no_follow),
            keywords: overwrite(&self.keywords, &source.keywords),
        }
    }
}

impl Merge for OpenGraphMetadata {
    type Partial = OpenGraphMetadata;

    fn merge(&self, source: &OpenGraphMetadata) -> Self {
        Self {
            title: overwrite(&self.title, &source.title),
            description: overwrite(&self.description, &source.description),
            og_type: overwrite(&self.og_type, &source.og_type),
            url: overwrite(&self.url, &source.url),
            site_name: overwrite(&self.site_name, &source.site_name),
            locale: overwrite(&self.locale, &source.locale),
            image: merge_nested(&self.image, &source.image),
        }
    }
}

impl Merge for OpenGraphImages {
    type Partial = OpenGraphImages;

    /// Two single images merge field by field; a list on either side replaces.
    fn merge(&self, source: &OpenGraphImages) -> Self {
        match (self, source) {
            (OpenGraphImages::Single(target), OpenGraphImages::Single(source)) => {
                OpenGraphImages::Single(target.merge(source))
            }
            (_, source) => source.clone(),
        }
    }
}

impl Merge for OpenGraphImage {
    type Partial = OpenGraphImage;

    fn merge(&self, source: &OpenGraphImage) -> Self {
        Self {
            url: source.url.clone(),
            alt: overwrite(&self.alt, &source.alt),
            width: overwrite(&self.width, &source.width),
            height: overwrite(&self.height, &source.height),
            image_type: overwrite(&self.image_type, &source.image_type),
        }
    }
}

impl Merge for TwitterMetadata {
    type Partial = TwitterMetadata;

    fn merge(&self, source: &TwitterMetadata) -> Self {
        Self {
            card_type: overwrite(&self.card_type, &source.card_type),
            handle: overwrite(&self.handle, &source.handle),
            site: overwrite(&self.site, &source.site),
            title: overwrite(&self.title, &source.title),
            description: overwrite(&self.description, &source.description),
            image: overwrite(&self.image, &source.image),
            image_alt: overwrite(&self.image_alt, &source.image_alt),
        }
    }
}

/// Merge two JSON objects for document content.
///
/// Unlike [`deep_merge`], a `null` in `source` is a value and replaces the
/// target's entry.
fn merge_json_object(
    target: &Map<String, Value>,
    source: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = target.clone();
    for (key, source_value) in source {
        let value = match (merged.remove(key), source_value) {
            (Some(Value::Object(target_map)), Value::Object(source_map)) => {
                Value::Object(merge_json_object(&target_map, source_map))
            }
            (_, source_value) => source_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

impl Merge for JsonLd {
    type Partial = JsonLd;

    /// Structured documents merge as JSON objects; pre-serialized text is
    /// opaque and always replaced.
    fn merge(&self, source: &JsonLd) -> Self {
        match (self, source) {
            (JsonLd::Structured(target), JsonLd::Structured(source)) => {
                JsonLd::Structured(merge_json_object(target, source))
            }
            (_, source) => source.clone(),
        }
    }
}
