//! Conversion of metadata into `<meta>` tag descriptors and JSON-LD text.
//!
//! Tag order is fixed so repeated renders never reorder the document head:
//! description, keywords, robots, Open Graph, Twitter, then any additional
//! tags in the order they were declared. Title, canonical link and JSON-LD
//! are emitted by the head renderer, not here.

use crate::error::{SeoError, SeoResult};
use crate::types::{
    JsonLd, MetaTag, OpenGraphImages, OpenGraphMetadata, SeoMetadata, TwitterMetadata,
};

/// Generate the ordered list of meta tags for `seo`.
pub fn generate_meta_tags(seo: &SeoMetadata) -> Vec<MetaTag> {
    let mut tags = Vec::new();

    if let Some(ref description) = seo.description {
        tags.push(MetaTag::name("description", description));
    }

    if let Some(ref keywords) = seo.keywords {
        tags.push(MetaTag::name("keywords", keywords));
    }

    if let Some(robots) = robots_directive(seo) {
        tags.push(MetaTag::name("robots", robots));
    }

    if let Some(ref og) = seo.open_graph {
        tags.extend(open_graph_tags(og));
    }

    if let Some(ref twitter) = seo.twitter {
        tags.extend(twitter_tags(twitter));
    }

    if let Some(ref additional) = seo.additional_meta_tags {
        tags.extend(additional.iter().cloned());
    }

    tags
}

/// Robots content, or `None` when crawling is unrestricted.
fn robots_directive(seo: &SeoMetadata) -> Option<String> {
    let mut directives = Vec::new();
    if seo.no_index.unwrap_or(false) {
        directives.push("noindex");
    }
    if seo.no_follow.unwrap_or(false) {
        directives.push("nofollow");
    }

    if directives.is_empty() {
        None
    } else {
        Some(directives.join(","))
    }
}

fn open_graph_tags(og: &OpenGraphMetadata) -> Vec<MetaTag> {
    let mut tags = Vec::new();

    if let Some(ref title) = og.title {
        tags.push(MetaTag::property("og:title", title));
    }
    if let Some(ref description) = og.description {
        tags.push(MetaTag::property("og:description", description));
    }
    if let Some(ref og_type) = og.og_type {
        tags.push(MetaTag::property("og:type", og_type.as_str()));
    }
    if let Some(ref url) = og.url {
        tags.push(MetaTag::property("og:url", url));
    }
    if let Some(ref site_name) = og.site_name {
        tags.push(MetaTag::property("og:site_name", site_name));
    }
    if let Some(ref locale) = og.locale {
        tags.push(MetaTag::property("og:locale", locale));
    }
    tags.extend(format_open_graph_image(og.image.as_ref()));

    tags
}

fn twitter_tags(twitter: &TwitterMetadata) -> Vec<MetaTag> {
    let mut tags = Vec::new();

    if let Some(card_type) = twitter.card_type {
        tags.push(MetaTag::name("twitter:card", card_type.as_str()));
    }
    if let Some(ref site) = twitter.site {
        tags.push(MetaTag::name("twitter:site", site));
    }
    if let Some(ref handle) = twitter.handle {
        tags.push(MetaTag::name("twitter:creator", handle));
    }
    if let Some(ref title) = twitter.title {
        tags.push(MetaTag::name("twitter:title", title));
    }
    if let Some(ref description) = twitter.description {
        tags.push(MetaTag::name("twitter:description", description));
    }
    if let Some(ref image) = twitter.image {
        tags.push(MetaTag::name("twitter:image", image));
    }
    if let Some(ref image_alt) = twitter.image_alt {
        tags.push(MetaTag::name("twitter:image:alt", image_alt));
    }

    tags
}

/// Flatten one or many Open Graph images into property tags.
///
/// Per image: `og:image`, `og:image:alt`, `og:image:width`,
/// `og:image:height`, `og:image:type`, skipping fields that are not set.
pub fn format_open_graph_image(images: Option<&OpenGraphImages>) -> Vec<MetaTag> {
    let Some(images) = images else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    for image in images.as_slice() {
        tags.push(MetaTag::property("og:image", &image.url));
        if let Some(ref alt) = image.alt {
            tags.push(MetaTag::property("og:image:alt", alt));
        }
        if let Some(width) = image.width {
            tags.push(MetaTag::property("og:image:width", width.to_string()));
        }
        if let Some(height) = image.height {
            tags.push(MetaTag::property("og:image:height", height.to_string()));
        }
        if let Some(ref image_type) = image.image_type {
            tags.push(MetaTag::property("og:image:type", image_type));
        }
    }
    tags
}

/// Text for an `application/ld+json` script.
///
/// Pre-serialized input is returned as-is; structured input is serialized to
/// compact JSON; no input yields an empty string.
pub fn format_json_ld(json_ld: Option<&JsonLd>) -> SeoResult<String> {
    match json_ld {
        None => Ok(String::new()),
        Some(JsonLd::PreSerialized(text)) => Ok(text.clone()),
        Some(JsonLd::Structured(map)) => {
            serde_json::to_string(map).map_err(SeoError::Serialization)
        }
    }
}
