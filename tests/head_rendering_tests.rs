//! End-to-end tests: defaults, page declaration, merge, and head output.

use serde_json::{Value, json};
use seo_meta::format::{format_head_html, format_head_json};
use seo_meta::{
    HeadElement, JsonLd, MetaTag, OpenGraphImage, OpenGraphImages, OpenGraphMetadata, PageSeo,
    SeoHead, SeoMetadata, SeoProvider, TwitterCardType, TwitterMetadata, format_json_ld,
    format_open_graph_image, generate_meta_tags,
};

/// Site-wide defaults shared by the tests.
fn site_defaults() -> SeoMetadata {
    serde_json::from_value(json!({
        "title": "Example",
        "description": "An example site",
        "language": "en",
        "openGraph": {
            "type": "website",
            "siteName": "Example",
            "image": {"url": "https://example.com/og.png", "width": 1200, "height": 630}
        },
        "twitter": {"cardType": "summary", "site": "@example"},
        "jsonLd": {"@context": "https://schema.org", "@type": "WebSite"}
    }))
    .expect("defaults should deserialize")
}

#[test]
fn defaults_render_when_no_page_declared() {
    let provider = SeoProvider::new(site_defaults());
    let head = SeoHead::new(provider.handle()).render().unwrap();

    assert_eq!(head.title(), Some("Example"));
    assert_eq!(head.lang.as_deref(), Some("en"));
    let keys: Vec<&str> = head.meta_tags().map(|t| t.key.value()).collect();
    assert_eq!(
        keys,
        vec![
            "description",
            "og:type",
            "og:site_name",
            "og:image",
            "og:image:width",
            "og:image:height",
            "twitter:card",
            "twitter:site",
        ]
    );
    let script = head
        .elements
        .iter()
        .find_map(|e| match e {
            HeadElement::Script { content, .. } => Some(content.clone()),
            _ => None,
        })
        .expect("JSON-LD script");
    let parsed: Value = serde_json::from_str(&script).unwrap();
    assert_eq!(parsed["@type"], "WebSite");
}

#[test]
fn merged_page_keeps_site_defaults() {
    let provider = SeoProvider::new(site_defaults());
    let page: SeoMetadata = serde_json::from_value(json!({
        "title": "Hello World",
        "canonical": "https://example.com/posts/hello",
        "noIndex": true,
        "openGraph": {
            "type": "article",
            "image": [
                {"url": "https://example.com/a.png"},
                {"url": "https://example.com/b.png", "alt": "B"}
            ]
        },
        "twitter": {"handle": "@ada"},
        "jsonLd": {"@type": "Article", "headline": "Hello World"}
    }))
    .unwrap();

    let _guard = PageSeo::new(page).merged().declare(&provider.handle()).unwrap();
    let head = SeoHead::new(provider.handle()).render().unwrap();

    assert_eq!(head.title(), Some("Hello World"));
    let tags: Vec<&MetaTag> = head.meta_tags().collect();
    assert!(tags.contains(&&MetaTag::name("description", "An example site")));
    assert!(tags.contains(&&MetaTag::name("robots", "noindex")));
    assert!(tags.contains(&&MetaTag::property("og:type", "article")));
    assert!(tags.contains(&&MetaTag::property("og:site_name", "Example")));
    assert!(tags.contains(&&MetaTag::name("twitter:site", "@example")));
    assert!(tags.contains(&&MetaTag::name("twitter:creator", "@ada")));

    // The page's image list replaces the default single image.
    let images: Vec<&str> = tags
        .iter()
        .filter(|t| t.key.value().starts_with("og:image"))
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(
        images,
        vec!["https://example.com/a.png", "https://example.com/b.png", "B"]
    );

    assert!(head.elements.contains(&HeadElement::Link {
        rel: "canonical".into(),
        href: "https://example.com/posts/hello".into(),
    }));

    let json = format_head_json(&head).unwrap();
    let script = json["elements"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["element"] == "script")
        .unwrap();
    let ld: Value = serde_json::from_str(script["content"].as_str().unwrap()).unwrap();
    assert_eq!(
        ld,
        json!({"@context": "https://schema.org", "@type": "Article", "headline": "Hello World"})
    );
}

#[test]
fn unmerged_page_replaces_defaults_and_unmount_restores_them() {
    let provider = SeoProvider::new(site_defaults());
    let handle = provider.handle();
    let head = SeoHead::new(handle.clone());

    {
        let _guard = PageSeo::new(SeoMetadata::new("Bare")).declare(&handle).unwrap();
        let rendered = head.render().unwrap();
        assert_eq!(rendered.title(), Some("Bare"));
        assert_eq!(rendered.meta_tags().count(), 0);
        assert_eq!(rendered.lang, None);
    }

    assert_eq!(head.render().unwrap().title(), Some("Example"));
}

#[test]
fn html_output_is_stable_across_renders() {
    let seo = SeoMetadata {
        description: Some("Tom & Jerry".into()),
        twitter: Some(TwitterMetadata {
            card_type: Some(TwitterCardType::SummaryLargeImage),
            ..Default::default()
        }),
        ..SeoMetadata::new("Cartoons")
    };
    let provider = SeoProvider::new(seo);
    let head = SeoHead::new(provider.handle());

    let first = format_head_html(&head.render().unwrap());
    let second = format_head_html(&head.render().unwrap());

    assert_eq!(first, second);
    assert_eq!(
        first,
        "<title>Cartoons</title>\n\
         <meta name=\"description\" content=\"Tom &amp; Jerry\">\n\
         <meta name=\"twitter:card\" content=\"summary_large_image\">\n"
    );
}

#[test]
fn helper_functions_match_documented_examples() {
    assert!(generate_meta_tags(&SeoMetadata::new("T")).is_empty());

    let images = OpenGraphImages::Many(vec![
        OpenGraphImage::new("a.png"),
        OpenGraphImage::new("b.png").with_alt("B"),
    ]);
    assert_eq!(
        format_open_graph_image(Some(&images)),
        vec![
            MetaTag::property("og:image", "a.png"),
            MetaTag::property("og:image", "b.png"),
            MetaTag::property("og:image:alt", "B"),
        ]
    );

    assert_eq!(format_json_ld(Some(&JsonLd::from("raw"))).unwrap(), "raw");
    assert_eq!(format_json_ld(None).unwrap(), "");

    let og = OpenGraphMetadata {
        title: Some("OG".into()),
        ..Default::default()
    };
    let seo = SeoMetadata {
        open_graph: Some(og),
        ..SeoMetadata::new("T")
    };
    assert_eq!(
        generate_meta_tags(&seo),
        vec![MetaTag::property("og:title", "OG")]
    );
}
