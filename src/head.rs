//! Head renderer: resolved metadata to document head elements.

use crate::error::SeoResult;
use crate::store::SeoHandle;
use crate::tags::{format_json_ld, generate_meta_tags};
use crate::types::{MetaTag, SeoMetadata};
use serde::Serialize;

pub const JSON_LD_MIME: &str = "application/ld+json";

/// A single element to place in the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum HeadElement {
    Title { text: String },
    Meta(MetaTag),
    Link { rel: String, href: String },
    Script {
        #[serde(rename = "type")]
        script_type: String,
        content: String,
    },
}

/// Everything the host needs to apply to the document head.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Head {
    /// Value for the document's `lang` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub elements: Vec<HeadElement>,
}

impl Head {
    pub fn meta_tags(&self) -> impl Iterator<Item = &MetaTag> {
        self.elements.iter().filter_map(|e| match e {
            HeadElement::Meta(tag) => Some(tag),
            _ => None,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            HeadElement::Title { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Build head elements for `seo`.
///
/// Order: title, meta tags, canonical link, JSON-LD script.
pub fn render_head(seo: &SeoMetadata) -> SeoResult<Head> {
    let mut elements = vec![HeadElement::Title {
        text: seo.title.clone(),
    }];

    elements.extend(generate_meta_tags(seo).into_iter().map(HeadElement::Meta));

    if let Some(ref canonical) = seo.canonical {
        elements.push(HeadElement::Link {
            rel: "canonical".to_string(),
            href: canonical.clone(),
        });
    }

    let json_ld = format_json_ld(seo.json_ld.as_ref())?;
    if !json_ld.is_empty() {
        elements.push(HeadElement::Script {
            script_type: JSON_LD_MIME.to_string(),
            content: json_ld,
        });
    }

    Ok(Head {
        lang: seo.language.clone(),
        elements,
    })
}

/// Renders whatever metadata the store currently resolves to.
#[derive(Debug, Clone)]
pub struct SeoHead {
    handle: SeoHandle,
    additional_elements: Vec<HeadElement>,
}

impl SeoHead {
    pub fn new(handle: SeoHandle) -> Self {
        Self {
            handle,
            additional_elements: Vec::new(),
        }
    }

    /// Elements appended after the generated ones.
    pub fn with_additional_elements(mut self, elements: Vec<HeadElement>) -> Self {
        self.additional_elements = elements;
        self
    }

    pub fn render(&self) -> SeoResult<Head> {
        let seo = self.handle.resolved()?;
        let mut head = render_head(&seo)?;
        head.elements.extend(self.additional_elements.iter().cloned());
        Ok(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeoProvider;
    use crate::types::JsonLd;
    use serde_json::json;

    #[test]
    fn test_render_order() {
        let seo = SeoMetadata {
            description: Some("D".into()),
            canonical: Some("https://example.com/".into()),
            json_ld: Some(JsonLd::from("{\"@type\":\"WebSite\"}")),
            language: Some("en".into()),
            ..SeoMetadata::new("Home")
        };

        let head = render_head(&seo).unwrap();

        assert_eq!(head.lang.as_deref(), Some("en"));
        assert_eq!(
            head.elements,
            vec![
                HeadElement::Title { text: "Home".into() },
                HeadElement::Meta(MetaTag::name("description", "D")),
                HeadElement::Link {
                    rel: "canonical".into(),
                    href: "https://example.com/".into()
                },
                HeadElement::Script {
                    script_type: JSON_LD_MIME.into(),
                    content: "{\"@type\":\"WebSite\"}".into()
                },
            ]
        );
    }

    #[test]
    fn test_empty_json_ld_text_emits_no_script() {
        let seo = SeoMetadata {
            json_ld: Some(JsonLd::from("")),
            ..SeoMetadata::new("Home")
        };
        let head = render_head(&seo).unwrap();
        assert_eq!(head.elements.len(), 1);
        assert_eq!(head.title(), Some("Home"));
    }

    #[test]
    fn test_seo_head_follows_store() {
        let provider = SeoProvider::new(SeoMetadata::new("Site"));
        let handle = provider.handle();
        let head = SeoHead::new(handle.clone()).with_additional_elements(vec![HeadElement::Link {
            rel: "icon".into(),
            href: "/favicon.ico".into(),
        }]);

        assert_eq!(head.render().unwrap().title(), Some("Site"));

        handle.update_current_seo(SeoMetadata::new("Page")).unwrap();
        let rendered = head.render().unwrap();
        assert_eq!(rendered.title(), Some("Page"));
        assert!(matches!(
            rendered.elements.last(),
            Some(HeadElement::Link { rel, .. }) if rel == "icon"
        ));
    }

    #[test]
    fn test_seo_head_without_provider_fails() {
        assert!(SeoHead::new(SeoHandle::detached()).render().is_err());
    }

    #[test]
    fn test_head_serializes_tagged() {
        let head = render_head(&SeoMetadata::new("Home")).unwrap();
        assert_eq!(
            serde_json::to_value(&head).unwrap(),
            json!({"elements": [{"element": "title", "text": "Home"}]})
        );
    }
}
