//! Output formatting for rendered heads: HTML and JSON.

use crate::error::{SeoError, SeoResult};
use crate::head::{Head, HeadElement};
use crate::types::MetaTag;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output format for a rendered head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Format head elements as HTML, one element per line.
pub fn format_head_html(head: &Head) -> String {
    let mut html = String::new();

    for element in &head.elements {
        html.push_str(&format_element_html(element));
        html.push('\n');
    }

    html
}

fn format_element_html(element: &HeadElement) -> String {
    match element {
        HeadElement::Title { text } => format!("<title>{}</title>", html_escape(text)),
        HeadElement::Meta(tag) => format_meta_html(tag),
        HeadElement::Link { rel, href } => format!(
            r#"<link rel="{}" href="{}">"#,
            html_escape(rel),
            html_escape(href)
        ),
        HeadElement::Script {
            script_type,
            content,
        } => format!(
            r#"<script type="{}">{}</script>"#,
            html_escape(script_type),
            script_escape(content)
        ),
    }
}

fn format_meta_html(tag: &MetaTag) -> String {
    format!(
        r#"<meta {}="{}" content="{}">"#,
        tag.key.attribute(),
        html_escape(tag.key.value()),
        html_escape(&tag.content)
    )
}

/// Format head elements as a JSON value.
pub fn format_head_json(head: &Head) -> SeoResult<Value> {
    serde_json::to_value(head).map_err(SeoError::Serialization)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Script bodies are raw text; only a closing-tag sequence can break out.
fn script_escape(s: &str) -> String {
    s.replace("</", "<\\/")
}
