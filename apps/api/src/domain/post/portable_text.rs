//! Rich-text post bodies.
//!
//! The store keeps post bodies as a list of typed blocks. Each block kind is
//! one variant of [`Block`]; anything this service does not know how to show
//! deserializes to [`Block::Unknown`] and renders as nothing.

use super::image::{ImageRef, ImageUrlBuilder};
use serde::Deserialize;
use std::fmt::Write;

const BODY_IMAGE_WIDTH: u32 = 800;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    #[serde(rename = "block")]
    Text(TextBlock),
    #[serde(rename = "image")]
    Image(ImageRef),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub list_item: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Annotation referenced from a span's marks by key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn from_item(item: Option<&str>) -> Option<Self> {
        match item? {
            "number" => Some(Self::Number),
            _ => Some(Self::Bullet),
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Bullet => "ul",
            Self::Number => "ol",
        }
    }
}

impl TextBlock {
    fn plain_text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }

    fn list_kind(&self) -> Option<ListKind> {
        ListKind::from_item(self.list_item.as_deref())
    }

    fn inline_html(&self) -> String {
        let mut html = String::new();
        for span in &self.children {
            let mut rendered = escape_html(&span.text);
            for mark in &span.marks {
                rendered = self.apply_mark(mark, rendered);
            }
            html.push_str(&rendered);
        }
        html
    }

    fn apply_mark(&self, mark: &str, inner: String) -> String {
        match mark {
            "strong" => format!("<strong>{}</strong>", inner),
            "em" => format!("<em>{}</em>", inner),
            "code" => format!("<code>{}</code>", inner),
            "underline" => format!("<u>{}</u>", inner),
            "strike-through" => format!("<s>{}</s>", inner),
            key => match self
                .mark_defs
                .iter()
                .find(|def| def.key == key && def.kind == "link")
                .and_then(|def| def.href.as_deref())
            {
                Some(href) if href.starts_with('/') => {
                    format!("<a href=\"{}\">{}</a>", escape_html(href), inner)
                }
                Some(href) => format!(
                    "<a href=\"{}\" rel=\"noreferrer noopener\">{}</a>",
                    escape_html(href),
                    inner
                ),
                None => inner,
            },
        }
    }
}

/// Render blocks to HTML, grouping consecutive list items into one list.
pub fn render_html(blocks: &[Block], images: &ImageUrlBuilder) -> String {
    let mut html = String::new();
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        let list_kind = match block {
            Block::Text(text) => text.list_kind(),
            _ => None,
        };
        if open_list != list_kind {
            if let Some(kind) = open_list {
                let _ = write!(html, "</{}>", kind.tag());
            }
            if let Some(kind) = list_kind {
                let _ = write!(html, "<{}>", kind.tag());
            }
            open_list = list_kind;
        }

        match block {
            Block::Text(text) if list_kind.is_some() => {
                let _ = write!(html, "<li>{}</li>", text.inline_html());
            }
            Block::Text(text) => {
                let tag = match text.style.as_deref() {
                    Some(style @ ("h1" | "h2" | "h3" | "h4")) => style,
                    Some("blockquote") => "blockquote",
                    _ => "p",
                };
                let _ = write!(html, "<{tag}>{}</{tag}>", text.inline_html());
            }
            Block::Image(image) => {
                if let Some(src) = images.url(image, Some(BODY_IMAGE_WIDTH)) {
                    let alt = image.alt.as_deref().unwrap_or("Blog post image");
                    let _ = write!(
                        html,
                        "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                        escape_html(&src),
                        escape_html(alt)
                    );
                }
            }
            Block::Unknown => {}
        }
    }

    if let Some(kind) = open_list {
        let _ = write!(html, "</{}>", kind.tag());
    }
    html
}

/// One line per text block; list items are prefixed with `- `.
pub fn to_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Text(text) => {
                let line = text.plain_text();
                let line = line.trim();
                if line.is_empty() {
                    None
                } else if text.list_item.is_some() {
                    Some(format!("- {}", line))
                } else {
                    Some(line.to_string())
                }
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
