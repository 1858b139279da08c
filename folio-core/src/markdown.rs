use std::collections::HashMap;
use std::path::Path;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

#[derive(Debug)]
pub enum DocumentError {
    Io(std::io::Error),
    FrontMatter(serde_yml::Error),
}

impl From<std::io::Error> for DocumentError {
    fn from(err: std::io::Error) -> Self {
        DocumentError::Io(err)
    }
}

impl From<serde_yml::Error> for DocumentError {
    fn from(err: serde_yml::Error) -> Self {
        DocumentError::FrontMatter(err)
    }
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Io(e) => write!(f, "IO error: {}", e),
            DocumentError::FrontMatter(e) => write!(f, "Front matter error: {}", e),
        }
    }
}

impl std::error::Error for DocumentError {}

/// A parsed content document: the rendered HTML body plus whatever
/// key/value pairs its front-matter block carried (possibly none).
#[derive(Debug)]
pub struct ParsedDocument {
    pub html: String,
    pub meta: HashMap<String, String>,
}

impl ParsedDocument {
    /// Front-matter lookup. Absent keys are never an error, only a default.
    pub fn meta_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.meta.get(key).map(String::as_str).unwrap_or(default)
    }
}

pub fn parse_document(path: &Path) -> Result<ParsedDocument, DocumentError> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

/// Splits the YAML front-matter block off a markdown document and renders
/// the remainder to HTML.
pub fn parse_str(content: &str) -> Result<ParsedDocument, DocumentError> {
    let options = Options::all();

    let mut front_matter = String::new();
    let mut in_front_matter = false;
    let mut events = Vec::new();
    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::MetadataBlock(_)) => in_front_matter = true,
            Event::End(TagEnd::MetadataBlock(_)) => in_front_matter = false,
            Event::Text(ref text) if in_front_matter => front_matter.push_str(text),
            _ => events.push(event),
        }
    }

    let meta = if front_matter.trim().is_empty() {
        HashMap::new()
    } else {
        let raw: HashMap<String, serde_yml::Value> = serde_yml::from_str(&front_matter)?;
        raw.iter()
            .map(|(key, value)| (key.clone(), scalar_to_string(value)))
            .collect()
    };

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());

    Ok(ParsedDocument { html: out, meta })
}

fn scalar_to_string(value: &serde_yml::Value) -> String {
    match value {
        serde_yml::Value::String(s) => s.clone(),
        serde_yml::Value::Bool(b) => b.to_string(),
        serde_yml::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Deterministic, idempotent mapping from a title to a URL-safe lowercase
/// token. Runs of non-alphanumeric characters collapse to a single dash.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
