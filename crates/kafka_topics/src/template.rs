//! Topic name templates.
//!
//! Templates use the variable subset of Mustache syntax. A template is
//! rendered in a single pass, with each tag replaced by its value from a set
//! of [`Variables`].
//!
//! | Tag              | Output                                 |
//! |------------------|----------------------------------------|
//! | `{{name}}`       | value of `name`, HTML escaped          |
//! | `{{{name}}}`     | value of `name`, unescaped             |
//! | `{{&name}}`      | value of `name`, unescaped             |
//! | `{{! comment }}` | nothing                                |
//!
//! Variables which are not supplied render as an empty string. Sections,
//! inverted sections, partials and delimiter changes are not supported and
//! are rejected as malformed.
//!
//! # Example
//!
//! ```
//! # use kafka_topics::template::render;
//! let topic = render("topic-{{functionality}}-{{action}}", &[
//!     ("functionality", "transfer"),
//!     ("action", "prepare"),
//! ])?;
//! assert_eq!(topic, "topic-transfer-prepare");
//! # Ok::<_, kafka_topics::template::TemplateError>(())
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use thiserror::Error;
use tracing::debug;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const RAW_CLOSE: &str = "}}}";

/// A template could not be rendered.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// An opening `{{` was never closed.
    #[error("unclosed tag at offset {offset}")]
    UnclosedTag {
        /// Byte offset of the opening delimiter.
        offset: usize,
    },
    /// A section, partial or delimiter tag was used.
    #[error("unsupported tag '{tag}'")]
    UnsupportedTag {
        /// Tag body, including its sigil.
        tag: String,
    },
}

/// Named values available to a template.
pub trait Variables {
    /// Returns the value of a variable, if present.
    fn get(&self, name: &str) -> Option<&str>;
}

impl Variables for () {
    fn get(&self, _name: &str) -> Option<&str> {
        None
    }
}

impl<'a> Variables for [(&'a str, &'a str)] {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<'a, const N: usize> Variables for [(&'a str, &'a str); N] {
    fn get(&self, name: &str) -> Option<&str> {
        Variables::get(self.as_slice(), name)
    }
}

impl<K, V, S> Variables for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(AsRef::as_ref)
    }
}

impl<K, V> Variables for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(AsRef::as_ref)
    }
}

impl<T: Variables + ?Sized> Variables for &T {
    fn get(&self, name: &str) -> Option<&str> {
        (**self).get(name)
    }
}

enum Tag<'t> {
    Escaped(&'t str),
    Raw(&'t str),
    Comment,
}

/// Renders a template with the given variables.
pub fn render<V>(template: &str, vars: &V) -> Result<String, TemplateError>
where
    V: Variables + ?Sized,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);

        let tag_offset = offset + start;
        let (tag, len) = parse_tag(&rest[start..], tag_offset)?;
        match tag {
            Tag::Escaped(name) => match vars.get(name) {
                Some(value) => escape_into(&mut out, value),
                None => debug!(variable = name, "template variable not supplied"),
            },
            Tag::Raw(name) => match vars.get(name) {
                Some(value) => out.push_str(value),
                None => debug!(variable = name, "template variable not supplied"),
            },
            Tag::Comment => {}
        }

        rest = &rest[start + len..];
        offset += start + len;
    }
    out.push_str(rest);

    Ok(out)
}

/// Parses the tag at the start of `s`, returning it with its length in bytes.
fn parse_tag(s: &str, offset: usize) -> Result<(Tag<'_>, usize), TemplateError> {
    let body = &s[OPEN.len()..];

    // Whitespace may precede the sigil, eg. `{{ {name}}}`.
    let sigil_at = body.len() - body.trim_start().len();
    if let Some(inner) = body[sigil_at..].strip_prefix('{') {
        let end = inner
            .find(RAW_CLOSE)
            .ok_or(TemplateError::UnclosedTag { offset })?;
        let len = OPEN.len() + sigil_at + 1 + end + RAW_CLOSE.len();
        return Ok((Tag::Raw(inner[..end].trim()), len));
    }

    let end = body
        .find(CLOSE)
        .ok_or(TemplateError::UnclosedTag { offset })?;
    let len = OPEN.len() + end + CLOSE.len();
    let inner = body[..end].trim();

    let tag = match inner.chars().next() {
        Some('!') => Tag::Comment,
        Some('&') => Tag::Raw(inner[1..].trim()),
        Some('#' | '^' | '/' | '>' | '=') => {
            return Err(TemplateError::UnsupportedTag {
                tag: inner.to_string(),
            })
        }
        _ => Tag::Escaped(inner),
    };

    Ok((tag, len))
}

/// HTML escapes `value` with the same entity table as Mustache.
fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            c => out.push(c),
        }
    }
}
