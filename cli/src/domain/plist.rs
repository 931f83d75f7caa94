//! Property-list values and the XML writer used for launchd descriptors.
//!
//! Only the value kinds a launch agent needs are modelled. Dictionaries keep
//! insertion order, so the same record always renders to the same bytes.

use std::borrow::Cow;
use std::fmt;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#;
const INDENT: &str = "    ";

/// A property-list value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
    Array(Vec<Value>),
    Dictionary(Dictionary),
}

/// An insertion-ordered property-list dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<(String, Value)>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`. An existing key keeps its position and
    /// has its value replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Dictionary> for Value {
    fn from(dict: Dictionary) -> Self {
        Value::Dictionary(dict)
    }
}

/// Render `root` as a complete XML property-list document.
#[must_use]
pub fn to_xml(root: &Dictionary) -> String {
    Document(root).to_string()
}

struct Document<'a>(&'a Dictionary);

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{XML_DECLARATION}")?;
        writeln!(f, "{DOCTYPE}")?;
        writeln!(f, r#"<plist version="1.0">"#)?;
        write_dictionary(f, self.0, 0)?;
        writeln!(f, "</plist>")
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    match value {
        Value::String(s) => writeln!(f, "{pad}<string>{}</string>", escape(s)),
        Value::Integer(i) => writeln!(f, "{pad}<integer>{i}</integer>"),
        Value::Boolean(true) => writeln!(f, "{pad}<true/>"),
        Value::Boolean(false) => writeln!(f, "{pad}<false/>"),
        Value::Array(items) if items.is_empty() => writeln!(f, "{pad}<array/>"),
        Value::Array(items) => {
            writeln!(f, "{pad}<array>")?;
            for item in items {
                write_value(f, item, depth + 1)?;
            }
            writeln!(f, "{pad}</array>")
        }
        Value::Dictionary(dict) => write_dictionary(f, dict, depth),
    }
}

fn write_dictionary(f: &mut fmt::Formatter<'_>, dict: &Dictionary, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    if dict.is_empty() {
        return writeln!(f, "{pad}<dict/>");
    }
    writeln!(f, "{pad}<dict>")?;
    for (key, value) in &dict.entries {
        writeln!(f, "{pad}{INDENT}<key>{}</key>", escape(key))?;
        write_value(f, value, depth + 1)?;
    }
    writeln!(f, "{pad}</dict>")
}

/// Escape XML markup characters. Returns the input untouched when clean.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
