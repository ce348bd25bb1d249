//! Artifact properties
//!
//! A [`Properties`] value maps a property name to an ordered, duplicate-free list
//! of values. Insertion order of keys is kept so the textual form is stable
//! across runs.
//!
//! The textual form used by the artifact store is `key=v1,v2;key2=v3`. The
//! characters `\`, `,`, `;` and `=` are escaped with a backslash.

pub mod error;
pub mod parser;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use error::{ParseError, PropertiesError};
pub use parser::PropertiesFileParser;

const ESCAPED: [char; 4] = ['\\', ',', ';', '='];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, Vec<String>>",
    into = "IndexMap<String, Vec<String>>"
)]
pub struct Properties(IndexMap<String, Vec<String>>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// Ensure `key` exists, possibly without values
    pub fn insert_key(&mut self, key: impl Into<String>) {
        self.0.entry(key.into()).or_default();
    }

    /// Append `value` to `key` unless it is already present
    ///
    /// Empty values are not stored; `key` is still created.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let values = self.0.entry(key.into()).or_default();
        let value = value.into();
        if !value.is_empty() && !values.contains(&value) {
            values.push(value);
        }
    }

    /// Union `other` into `self`
    ///
    /// Existing values keep their order; values not seen yet are appended in the
    /// order `other` lists them.
    pub fn merge(&mut self, other: &Properties) {
        for (key, values) in other.iter() {
            self.insert_key(key.as_str());
            for value in values {
                self.insert(key.as_str(), value.as_str());
            }
        }
    }

    /// Merge layers left to right, later layers appending to earlier ones
    pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a Properties>) -> Properties {
        layers.into_iter().fold(Properties::new(), |mut acc, layer| {
            acc.merge(layer);
            acc
        })
    }

    /// Same keys with the same value sets, ignoring value order
    pub fn same_values(&self, other: &Properties) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, values)| {
                other.get(key).is_some_and(|theirs| {
                    values.len() == theirs.len() && values.iter().all(|v| theirs.contains(v))
                })
            })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Vec<V>)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (key, values) in iter {
            let key = key.into();
            properties.insert_key(key.clone());
            for value in values {
                properties.insert(key.clone(), value);
            }
        }
        properties
    }
}

impl From<IndexMap<String, Vec<String>>> for Properties {
    fn from(map: IndexMap<String, Vec<String>>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Properties> for IndexMap<String, Vec<String>> {
    fn from(properties: Properties) -> Self {
        properties.0
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self
            .iter()
            .map(|(key, values)| {
                let values: Vec<String> = values.iter().map(|v| escape(v)).collect();
                format!("{}={}", escape(key), values.join(","))
            })
            .collect();
        f.write_str(&groups.join(";"))
    }
}

impl std::str::FromStr for Properties {
    type Err = PropertiesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut properties = Properties::new();

        for group in split_unescaped(s, ';') {
            if group.is_empty() {
                continue;
            }
            let mut parts = split_unescaped(group, '=').into_iter();
            let key = parts.next().unwrap_or_default();
            let Some(value) = parts.next() else {
                return Err(PropertiesError::InvalidEntry(unescape(group)));
            };
            // Only the first '=' separates the key; keep any others in the value
            let rest: Vec<&str> = parts.collect();
            let value = if rest.is_empty() {
                value.to_string()
            } else {
                format!("{}={}", value, rest.join("="))
            };

            let key = unescape(key);
            if key.is_empty() {
                return Err(PropertiesError::InvalidEntry(unescape(group)));
            }
            properties.insert_key(key.clone());
            for item in split_unescaped(&value, ',') {
                properties.insert(key.clone(), unescape(item));
            }
        }

        Ok(properties)
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                unescaped.push(next);
            }
        } else {
            unescaped.push(c);
        }
    }
    unescaped
}

/// Split on `sep` where it is not preceded by an escaping backslash. Escapes are kept.
fn split_unescaped(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaping = false;
    for (i, c) in text.char_indices() {
        if escaping {
            escaping = false;
        } else if c == '\\' {
            escaping = true;
        } else if c == sep {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}
