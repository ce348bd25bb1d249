//! Properties file parser
//!
//! Reads a YAML mapping of property names to values:
//!
//! ```yaml
//! team: core
//! tags: [stable, lts]
//! builds:
//!   - "41"
//!   - "42"
//! ```

use tracing::warn;

use crate::properties::Properties;
use crate::properties::error::ParseError;

const SCALAR_KINDS: [&str; 3] = ["plain_scalar", "double_quote_scalar", "single_quote_scalar"];
const MAPPING_KINDS: [&str; 2] = ["block_mapping", "flow_mapping"];
const PAIR_KINDS: [&str; 2] = ["block_mapping_pair", "flow_pair"];

/// Parser for YAML properties files
pub struct PropertiesFileParser;

impl PropertiesFileParser {
    pub fn parse(&self, content: &str) -> Result<Properties, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_yaml::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set YAML language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse YAML content");
            ParseError::ParseFailed("Failed to parse YAML".to_string())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ParseError::ParseFailed(
                "invalid yaml format in properties file".to_string(),
            ));
        }

        let mut properties = Properties::new();
        if let Some(mapping) = self.find_top_mapping(root) {
            let mut cursor = mapping.walk();
            for pair in mapping.children(&mut cursor) {
                if PAIR_KINDS.contains(&pair.kind()) {
                    self.parse_pair(pair, content, &mut properties);
                }
            }
        }

        Ok(properties)
    }

    /// Find the outermost mapping of the first document
    fn find_top_mapping<'a>(&self, node: tree_sitter::Node<'a>) -> Option<tree_sitter::Node<'a>> {
        if MAPPING_KINDS.contains(&node.kind()) {
            return Some(node);
        }
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .find_map(|child| self.find_top_mapping(child))
    }

    fn parse_pair(&self, node: tree_sitter::Node, content: &str, properties: &mut Properties) {
        let Some(key_node) = node.child_by_field_name("key") else {
            return;
        };
        let key = self.get_node_text(key_node, content);
        if key.is_empty() {
            return;
        }

        properties.insert_key(key.clone());
        if let Some(value_node) = node.child_by_field_name("value") {
            let mut values = Vec::new();
            self.collect_scalars(value_node, content, &mut values);
            for value in values {
                properties.insert(key.clone(), value);
            }
        }
    }

    /// Collect scalar values in document order, skipping nested mappings
    fn collect_scalars(&self, node: tree_sitter::Node, content: &str, values: &mut Vec<String>) {
        if SCALAR_KINDS.contains(&node.kind()) {
            values.push(self.get_node_text(node, content));
            return;
        }
        if MAPPING_KINDS.contains(&node.kind()) {
            return;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_scalars(child, content, values);
        }
    }

    /// Get text content of a node, removing quotes if present
    fn get_node_text(&self, node: tree_sitter::Node, content: &str) -> String {
        let text = content[node.byte_range()].trim();
        let unquoted = if text.len() >= 2
            && ((text.starts_with('"') && text.ends_with('"'))
                || (text.starts_with('\'') && text.ends_with('\'')))
        {
            &text[1..text.len() - 1]
        } else {
            text
        };
        unquoted.to_string()
    }
}
