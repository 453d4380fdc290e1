//! Configuration for markup output

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a markup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for markup output
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupConfig {
    /// Tag name used for every container
    pub container_tag: String,

    /// Attribute text added to horizontal containers
    pub row_style: String,

    /// Whether to format output with newlines and indentation
    ///
    /// Leaf fragments are still embedded unchanged; only their first line is indented.
    pub pretty_print: bool,

    /// Spaces per nesting level when pretty-printing
    pub indent: usize,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            container_tag: "View".to_string(),
            row_style: "style={{flexDirection: 'row'}}".to_string(),
            pretty_print: true,
            indent: 2,
        }
    }
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
struct TomlConfig {
    markup: Option<TomlMarkup>,
}

#[derive(Deserialize)]
struct TomlMarkup {
    container_tag: Option<String>,
    row_style: Option<String>,
    pretty_print: Option<bool>,
    indent: Option<usize>,
}

impl MarkupConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML document with a `[markup]` table
    ///
    /// Keys left out of the table keep their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(markup) = parsed.markup {
            if let Some(tag) = markup.container_tag {
                config.container_tag = tag;
            }
            if let Some(style) = markup.row_style {
                config.row_style = style;
            }
            if let Some(pretty) = markup.pretty_print {
                config.pretty_print = pretty;
            }
            if let Some(indent) = markup.indent {
                config.indent = indent;
            }
        }

        Ok(config)
    }

    /// Set the container tag name
    pub fn with_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.container_tag = tag.into();
        self
    }

    /// Set the attribute text for horizontal containers
    pub fn with_row_style(mut self, style: impl Into<String>) -> Self {
        self.row_style = style.into();
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
