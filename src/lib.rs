//! Grid Synth - infer row/column containers for absolutely positioned elements
//!
//! Given sibling elements that each carry an absolute bounding box, this
//! library decides which of them share a visual row or column and builds the
//! smallest hierarchy of horizontal/vertical containers that reproduces the
//! original arrangement.
//!
//! # Example
//!
//! ```rust
//! use grid_synth::{generate_layout, identifier_leaf, Element, Node};
//!
//! let elements = vec![
//!     Element::at("title", 0.0, 0.0),
//!     Element::at("subtitle", 0.0, 40.0),
//! ];
//!
//! let tree = generate_layout(&elements, identifier_leaf).unwrap();
//! assert_eq!(
//!     tree,
//!     Node::vertical(vec![
//!         Node::Leaf("title".to_string()),
//!         Node::Leaf("subtitle".to_string()),
//!     ])
//! );
//! ```

pub mod layout;
pub mod renderer;

pub use layout::{
    generate_layout, identifier_leaf, Arrangement, BoundingBox, ChildrenMatrix, Direction,
    Element, LayoutError, LeafRenderer, Node, Slot,
};
pub use renderer::{render_markup, ConfigError, MarkupConfig};

use thiserror::Error;

/// Errors that can occur during the synthesis pipeline
#[derive(Debug, Error)]
pub enum SynthError {
    /// Error during grid inference
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error loading configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration for the complete synthesis pipeline
#[derive(Debug, Clone, Default)]
pub struct SynthConfig {
    /// Markup output configuration
    pub markup: MarkupConfig,
}

impl SynthConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the markup configuration
    pub fn with_markup(mut self, config: MarkupConfig) -> Self {
        self.markup = config;
        self
    }

    /// Load configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, SynthError> {
        Ok(Self {
            markup: MarkupConfig::from_toml_str(content)?,
        })
    }
}

/// Infer containers for `elements` and serialize them with default configuration
///
/// # Example
///
/// ```rust
/// use grid_synth::{generate_markup, Element};
///
/// let elements = vec![Element::at("a", 0.0, 0.0), Element::at("b", 80.0, 0.0)];
/// let markup = generate_markup(&elements, |e: &Element| format!("<{}/>", e.id)).unwrap();
///
/// assert!(markup.starts_with("<View style={{flexDirection: 'row'}}>"));
/// assert!(markup.contains("<a/>"));
/// ```
pub fn generate_markup<R>(elements: &[Element], renderer: R) -> Result<String, SynthError>
where
    R: LeafRenderer<Output = String>,
{
    generate_markup_with_config(elements, renderer, &SynthConfig::default())
}

/// Infer containers for `elements` and serialize them with custom configuration
pub fn generate_markup_with_config<R>(
    elements: &[Element],
    renderer: R,
    config: &SynthConfig,
) -> Result<String, SynthError>
where
    R: LeafRenderer<Output = String>,
{
    let tree = generate_layout(elements, renderer)?;
    Ok(render_markup(&tree, &config.markup))
}
