//! Markup renderer for synthesized container trees
//!
//! This module takes a `Node` tree and produces JSX-style container markup,
//! embedding each leaf fragment verbatim.

pub mod config;
pub mod markup;

pub use config::{ConfigError, MarkupConfig};
pub use markup::render_markup;
