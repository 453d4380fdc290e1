//! Markup generation from synthesized container trees

use crate::layout::{Direction, Node};

use super::MarkupConfig;

/// Build container markup incrementally
pub struct MarkupBuilder<'c> {
    config: &'c MarkupConfig,
    output: String,
    depth: usize,
}

impl<'c> MarkupBuilder<'c> {
    pub fn new(config: &'c MarkupConfig) -> Self {
        Self {
            config,
            output: String::new(),
            depth: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            " ".repeat(self.config.indent * self.depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push_line(&mut self, text: &str) {
        let indent = self.indent_str();
        self.output.push_str(&indent);
        self.output.push_str(text);
        let newline = self.newline().to_string();
        self.output.push_str(&newline);
    }

    /// Open a container tag and descend one level
    pub fn open(&mut self, direction: Direction) {
        let tag = match direction {
            Direction::Horizontal => {
                format!("<{} {}>", self.config.container_tag, self.config.row_style)
            }
            Direction::Vertical => format!("<{}>", self.config.container_tag),
        };
        self.push_line(&tag);
        self.depth += 1;
    }

    /// Close the innermost container
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        let tag = format!("</{}>", self.config.container_tag);
        self.push_line(&tag);
    }

    /// Embed a leaf fragment verbatim
    ///
    /// When pretty-printing, only the fragment's first line is indented and a
    /// line break is added if it does not already end with one. Its own line
    /// endings and inner whitespace are never touched.
    pub fn add_fragment(&mut self, fragment: &str) {
        if self.config.pretty_print {
            let indent = self.indent_str();
            self.output.push_str(&indent);
            self.output.push_str(fragment);
            if !fragment.ends_with('\n') {
                self.output.push('\n');
            }
        } else {
            self.output.push_str(fragment);
        }
    }

    pub fn add_node<F: AsRef<str>>(&mut self, node: &Node<F>) {
        match node {
            Node::Leaf(fragment) => self.add_fragment(fragment.as_ref()),
            Node::Container {
                direction,
                children,
            } => {
                self.open(*direction);
                for child in children {
                    self.add_node(child);
                }
                self.close();
            }
        }
    }

    pub fn build(self) -> String {
        self.output
    }
}

/// Serialize a container tree to markup
pub fn render_markup<F: AsRef<str>>(node: &Node<F>, config: &MarkupConfig) -> String {
    let mut builder = MarkupBuilder::new(config);
    builder.add_node(node);
    builder.build()
}
