//! AsciiDoc document model.
//!
//! A document is an ordered sequence of [`Node`]s. Each node generates its own
//! lines; [`flatten`] joins them with a blank separator line after every node.

pub mod inline;
mod list;
mod table;

pub use list::List;
pub use table::Table;

/// Horizontal rule line.
pub const RULE: &str = "'''";

const HEADING_MARKER: char = '=';

/// One renderable fragment of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Rule,
    /// Emitted verbatim as a single line; embedded newlines are kept.
    Text(String),
    /// Level 0 renders as level 1.
    Heading { text: String, level: usize },
    List(List),
    Table(Table),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Heading of the given depth. Level 0 is raised to 1.
    pub fn heading(text: impl Into<String>, level: usize) -> Self {
        Node::Heading {
            text: text.into(),
            level: level.max(1),
        }
    }

    /// Lines produced by this node, in order.
    pub fn generate(&self) -> Vec<String> {
        match self {
            Node::Rule => vec![RULE.to_string()],
            Node::Text(content) => vec![content.clone()],
            Node::Heading { text, level } => {
                let marker = HEADING_MARKER.to_string().repeat((*level).max(1));
                vec![format!("{} {}", marker, text)]
            }
            Node::List(list) => list.generate(),
            Node::Table(table) => table.generate(),
        }
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Node::List(list)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}

/// Render nodes with every line newline-terminated and a blank line after
/// each node. Nothing is stripped, so outputs concatenate cleanly.
pub fn flatten_unstripped(nodes: &[Node]) -> String {
    let mut output = String::new();
    for node in nodes {
        for line in node.generate() {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
    }
    output
}

/// Render nodes into one document, trimming outer whitespace.
///
/// Blank lines between nodes survive; only the trailing separator and any
/// incidental leading/trailing whitespace go away.
pub fn flatten(nodes: &[Node]) -> String {
    flatten_unstripped(nodes).trim().to_string()
}
