//! Reference builder: turns records into markup nodes.
//!
//! Every record type implements [`Reference`]. Functions, methods, and
//! constructors additionally provide `table_item` for class summary tables.
//! All operations are pure; missing data omits the matching section.

mod callable;
mod class;

use crate::markup::inline::bold;
use crate::markup::Node;

/// Base depth of top-level functions and classes.
pub const TOP_LEVEL: usize = 1;
/// Base depth of methods and constructors.
pub const MEMBER_LEVEL: usize = 2;

pub const DESCRIPTION_PLACEHOLDER: &str = "<DESCRIPTION>";
pub const EXPLANATION_PLACEHOLDER: &str = "<EXPLANATION>";

pub trait Reference {
    /// Placeholder skeleton an author fills in as the docstring.
    fn docstring_template(&self) -> String;

    /// The qualified call form, e.g. `` `functions.*hello*(_name_)` ``.
    fn shape(&self) -> Node;

    /// Heading, shape, and full docstring (plus members for classes).
    fn details(&self) -> Vec<Node>;
}

/// `reference.*identifier*`, or just `*identifier*` without a reference.
fn qualified(reference: &str, identifier: &str) -> String {
    if reference.is_empty() {
        bold(identifier)
    } else {
        format!("{}.{}", reference, bold(identifier))
    }
}

fn placeholders() -> Vec<Node> {
    vec![
        Node::text(DESCRIPTION_PLACEHOLDER),
        Node::text(EXPLANATION_PLACEHOLDER),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_with_and_without_reference() {
        assert_eq!(qualified("functions", "hello"), "functions.*hello*");
        assert_eq!(qualified("", "hello"), "*hello*");
    }
}
