use super::{placeholders, qualified, Reference, TOP_LEVEL};
use crate::markup::inline::code;
use crate::markup::{flatten, List, Node, Table};
use crate::model::ClassRecord;

const ATTRIBUTE_PLACEHOLDER: &str = "_<ATTRIBUTE TYPE>_ *<ATTRIBUTE>* - <ATTRIBUTE_DESCRIPTION>";

/// Column widths of the method summary tables.
const UNTYPED_COLUMNS: [usize; 2] = [1, 5];
const TYPED_COLUMNS: [usize; 3] = [1, 1, 5];

impl ClassRecord {
    /// "methods" heading followed by the summary tables: methods without a
    /// return type first, then those with one. Empty tables are left out, and
    /// the whole section disappears when the class has no methods.
    pub fn method_tables(&self) -> Vec<Node> {
        let mut untyped = Table::new(UNTYPED_COLUMNS);
        let mut typed = Table::new(TYPED_COLUMNS);

        for method in self.methods() {
            if method.function().return_type().is_empty() {
                untyped.add_item(method.table_item());
            } else {
                typed.add_item(method.table_item());
            }
        }

        let mut content = Vec::new();
        if untyped.is_empty() && typed.is_empty() {
            return content;
        }
        content.push(Node::heading("methods", TOP_LEVEL + 2));
        if !untyped.is_empty() {
            content.push(untyped.into());
        }
        if !typed.is_empty() {
            content.push(typed.into());
        }
        content
    }
}

impl Reference for ClassRecord {
    fn docstring_template(&self) -> String {
        let mut content = placeholders();
        content.push(Node::heading("attributes", TOP_LEVEL + 2));
        let attributes = List::new()
            .with_item(ATTRIBUTE_PLACEHOLDER)
            .with_item(ATTRIBUTE_PLACEHOLDER);
        content.push(attributes.into());
        flatten(&content)
    }

    fn shape(&self) -> Node {
        Node::text(code(&qualified(self.reference(), self.identifier())))
    }

    fn details(&self) -> Vec<Node> {
        let mut content = vec![
            Node::heading(code(self.identifier()), TOP_LEVEL + 1),
            self.shape(),
        ];
        if !self.docstring().is_empty() {
            content.push(Node::text(self.docstring()));
        }

        content.push(Node::Rule);
        content.extend(self.method_tables());
        content.push(Node::Rule);

        if let Some(constructor) = self.constructor() {
            content.extend(constructor.details());
        }
        for method in self.methods() {
            content.extend(method.details());
        }
        content
    }
}
