//! Functions, methods, and constructors share one rendering path; they differ
//! only in displayed identifier and heading depth.

use super::{placeholders, qualified, Reference, MEMBER_LEVEL, TOP_LEVEL};
use crate::markup::inline::{bold, code, emphasis};
use crate::markup::{flatten, List, Node};
use crate::model::{ConstructorRecord, FunctionRecord, MethodRecord, Parameter};

struct Callable<'a> {
    identifier: &'a str,
    function: &'a FunctionRecord,
    level: usize,
}

impl Callable<'_> {
    fn docstring_template(&self) -> String {
        let mut content = placeholders();

        if !self.function.parameters().is_empty() {
            content.push(Node::heading("parameters", self.level + 2));
            let mut parameters = List::new();
            for parameter in self.function.parameters() {
                parameters.add_item(parameter_item(parameter));
            }
            content.push(parameters.into());
        }

        let return_type = self.function.return_type();
        if !return_type.is_empty() {
            content.push(Node::heading("returns", self.level + 2));
            content.push(Node::text(format!(
                "{} - <RETURN DESCRIPTION>",
                emphasis(return_type)
            )));
        }

        flatten(&content)
    }

    fn table_item(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(3);
        let return_type = self.function.return_type();
        if !return_type.is_empty() {
            row.push(code(&emphasis(return_type)));
        }
        row.push(code(&bold(self.identifier)));
        row.push(self.function.description().to_string());
        row
    }

    fn shape(&self) -> Node {
        let parameters = self
            .function
            .parameters()
            .iter()
            .map(|p| emphasis(&p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let call = format!(
            "{}({})",
            qualified(self.function.reference(), self.identifier),
            parameters
        );
        Node::text(code(&call))
    }

    fn details(&self) -> Vec<Node> {
        let mut content = vec![
            Node::heading(code(self.identifier), self.level + 1),
            self.shape(),
        ];
        let docstring = self.function.docstring();
        if !docstring.is_empty() {
            content.push(Node::text(docstring));
        }
        content
    }
}

/// `_str_ *name* (optional) - <PARAMETER DESCRIPTION>`; the type is left out
/// when the parameter is unannotated.
fn parameter_item(parameter: &Parameter) -> String {
    let mut item = String::new();
    if !parameter.type_label.is_empty() {
        item.push_str(&emphasis(&parameter.type_label));
        item.push(' ');
    }
    item.push_str(&bold(&parameter.name));
    if parameter.optional {
        item.push_str(" (optional)");
    }
    item.push_str(" - <PARAMETER DESCRIPTION>");
    item
}

impl FunctionRecord {
    fn callable(&self) -> Callable<'_> {
        Callable {
            identifier: self.identifier(),
            function: self,
            level: TOP_LEVEL,
        }
    }

    /// Summary row: optional return type, identifier, one-line description.
    pub fn table_item(&self) -> Vec<String> {
        self.callable().table_item()
    }
}

impl MethodRecord {
    fn callable(&self) -> Callable<'_> {
        Callable {
            identifier: self.function().identifier(),
            function: self.function(),
            level: MEMBER_LEVEL,
        }
    }

    pub fn table_item(&self) -> Vec<String> {
        self.callable().table_item()
    }
}

impl ConstructorRecord {
    fn callable(&self) -> Callable<'_> {
        Callable {
            identifier: self.identifier(),
            function: self.method().function(),
            level: MEMBER_LEVEL,
        }
    }

    pub fn table_item(&self) -> Vec<String> {
        self.callable().table_item()
    }
}

macro_rules! impl_reference {
    ($($record:ty),*) => {$(
        impl Reference for $record {
            fn docstring_template(&self) -> String {
                self.callable().docstring_template()
            }

            fn shape(&self) -> Node {
                self.callable().shape()
            }

            fn details(&self) -> Vec<Node> {
                self.callable().details()
            }
        }
    )*};
}

impl_reference!(FunctionRecord, MethodRecord, ConstructorRecord);
