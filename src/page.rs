//! Module reference page: every documented record under one reference path.
//!
//! Pages are assembled in code or loaded from the JSON document an extractor
//! writes:
//!
//! ```json
//! {
//!   "reference": "animals",
//!   "description": "optional page introduction",
//!   "policy": { "receivers": ["self", "cls"], "hidden": "^_" },
//!   "functions": [{ "identifier": "hello", "parameters": [{ "name": "name", "type_label": "str" }] }],
//!   "classes": [{ "identifier": "Cat", "docstring": "...", "members": [ ... ] }]
//! }
//! ```

use crate::markup::inline::code;
use crate::markup::{flatten, Node};
use crate::model::{ClassRecord, FunctionRecord, FunctionSource};
use crate::policy::{Policy, PolicyConfig};
use crate::reference::Reference;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default)]
pub struct Page {
    reference: String,
    description: Option<String>,
    functions: Vec<FunctionRecord>,
    classes: Vec<ClassRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageSource {
    reference: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    policy: PolicyConfig,
    #[serde(default)]
    functions: Vec<FunctionSource>,
    #[serde(default)]
    classes: Vec<ClassSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassSource {
    identifier: String,
    #[serde(default)]
    docstring: String,
    #[serde(default)]
    members: Vec<FunctionSource>,
}

impl Page {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self
    }

    pub fn add_function(&mut self, function: FunctionRecord) {
        self.functions.push(function);
    }

    pub fn add_class(&mut self, class: ClassRecord) {
        self.classes.push(class);
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn functions(&self) -> &[FunctionRecord] {
        &self.functions
    }

    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    /// Load a page from the extractor's JSON document.
    ///
    /// Functions without an explicit reference path, and classes, take the
    /// page's; class members are sorted into constructor and methods under
    /// the document's policy.
    pub fn from_json(input: &str) -> Result<Self> {
        let source: PageSource =
            serde_json::from_str(input).context("failed to parse page document")?;
        let policy = Policy::from_config(source.policy)?;

        let mut page = Page::new(&source.reference)
            .with_description(source.description.unwrap_or_default());

        for function in source.functions {
            let identifier = function.identifier.clone();
            let mut record = FunctionRecord::try_from(function)
                .with_context(|| format!("invalid function `{}`", identifier))?;
            if record.reference().is_empty() {
                record = record.with_reference(&source.reference);
            }
            page.add_function(record);
        }

        for class in source.classes {
            let mut members = Vec::with_capacity(class.members.len());
            for member in class.members {
                let identifier = member.identifier.clone();
                members.push(FunctionRecord::try_from(member).with_context(|| {
                    format!("invalid member `{}.{}`", class.identifier, identifier)
                })?);
            }
            page.add_class(ClassRecord::from_members(
                class.identifier,
                &source.reference,
                &class.docstring,
                members,
                &policy,
            ));
        }

        tracing::debug!(
            reference = %page.reference,
            functions = page.functions.len(),
            classes = page.classes.len(),
            "loaded page"
        );
        Ok(page)
    }

    /// Title, optional introduction, then each function and class behind a rule.
    pub fn nodes(&self) -> Vec<Node> {
        let mut content = vec![Node::heading(code(&self.reference), 1)];
        if let Some(ref description) = self.description {
            content.push(Node::text(description.trim()));
        }
        for function in &self.functions {
            content.push(Node::Rule);
            content.extend(function.details());
        }
        for class in &self.classes {
            content.push(Node::Rule);
            content.extend(class.details());
        }
        content
    }

    pub fn render(&self) -> String {
        flatten(&self.nodes())
    }

    /// Docstring skeletons for every record on the page. Functions and
    /// classes are keyed by identifier; a class's constructor and methods
    /// follow it, keyed `Class.member` by their declared member name.
    pub fn templates(&self) -> Vec<(String, String)> {
        let mut templates = Vec::new();
        for function in &self.functions {
            templates.push((function.identifier().to_string(), function.docstring_template()));
        }
        for class in &self.classes {
            templates.push((class.identifier().to_string(), class.docstring_template()));
            if let Some(constructor) = class.constructor() {
                let name = format!("{}.{}", class.identifier(), constructor.method().function().identifier());
                templates.push((name, constructor.docstring_template()));
            }
            for method in class.methods() {
                let name = format!("{}.{}", class.identifier(), method.function().identifier());
                templates.push((name, method.docstring_template()));
            }
        }
        templates
    }
}
