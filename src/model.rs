//! Records handed over by an extractor. Immutable and format-agnostic.
//!
//! Records are validated once at construction; everything downstream can rely
//! on parameters being well-formed (optional parameters only ever trail
//! required ones).

use crate::policy::Policy;
use anyhow::{bail, Result};
use serde::Deserialize;

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    pub name: String,
    /// Type annotation as written; empty if unannotated
    #[serde(default)]
    pub type_label: String,
    /// True iff the parameter has a default value
    #[serde(default)]
    pub optional: bool,
}

impl Parameter {
    pub fn required(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
            optional: true,
        }
    }

    /// Build parameters from parallel name/type lists and a count of default
    /// values. Defaults always bind to the trailing parameters.
    pub fn from_parallel<N, T>(names: &[N], types: &[T], default_count: usize) -> Result<Vec<Self>>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        if names.len() != types.len() {
            bail!(
                "{} parameter names but {} type labels",
                names.len(),
                types.len()
            );
        }
        if default_count > names.len() {
            bail!(
                "{} default values for {} parameters",
                default_count,
                names.len()
            );
        }
        let first_optional = names.len() - default_count;
        Ok(names
            .iter()
            .zip(types)
            .enumerate()
            .map(|(index, (name, type_label))| Self {
                name: name.as_ref().to_string(),
                type_label: type_label.as_ref().to_string(),
                optional: index >= first_optional,
            })
            .collect())
    }
}

/// A free function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FunctionSource")]
pub struct FunctionRecord {
    identifier: String,
    reference: String,
    parameters: Vec<Parameter>,
    return_type: String,
    docstring: String,
    description: String,
}

/// Unvalidated wire form of a [`FunctionRecord`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionSource {
    pub identifier: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub docstring: String,
}

impl TryFrom<FunctionSource> for FunctionRecord {
    type Error = anyhow::Error;

    fn try_from(source: FunctionSource) -> Result<Self> {
        FunctionRecord::new(
            source.identifier,
            source.reference,
            source.parameters,
            source.return_type,
            &source.docstring,
        )
    }
}

impl FunctionRecord {
    pub fn new(
        identifier: impl Into<String>,
        reference: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: impl Into<String>,
        docstring: &str,
    ) -> Result<Self> {
        let identifier = identifier.into();
        if let Some(pair) = parameters
            .windows(2)
            .find(|pair| pair[0].optional && !pair[1].optional)
        {
            bail!(
                "{}: required parameter `{}` follows optional parameter `{}`",
                identifier,
                pair[1].name,
                pair[0].name
            );
        }
        let (docstring, description) = split_docstring(docstring);
        Ok(Self {
            identifier,
            reference: reference.into(),
            parameters,
            return_type: return_type.into(),
            docstring,
            description,
        })
    }

    /// Same record reachable under another path.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn parameter_types(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.type_label.as_str()).collect()
    }

    pub fn parameter_optional(&self) -> Vec<bool> {
        self.parameters.iter().map(|p| p.optional).collect()
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn docstring(&self) -> &str {
        &self.docstring
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A function declared inside a class, receiver removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    function: FunctionRecord,
    class_level: bool,
}

impl MethodRecord {
    /// Strip the implicit receiver (if the first parameter is one) and note
    /// whether it marks a class-level method.
    pub fn from_function(mut function: FunctionRecord, policy: &Policy) -> Self {
        let mut class_level = false;
        let has_receiver = function
            .parameters
            .first()
            .is_some_and(|first| policy.is_receiver(&first.name));
        if has_receiver {
            let receiver = function.parameters.remove(0);
            class_level = policy.is_class_receiver(&receiver.name);
            tracing::debug!(
                method = %function.identifier,
                receiver = %receiver.name,
                class_level,
                "stripped receiver"
            );
        }
        Self {
            function,
            class_level,
        }
    }

    pub fn function(&self) -> &FunctionRecord {
        &self.function
    }

    pub fn is_class_level(&self) -> bool {
        self.class_level
    }
}

/// A constructor, displayed under its class's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorRecord {
    method: MethodRecord,
    identifier: String,
}

impl ConstructorRecord {
    pub fn new(method: MethodRecord, class_identifier: impl Into<String>) -> Self {
        Self {
            method,
            identifier: class_identifier.into(),
        }
    }

    /// The owning class's identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn method(&self) -> &MethodRecord {
        &self.method
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    identifier: String,
    reference: String,
    docstring: String,
    description: String,
    constructor: Option<ConstructorRecord>,
    methods: Vec<MethodRecord>,
}

impl ClassRecord {
    pub fn new(
        identifier: impl Into<String>,
        reference: impl Into<String>,
        docstring: &str,
        constructor: Option<ConstructorRecord>,
        methods: Vec<MethodRecord>,
    ) -> Self {
        let (docstring, description) = split_docstring(docstring);
        Self {
            identifier: identifier.into(),
            reference: reference.into(),
            docstring,
            description,
            constructor,
            methods,
        }
    }

    /// Sort a class's member functions into constructor and methods.
    ///
    /// Hidden members are dropped. Members without a reference path of their
    /// own get one: methods the class identifier, the constructor the class's
    /// own reference path. A later constructor replaces an earlier one.
    pub fn from_members(
        identifier: impl Into<String>,
        reference: impl Into<String>,
        docstring: &str,
        members: Vec<FunctionRecord>,
        policy: &Policy,
    ) -> Self {
        let identifier = identifier.into();
        let reference = reference.into();
        let mut constructor: Option<ConstructorRecord> = None;
        let mut methods = Vec::new();

        for member in members {
            let name = member.identifier().to_string();
            if policy.is_constructor(&name) {
                if constructor.is_some() {
                    tracing::warn!(class = %identifier, "constructor declared twice, keeping the last");
                }
                let method = MethodRecord::from_function(default_reference(member, &reference), policy);
                constructor = Some(ConstructorRecord::new(method, &identifier));
            } else if policy.is_hidden(&name) {
                tracing::debug!(class = %identifier, member = %name, "skipping hidden member");
            } else {
                methods.push(MethodRecord::from_function(default_reference(member, &identifier), policy));
            }
        }

        Self::new(identifier, reference, docstring, constructor, methods)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn docstring(&self) -> &str {
        &self.docstring
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn constructor(&self) -> Option<&ConstructorRecord> {
        self.constructor.as_ref()
    }

    pub fn methods(&self) -> &[MethodRecord] {
        &self.methods
    }
}

/// Give a record the fallback path unless it already carries one.
fn default_reference(function: FunctionRecord, fallback: &str) -> FunctionRecord {
    if function.reference().is_empty() {
        function.with_reference(fallback)
    } else {
        function
    }
}

/// Trim a raw docstring and take its first line as the description.
fn split_docstring(raw: &str) -> (String, String) {
    let docstring = raw.trim().to_string();
    let description = docstring.lines().next().unwrap_or_default().to_string();
    (docstring, description)
}
