use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Value;

pub type Attributes = BTreeMap<String, Value>;

/// A content record owned by the site generator. Helpers only read it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    identifier: String,
    attributes: Attributes,
    path: Option<String>,
}

impl Item {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Output path of the item, e.g. `/about/index.html`.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The `title` attribute when it counts as present.
    ///
    /// Empty strings, `null`, `false` and structured values are treated as
    /// absent. Numbers and `true` use their display form.
    pub fn title(&self) -> Option<Cow<'_, str>> {
        match self.attribute("title")? {
            Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(true) => Some(Cow::Borrowed("true")),
            _ => None,
        }
    }
}
