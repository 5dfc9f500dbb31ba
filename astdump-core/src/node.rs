//! Live tree values handed to the printer.
//!
//! A `Node` is a tagged bag of named fields. The tag selects a
//! `NodeDescriptor`; the descriptor decides which fields are read and in
//! which order, so the insertion order of the builder calls does not
//! matter for the dump.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::error::DumpError;
use crate::types::{FieldType, RenderRule, canonical_bool, canonical_double};

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i32),
    Long(i64),
    Double(f64),
    UInt(u32),
    ULong(u64),
    Identifier(String),
    Bool(bool),
}

impl Scalar {
    pub fn field_type(&self) -> FieldType {
        match self {
            Scalar::Int(_) => FieldType::Int,
            Scalar::Long(_) => FieldType::Long,
            Scalar::Double(_) => FieldType::Double,
            Scalar::UInt(_) => FieldType::UInt,
            Scalar::ULong(_) => FieldType::ULong,
            Scalar::Identifier(_) => FieldType::Identifier,
            Scalar::Bool(_) => FieldType::Bool,
        }
    }

    /// Canonical numeric text. Identifiers come back unchanged.
    pub fn canonical(&self) -> String {
        match self {
            Scalar::Int(value) => value.to_string(),
            Scalar::Long(value) => value.to_string(),
            Scalar::Double(value) => canonical_double(*value),
            Scalar::UInt(value) => value.to_string(),
            Scalar::ULong(value) => value.to_string(),
            Scalar::Identifier(name) => name.clone(),
            Scalar::Bool(value) => canonical_bool(*value).to_string(),
        }
    }

    /// Text per the catalog rule of this value's type.
    pub fn text(&self) -> Cow<'_, str> {
        match (self.field_type().render_rule(), self) {
            (RenderRule::RawText, Scalar::Identifier(name)) => Cow::Borrowed(name.as_str()),
            _ => Cow::Owned(self.canonical()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarSlot {
    Single(Scalar),
    List(Vec<Scalar>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChildSlot {
    Single(Option<Box<Node>>),
    List(Vec<Node>),
    Map(IndexMap<String, Node>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    tag: String,
    scalars: IndexMap<String, ScalarSlot>,
    children: IndexMap<String, ChildSlot>,
}

/// Owning, insertion-ordered table of nodes (symbol, typedef, backend).
pub type Table = IndexMap<String, Node>;

/// Constant key to the name of the symbol that describes it.
pub type ConstantTable = IndexMap<String, String>;

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Node {
            tag: tag.into(),
            scalars: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn with_scalar(mut self, name: impl Into<String>, value: Scalar) -> Self {
        self.scalars.insert(name.into(), ScalarSlot::Single(value));
        self
    }

    pub fn with_scalar_list(mut self, name: impl Into<String>, values: Vec<Scalar>) -> Self {
        self.scalars.insert(name.into(), ScalarSlot::List(values));
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, child: Option<Node>) -> Self {
        self.children
            .insert(name.into(), ChildSlot::Single(child.map(Box::new)));
        self
    }

    pub fn with_children(mut self, name: impl Into<String>, children: Vec<Node>) -> Self {
        self.children.insert(name.into(), ChildSlot::List(children));
        self
    }

    pub fn with_child_map(mut self, name: impl Into<String>, entries: IndexMap<String, Node>) -> Self {
        self.children.insert(name.into(), ChildSlot::Map(entries));
        self
    }

    pub fn scalar(&self, name: &str, ty: FieldType) -> Result<&Scalar, DumpError> {
        match self.scalars.get(name) {
            Some(ScalarSlot::Single(value)) if value.field_type() == ty => Ok(value),
            _ => Err(self.mismatch(name, format!("single {ty}"))),
        }
    }

    pub fn scalar_list(&self, name: &str, ty: FieldType) -> Result<&[Scalar], DumpError> {
        match self.scalars.get(name) {
            Some(ScalarSlot::List(values)) if values.iter().all(|v| v.field_type() == ty) => {
                Ok(values.as_slice())
            }
            _ => Err(self.mismatch(name, format!("list of {ty}"))),
        }
    }

    pub fn identifier(&self, name: &str) -> Result<&str, DumpError> {
        match self.scalar(name, FieldType::Identifier)? {
            Scalar::Identifier(text) => Ok(text.as_str()),
            _ => Err(self.mismatch(name, "single TIdentifier".to_string())),
        }
    }

    pub fn child(&self, name: &str) -> Result<Option<&Node>, DumpError> {
        match self.children.get(name) {
            Some(ChildSlot::Single(child)) => Ok(child.as_deref()),
            _ => Err(self.mismatch(name, "single child".to_string())),
        }
    }

    pub fn child_list(&self, name: &str) -> Result<&[Node], DumpError> {
        match self.children.get(name) {
            Some(ChildSlot::List(children)) => Ok(children.as_slice()),
            _ => Err(self.mismatch(name, "list of children".to_string())),
        }
    }

    pub fn child_map(&self, name: &str) -> Result<&IndexMap<String, Node>, DumpError> {
        match self.children.get(name) {
            Some(ChildSlot::Map(entries)) => Ok(entries),
            _ => Err(self.mismatch(name, "map of children".to_string())),
        }
    }

    fn mismatch(&self, field: &str, expected: String) -> DumpError {
        DumpError::FieldMismatch {
            tag: self.tag.clone(),
            field: field.to_string(),
            expected,
        }
    }
}
