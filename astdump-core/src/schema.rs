//! Node descriptor registry.
//!
//! A `Schema` is an append-only, ordered list of `NodeDescriptor`s. The
//! registration order fixes the order of the dispatch arms the emitter
//! writes, so it is preserved exactly.

use std::collections::{HashMap, HashSet};

use crate::error::SchemaError;
use crate::types::FieldType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildCardinality {
    Single,
    List,
    /// String-keyed map of children, iterated in insertion order.
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarField {
    pub ty: FieldType,
    pub name: String,
    pub cardinality: Cardinality,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildField {
    pub name: String,
    pub cardinality: ChildCardinality,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub name: String,
    pub scalars: Vec<ScalarField>,
    pub children: Vec<ChildField>,
}

/// Static form of a descriptor, in the table notation.
///
/// Scalars are `(type-name, field-name)`; a field name starting with `[`
/// is a list. Children are bare names (single), `[name` (list) or
/// `(name` (map).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: &'static str,
    pub scalars: &'static [(&'static str, &'static str)],
    pub children: &'static [&'static str],
}

impl ChildField {
    pub fn parse(spec: &str) -> ChildField {
        let (cardinality, name) = if let Some(rest) = spec.strip_prefix('[') {
            (ChildCardinality::List, rest)
        } else if let Some(rest) = spec.strip_prefix('(') {
            (ChildCardinality::Map, rest)
        } else {
            (ChildCardinality::Single, spec)
        };
        ChildField {
            name: name.to_string(),
            cardinality,
        }
    }
}

impl NodeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        NodeDescriptor {
            name: name.into(),
            scalars: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_scalar(mut self, ty: FieldType, name: impl Into<String>) -> Self {
        self.scalars.push(ScalarField {
            ty,
            name: name.into(),
            cardinality: Cardinality::Single,
        });
        self
    }

    pub fn with_scalar_list(mut self, ty: FieldType, name: impl Into<String>) -> Self {
        self.scalars.push(ScalarField {
            ty,
            name: name.into(),
            cardinality: Cardinality::List,
        });
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, cardinality: ChildCardinality) -> Self {
        self.children.push(ChildField {
            name: name.into(),
            cardinality,
        });
        self
    }

    /// Build a descriptor from table notation, resolving type names
    /// against the catalog.
    pub fn from_spec(spec: &NodeSpec) -> Result<NodeDescriptor, SchemaError> {
        let mut descriptor = NodeDescriptor::new(spec.name);
        for &(ty_name, field) in spec.scalars {
            let (cardinality, name) = match field.strip_prefix('[') {
                Some(rest) => (Cardinality::List, rest),
                None => (Cardinality::Single, field),
            };
            let ty = FieldType::from_name(ty_name).ok_or_else(|| SchemaError::UnknownFieldType {
                node: spec.name.to_string(),
                field: name.to_string(),
                ty: ty_name.to_string(),
            })?;
            descriptor.scalars.push(ScalarField {
                ty,
                name: name.to_string(),
                cardinality,
            });
        }
        descriptor
            .children
            .extend(spec.children.iter().map(|child| ChildField::parse(child)));
        Ok(descriptor)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        let names = self
            .scalars
            .iter()
            .map(|field| field.name.as_str())
            .chain(self.children.iter().map(|field| field.name.as_str()));
        for name in names {
            if name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    node: self.name.clone(),
                });
            }
            if !seen.insert(name) {
                return Err(SchemaError::DuplicateField {
                    node: self.name.clone(),
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Schema {
    descriptors: Vec<NodeDescriptor>,
    index: HashMap<String, usize>,
}

impl Schema {
    pub fn new() -> Self {
        Schema::default()
    }

    /// Register a whole table. Stops at the first rejected entry.
    pub fn from_specs(specs: &[NodeSpec]) -> Result<Schema, SchemaError> {
        let mut schema = Schema::new();
        for spec in specs {
            schema.register(NodeDescriptor::from_spec(spec)?)?;
        }
        Ok(schema)
    }

    pub fn register(&mut self, descriptor: NodeDescriptor) -> Result<(), SchemaError> {
        if self.index.contains_key(&descriptor.name) {
            return Err(SchemaError::DuplicateNode(descriptor.name));
        }
        descriptor.validate()?;
        tracing::trace!(
            node = %descriptor.name,
            scalars = descriptor.scalars.len(),
            children = descriptor.children.len(),
            "registered node descriptor"
        );
        self.index
            .insert(descriptor.name.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&NodeDescriptor> {
        self.index.get(name).map(|&position| &self.descriptors[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
