//! Field type catalog for node descriptors.
//!
//! The set of primitive field types is closed. Each type carries exactly
//! one rendering rule: identifiers print as raw text, everything else goes
//! through a canonical numeric-to-text conversion that round-trips.

use core::fmt;

/// Primitive type of a scalar field, spelled as in the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `TInt`: signed 32-bit.
    Int,
    /// `TLong`: signed 64-bit.
    Long,
    /// `TDouble`: IEEE-754 binary64.
    Double,
    /// `TUInt`: unsigned 32-bit.
    UInt,
    /// `TULong`: unsigned 64-bit.
    ULong,
    /// `TIdentifier`: a name, printed verbatim.
    Identifier,
    /// `Bool`: printed as `1` / `0`.
    Bool,
}

/// How a value of a given field type turns into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRule {
    RawText,
    Canonical,
}

impl FieldType {
    pub const ALL: [FieldType; 7] = [
        FieldType::Int,
        FieldType::Long,
        FieldType::Double,
        FieldType::UInt,
        FieldType::ULong,
        FieldType::Identifier,
        FieldType::Bool,
    ];

    /// Resolve a schema spelling such as `TInt` or `Bool`.
    pub fn from_name(name: &str) -> Option<FieldType> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldType::Int => "TInt",
            FieldType::Long => "TLong",
            FieldType::Double => "TDouble",
            FieldType::UInt => "TUInt",
            FieldType::ULong => "TULong",
            FieldType::Identifier => "TIdentifier",
            FieldType::Bool => "Bool",
        }
    }

    pub fn render_rule(self) -> RenderRule {
        match self {
            FieldType::Identifier => RenderRule::RawText,
            _ => RenderRule::Canonical,
        }
    }

    /// Path of the variant as the emitter spells it in generated code.
    pub fn rust_path(self) -> &'static str {
        match self {
            FieldType::Int => "FieldType::Int",
            FieldType::Long => "FieldType::Long",
            FieldType::Double => "FieldType::Double",
            FieldType::UInt => "FieldType::UInt",
            FieldType::ULong => "FieldType::ULong",
            FieldType::Identifier => "FieldType::Identifier",
            FieldType::Bool => "FieldType::Bool",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shortest decimal text that parses back to the same `f64`. Always
/// positional; magnitudes far from 1 are written out in full.
pub fn canonical_double(value: f64) -> String {
    format!("{value}")
}

pub fn canonical_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
