//! Rust source generator for the tree printer.
//!
//! `emit_printer` turns a `Schema` into a standalone `print_node` function
//! with one `match` arm per descriptor, in registration order. The
//! generated code calls into this crate's `node` and `printer` modules and
//! lays out lines exactly like `Printer::print_node`.

use crate::builtins::compiler_schema;
use crate::error::SchemaError;
use crate::schema::{Cardinality, ChildCardinality, NodeDescriptor, Schema};
use crate::types::RenderRule;

const HEADER: &str = "\
// @generated by astdump from the compiler node schema. Do not edit.
";

const PROLOGUE: &str = "
pub fn print_node<W: Write>(out: &mut W, node: Option<&Node>, depth: usize) -> DumpResult {
    let Some(node) = node else {
        return write_field(out, \"None\", \"\", depth + 1);
    };
    let depth = depth + 1;
    match node.tag() {
";

const EPILOGUE: &str = "        tag => return Err(DumpError::DispatchMismatch(tag.to_string())),
    }
    Ok(())
}
";

/// Generate the printer source for `schema`. The output depends only on
/// the schema, so unchanged input yields byte-identical text.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = schema.len()))]
pub fn emit_printer(schema: &Schema) -> String {
    let mut src = String::from(HEADER);
    src.push('\n');
    src.push_str("use std::io::Write;\n\n");
    src.push_str("use astdump_core::error::{DumpError, DumpResult};\n");
    src.push_str("use astdump_core::node::Node;\n");
    src.push_str("use astdump_core::printer::write_field;\n");
    if schema.iter().any(|descriptor| !descriptor.scalars.is_empty()) {
        src.push_str("use astdump_core::types::FieldType;\n");
    }
    src.push_str(PROLOGUE);
    for descriptor in schema.iter() {
        emit_arm(&mut src, descriptor);
    }
    src.push_str(EPILOGUE);
    tracing::debug!(bytes = src.len(), "emitted printer source");
    src
}

/// Build the embedded compiler schema and emit its printer. A schema
/// defect yields no source at all.
pub fn emit_compiler_printer() -> Result<String, SchemaError> {
    let schema = compiler_schema()?;
    Ok(emit_printer(&schema))
}

fn emit_arm(src: &mut String, descriptor: &NodeDescriptor) {
    let tag = quote(&descriptor.name);
    line(src, 2, &format!("{tag} => {{"));
    line(src, 3, &format!("write_field(out, {tag}, \"\", depth)?;"));

    for field in &descriptor.scalars {
        let name = quote(&field.name);
        let ty = field.ty.rust_path();
        match (field.cardinality, field.ty.render_rule()) {
            (Cardinality::Single, RenderRule::RawText) => line(
                src,
                3,
                &format!("write_field(out, {name}, node.identifier({name})?, depth + 1)?;"),
            ),
            (Cardinality::Single, RenderRule::Canonical) => line(
                src,
                3,
                &format!("write_field(out, {name}, &node.scalar({name}, {ty})?.canonical(), depth + 1)?;"),
            ),
            (Cardinality::List, rule) => {
                let text = match rule {
                    RenderRule::RawText => "text()",
                    RenderRule::Canonical => "canonical()",
                };
                line(src, 3, &format!("let values = node.scalar_list({name}, {ty})?;"));
                line(
                    src,
                    3,
                    "write_field(out, &format!(\"List[{}]\", values.len()), \"\", depth + 1)?;",
                );
                line(src, 3, "for value in values {");
                line(
                    src,
                    4,
                    &format!(
                        "write_field(out, {}, &value.{text}, depth + 2)?;",
                        quote(field.ty.name())
                    ),
                );
                line(src, 3, "}");
            }
        }
    }

    for field in &descriptor.children {
        let name = quote(&field.name);
        match field.cardinality {
            ChildCardinality::Single => {
                line(src, 3, &format!("print_node(out, node.child({name})?, depth)?;"));
            }
            ChildCardinality::List => {
                line(src, 3, &format!("let items = node.child_list({name})?;"));
                line(
                    src,
                    3,
                    "write_field(out, &format!(\"List[{}]\", items.len()), \"\", depth + 1)?;",
                );
                line(src, 3, "for item in items {");
                line(src, 4, "print_node(out, Some(item), depth + 1)?;");
                line(src, 3, "}");
            }
            ChildCardinality::Map => {
                line(src, 3, &format!("let entries = node.child_map({name})?;"));
                line(
                    src,
                    3,
                    "write_field(out, &format!(\"Dict[{}]\", entries.len()), \"\", depth + 1)?;",
                );
                line(src, 3, "for (key, item) in entries {");
                line(src, 4, "write_field(out, &format!(\"[{key}]\"), \"\", depth + 2)?;");
                line(src, 4, "print_node(out, Some(item), depth + 2)?;");
                line(src, 3, "}");
            }
        }
    }
    line(src, 2, "}");
}

fn line(src: &mut String, level: usize, text: &str) {
    for _ in 0..level {
        src.push_str("    ");
    }
    src.push_str(text);
    src.push('\n');
}

/// Rust string literal for `text`.
fn quote(text: &str) -> String {
    format!("{text:?}")
}
