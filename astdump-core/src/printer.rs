//! Diagnostic tree printer.
//!
//! The printer walks a live tree and interprets the `Schema` directly, one
//! descriptor lookup per node, with the same layout rules the emitter bakes
//! into generated code:
//!
//! ```text
//! @@ C AST @@
//! CProgram:
//!   List[1]:
//!     CFunDecl:
//!       CFunctionDeclaration:
//!         name: main
//!         List[0]:
//!         None:
//!         None:
//!         None:
//! ```
//!
//! `depth` is the number of nodes on the path from the root, inclusive.
//! A line at depth `d` is indented by `d - 1` steps of `TAB_SIZE` spaces.

use std::io::Write;

use crate::error::{DumpError, DumpResult};
use crate::node::Node;
use crate::schema::{Cardinality, ChildCardinality, ChildField, Schema, ScalarField};
use crate::token::Token;

pub const TAB_SIZE: usize = 2;

/// Start a new line indented for `depth`.
pub fn write_indent<W: Write + ?Sized>(out: &mut W, depth: usize) -> DumpResult {
    let width = depth.saturating_sub(1) * TAB_SIZE;
    write!(out, "\n{:width$}", "")?;
    Ok(())
}

pub fn write_line<W: Write + ?Sized>(out: &mut W, text: &str, depth: usize) -> DumpResult {
    write_indent(out, depth)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// `label:` or `label: value` at `depth`.
pub fn write_field<W: Write + ?Sized>(out: &mut W, label: &str, value: &str, depth: usize) -> DumpResult {
    write_indent(out, depth)?;
    if value.is_empty() {
        write!(out, "{label}:")?;
    } else {
        write!(out, "{label}: {value}")?;
    }
    Ok(())
}

pub fn write_title<W: Write + ?Sized>(out: &mut W, title: &str) -> DumpResult {
    write!(out, "@@ {title} @@")?;
    Ok(())
}

pub struct Printer<'s, W: Write> {
    schema: &'s Schema,
    pub(crate) out: W,
}

impl<'s, W: Write> Printer<'s, W> {
    pub fn new(schema: &'s Schema, out: W) -> Self {
        Printer { schema, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Title, body, trailing line break. The writer is flushed even when
    /// the body fails so the partial dump stays visible.
    pub(crate) fn section(
        &mut self,
        title: &str,
        body: impl FnOnce(&mut Self) -> DumpResult,
    ) -> DumpResult {
        let result = write_title(&mut self.out, title)
            .and_then(|()| body(self))
            .and_then(|()| writeln!(self.out).map_err(DumpError::from));
        let flushed = self.out.flush();
        if let Err(err) = &result {
            tracing::error!(section = title, error = %err, "diagnostic dump aborted");
        }
        result?;
        flushed?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(label = %label))]
    pub fn print_tree(&mut self, root: Option<&Node>, label: &str) -> DumpResult {
        self.section(label, |printer| printer.print_node(root, 0))
    }

    /// Print `node` one level below a parent at `depth`.
    pub fn print_node(&mut self, node: Option<&Node>, depth: usize) -> DumpResult {
        let Some(node) = node else {
            return write_field(&mut self.out, "None", "", depth + 1);
        };
        let schema = self.schema;
        let descriptor = schema
            .get(node.tag())
            .ok_or_else(|| DumpError::DispatchMismatch(node.tag().to_string()))?;

        let depth = depth + 1;
        write_field(&mut self.out, &descriptor.name, "", depth)?;
        for field in &descriptor.scalars {
            self.print_scalar(node, field, depth)?;
        }
        for field in &descriptor.children {
            self.print_child(node, field, depth)?;
        }
        Ok(())
    }

    fn print_scalar(&mut self, node: &Node, field: &ScalarField, depth: usize) -> DumpResult {
        match field.cardinality {
            Cardinality::Single => {
                let value = node.scalar(&field.name, field.ty)?;
                write_field(&mut self.out, &field.name, &value.text(), depth + 1)
            }
            Cardinality::List => {
                let values = node.scalar_list(&field.name, field.ty)?;
                write_field(&mut self.out, &format!("List[{}]", values.len()), "", depth + 1)?;
                for value in values {
                    write_field(&mut self.out, field.ty.name(), &value.text(), depth + 2)?;
                }
                Ok(())
            }
        }
    }

    fn print_child(&mut self, node: &Node, field: &ChildField, depth: usize) -> DumpResult {
        match field.cardinality {
            ChildCardinality::Single => self.print_node(node.child(&field.name)?, depth),
            ChildCardinality::List => {
                let items = node.child_list(&field.name)?;
                write_field(&mut self.out, &format!("List[{}]", items.len()), "", depth + 1)?;
                for item in items {
                    self.print_node(Some(item), depth + 1)?;
                }
                Ok(())
            }
            ChildCardinality::Map => {
                let entries = node.child_map(&field.name)?;
                write_field(&mut self.out, &format!("Dict[{}]", entries.len()), "", depth + 1)?;
                for (key, item) in entries {
                    write_field(&mut self.out, &format!("[{key}]"), "", depth + 2)?;
                    self.print_node(Some(item), depth + 2)?;
                }
                Ok(())
            }
        }
    }

    pub fn print_tokens(&mut self, tokens: &[Token]) -> DumpResult {
        self.section("Tokens", |printer| {
            write_field(&mut printer.out, &format!("List[{}]", tokens.len()), "", 1)?;
            for token in tokens {
                write_line(&mut printer.out, &token.display(), 2)?;
            }
            Ok(())
        })
    }
}
