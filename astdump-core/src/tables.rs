//! Dumps of the compiler's string-keyed tables.
//!
//! Plain tables go through generic dispatch. The constant table is the
//! exception: its entries are rendered as the literal they stand for,
//! either a quoted C string or a decimal double.

use std::io::Write;

use indexmap::IndexSet;

use crate::error::{DumpError, DumpResult};
use crate::node::{ConstantTable, Node, Scalar, Table};
use crate::printer::{Printer, write_field, write_indent, write_line};
use crate::types::{FieldType, canonical_double};

const CONSTANT_ATTR: &str = "ConstantAttr";
const STRING_INIT: &str = "StringInit";
const STRING_LITERAL: &str = "CStringLiteral";
const BACKEND_OBJ: &str = "BackendObj";
const BACKEND_DOUBLE: &str = "BackendDouble";

/// Depth of the `[key]` lines in every table dump.
const ENTRY_DEPTH: usize = 2;

#[derive(Debug, Clone, PartialEq)]
enum ConstantValue {
    String(Vec<u8>),
    Double(f64),
}

impl<'s, W: Write> Printer<'s, W> {
    #[tracing::instrument(level = "debug", skip_all, fields(label = %label, entries = table.len()))]
    pub fn dump_table(&mut self, table: &Table, label: &str) -> DumpResult {
        self.section(label, |printer| {
            write_field(&mut printer.out, &format!("Dict({})", table.len()), "", 1)?;
            for (key, node) in table {
                write_field(&mut printer.out, &format!("[{key}]"), "", ENTRY_DEPTH)?;
                printer.print_node(Some(node), ENTRY_DEPTH)?;
            }
            Ok(())
        })
    }

    /// Dump constants by resolving each entry's symbol in `symbols`
    /// (string constants) or `backend_symbols` (double constants).
    #[tracing::instrument(level = "debug", skip_all, fields(label = %label, entries = constants.len()))]
    pub fn dump_constant_table(
        &mut self,
        constants: &ConstantTable,
        symbols: &Table,
        backend_symbols: &Table,
        label: &str,
    ) -> DumpResult {
        self.section(label, |printer| {
            write_field(&mut printer.out, &format!("Dict({})", constants.len()), "", 1)?;
            for (key, symbol) in constants {
                write_field(&mut printer.out, &format!("[{key}]"), "", ENTRY_DEPTH)?;
                match resolve_constant(key, symbol, symbols, backend_symbols)? {
                    ConstantValue::String(bytes) => {
                        write_indent(&mut printer.out, ENTRY_DEPTH + 1)?;
                        printer.out.write_all(b"string: \"")?;
                        printer.out.write_all(&escape_string_bytes(&bytes))?;
                        printer.out.write_all(b"\"")?;
                    }
                    ConstantValue::Double(value) => {
                        write_field(&mut printer.out, "double", &canonical_double(value), ENTRY_DEPTH + 1)?;
                    }
                }
            }
            Ok(())
        })
    }

    pub fn dump_set(&mut self, set: &IndexSet<String>, label: &str) -> DumpResult {
        self.section(label, |printer| {
            write_field(&mut printer.out, &format!("Set({})", set.len()), "", 1)?;
            for name in set {
                write_line(&mut printer.out, &format!(": {name}"), ENTRY_DEPTH)?;
            }
            Ok(())
        })
    }
}

fn resolve_constant(
    key: &str,
    symbol: &str,
    symbols: &Table,
    backend_symbols: &Table,
) -> Result<ConstantValue, DumpError> {
    let attrs = match symbols.get(symbol) {
        Some(entry) => entry.child("attrs")?,
        None => None,
    };
    if let Some(attr) = attrs.filter(|attr| attr.tag() == CONSTANT_ATTR) {
        let init = attr
            .child("static_init")?
            .filter(|init| init.tag() == STRING_INIT)
            .ok_or_else(|| format_mismatch(key, "constant attribute does not hold a string initializer"))?;
        return string_bytes(key, init).map(ConstantValue::String);
    }

    let backend = backend_symbols
        .get(symbol)
        .filter(|entry| entry.tag() == BACKEND_OBJ)
        .ok_or_else(|| format_mismatch(key, &format!("no constant symbol `{symbol}`")))?;
    let is_constant = matches!(
        backend.scalar("is_constant", FieldType::Bool)?,
        Scalar::Bool(true)
    );
    let is_double = backend
        .child("assembly_type")?
        .is_some_and(|ty| ty.tag() == BACKEND_DOUBLE);
    if !(is_constant && is_double) {
        return Err(format_mismatch(key, "backend object is not a double constant"));
    }
    decode_double_key(key).map(ConstantValue::Double)
}

fn string_bytes(key: &str, init: &Node) -> Result<Vec<u8>, DumpError> {
    let literal = init
        .child("literal")?
        .filter(|literal| literal.tag() == STRING_LITERAL)
        .ok_or_else(|| format_mismatch(key, "string initializer has no literal"))?;
    literal
        .scalar_list("value", FieldType::Int)?
        .iter()
        .map(|element| match element {
            // signed chars are stored sign-extended
            Scalar::Int(value) => u8::try_from(*value)
                .or_else(|_| i8::try_from(*value).map(|byte| byte as u8))
                .map_err(|_| format_mismatch(key, "string literal holds a non-byte value")),
            _ => Err(format_mismatch(key, "string literal holds a non-byte value")),
        })
        .collect()
}

fn format_mismatch(key: &str, message: &str) -> DumpError {
    DumpError::FormatMismatch {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// C escape sequences for the bytes of a string constant. Bytes without an
/// escape are copied through unchanged.
pub fn escape_string_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        let sequence: &[u8] = match byte {
            b'\'' => b"\\'",
            b'"' => b"\\\"",
            b'?' => b"\\?",
            b'\\' => b"\\\\",
            0x07 => b"\\a",
            0x08 => b"\\b",
            0x0C => b"\\f",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x0B => b"\\v",
            _ => {
                escaped.push(byte);
                continue;
            }
        };
        escaped.extend_from_slice(sequence);
    }
    escaped
}

/// Double constants are keyed by the decimal text of their bit pattern.
pub fn decode_double_key(key: &str) -> Result<f64, DumpError> {
    key.parse::<u64>()
        .map(f64::from_bits)
        .map_err(|_| format_mismatch(key, "key is not a 64-bit bit pattern"))
}
