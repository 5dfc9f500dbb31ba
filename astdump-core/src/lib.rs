//! Schema-driven diagnostic printers for compiler trees.
//!
//! The crate has two halves that share one node schema:
//!
//!   node table (builtins)
//!     -> schema    (registry of node descriptors)
//!     -> emitter   (generated `print_node` source)
//!
//!   live tree (node)
//!     -> printer   (schema-interpreting tree walker)
//!     -> tables    (symbol / typedef / backend / constant dumps)
//!
//! Higher-level tools (the `astdump` CLI, compiler debug hooks) should
//! depend on this crate rather than reimplementing the layout rules.

// ---------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------

pub mod error;

// ---------------------------------------------------------------------
// Schema: type catalog, descriptor registry, compiler node table
// ---------------------------------------------------------------------

pub mod types;
pub mod schema;
pub mod builtins;

// ---------------------------------------------------------------------
// Generation time: code emitter
// ---------------------------------------------------------------------

pub mod emitter;

// ---------------------------------------------------------------------
// Diagnostic time: live values, printer runtime, table dumps
// ---------------------------------------------------------------------

pub mod node;
pub mod token;
pub mod printer;
pub mod tables;

// ---------------------------------------------------------------------
// Public API re-exports
// ---------------------------------------------------------------------

pub use builtins::compiler_schema;
pub use emitter::{emit_compiler_printer, emit_printer};
pub use error::{DumpError, DumpResult, SchemaError};
pub use node::{Node, Scalar};
pub use printer::Printer;
pub use schema::{NodeDescriptor, Schema};
