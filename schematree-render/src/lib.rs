//! Rendering of controller schema documents as indented trees.
//!
//! [`SchemaTreeDisplay`] walks a [`schematree_model::SchemaNode`] depth-first
//! and emits one line per container, list, leaf and RPC, indented two spaces
//! per level. [`describe_type`] produces the short type labels used on leaf
//! lines.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod describe;
mod error;
mod options;
mod output;
mod tree;
mod wrap;

pub use describe::{ELLIPSIS, ENUM_PREVIEW_LEN, describe_type};
pub use error::{RenderError, Result, TypeError};
pub use options::RenderOptions;
pub use output::{Output, TerminalOutput};
pub use tree::SchemaTreeDisplay;
pub use wrap::{INDENT, WRAP_WIDTH, description_lines, wrap};
