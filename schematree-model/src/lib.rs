//! Schema document model for schematree.
//!
//! A controller describes its REST tree with a self-describing schema: a
//! tree of containers, lists, leaves and RPCs. This crate deserializes that
//! document into typed [`SchemaNode`]s and normalizes the paths used to
//! address it.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod document;
mod error;
mod node;
mod path;
mod types;

pub use document::SchemaDocument;
pub use error::{Error, Result, SourceContext};
pub use node::{CONFIG_DATA_SOURCE, ChildNodes, NodeKind, NodeType, SchemaNode, ShapeError};
pub use path::{DEFAULT_PATH, SchemaPath};
pub use types::{ENUMERATION, ENUMERATION_VALIDATOR, LeafType, TypeDescriptor, TypeValidator, UNION};
