//! Schema node types.
//!
//! A schema document is a tree of [`SchemaNode`]s. Every node carries a
//! `nodeType` tag which decides which other fields are meaningful; the tag is
//! checked while deserializing so the rest of the crate never probes for
//! field presence.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::types::{LeafType, TypeDescriptor};

/// Data source name marking a configuration node.
pub const CONFIG_DATA_SOURCE: &str = "config";

/// Ordered children of a container-like node, keyed by child name.
pub type ChildNodes = IndexMap<String, SchemaNode>;

/// The `nodeType` tag of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Container,
    List,
    ListElement,
    Leaf,
    LeafList,
    Rpc,
}

impl NodeType {
    /// All recognized tags.
    pub const ALL: [NodeType; 6] = [
        NodeType::Container,
        NodeType::List,
        NodeType::ListElement,
        NodeType::Leaf,
        NodeType::LeafList,
        NodeType::Rpc,
    ];

    /// Get the tag as it appears in the document
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Container => "CONTAINER",
            NodeType::List => "LIST",
            NodeType::ListElement => "LIST_ELEMENT",
            NodeType::Leaf => "LEAF",
            NodeType::LeafList => "LEAF_LIST",
            NodeType::Rpc => "RPC",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ShapeError::UnknownNodeType(s.to_string()))
    }
}

/// A node whose fields do not match its `nodeType`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("unknown node type `{0}`, expected one of CONTAINER, LIST, LIST_ELEMENT, LEAF, LEAF_LIST, RPC")]
    UnknownNodeType(String),

    #[error("{node_type} node is missing `{field}`")]
    MissingField {
        node_type: NodeType,
        field: &'static str,
    },
}

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct SchemaNode {
    /// Free-text description
    pub description: Option<String>,

    /// Data sources the node is backed by (e.g. "config", "operational")
    pub data_sources: Vec<String>,

    /// Tag-specific payload
    pub kind: NodeKind,
}

/// Tag-specific payload of a [`SchemaNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Named children, rendered in document order.
    Container { children: ChildNodes },

    /// A repeated structure; `element` describes one repetition.
    List { element: Box<SchemaNode> },

    /// The shape of one list repetition.
    ListElement { children: ChildNodes },

    /// A scalar value.
    Leaf(LeafType),

    /// A list of scalar values.
    LeafList { element: LeafType },

    /// A callable operation.
    Rpc {
        input: Option<Box<SchemaNode>>,
        output: Option<Box<SchemaNode>>,
    },
}

impl SchemaNode {
    /// Create a node without description or data sources.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            description: None,
            data_sources: Vec::new(),
            kind,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a data source.
    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_sources.push(source.into());
        self
    }

    /// Get the `nodeType` tag of this node.
    pub fn node_type(&self) -> NodeType {
        match &self.kind {
            NodeKind::Container { .. } => NodeType::Container,
            NodeKind::List { .. } => NodeType::List,
            NodeKind::ListElement { .. } => NodeType::ListElement,
            NodeKind::Leaf(_) => NodeType::Leaf,
            NodeKind::LeafList { .. } => NodeType::LeafList,
            NodeKind::Rpc { .. } => NodeType::Rpc,
        }
    }

    /// Returns true if the node is backed by the config data source
    pub fn is_config(&self) -> bool {
        self.data_sources.iter().any(|s| s == CONFIG_DATA_SOURCE)
    }

    /// Get the children of a container-like node.
    pub fn children(&self) -> Option<&ChildNodes> {
        match &self.kind {
            NodeKind::Container { children } | NodeKind::ListElement { children } => {
                Some(children)
            }
            _ => None,
        }
    }
}

/// Wire shape of a schema node, before the tag is checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    node_type: String,
    description: Option<String>,
    #[serde(default)]
    data_sources: Vec<String>,
    child_nodes: Option<ChildNodes>,
    list_element_schema_node: Option<Box<SchemaNode>>,
    leaf_type: Option<String>,
    type_schema_node: Option<TypeDescriptor>,
    leaf_schema_node: Option<LeafType>,
    input_schema_node: Option<Box<SchemaNode>>,
    output_schema_node: Option<Box<SchemaNode>>,
}

impl TryFrom<RawNode> for SchemaNode {
    type Error = ShapeError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let node_type: NodeType = raw.node_type.parse()?;
        let missing = |field| ShapeError::MissingField { node_type, field };

        let kind = match node_type {
            NodeType::Container => NodeKind::Container {
                children: raw.child_nodes.unwrap_or_default(),
            },
            NodeType::ListElement => NodeKind::ListElement {
                children: raw.child_nodes.unwrap_or_default(),
            },
            NodeType::List => NodeKind::List {
                element: raw
                    .list_element_schema_node
                    .ok_or_else(|| missing("listElementSchemaNode"))?,
            },
            NodeType::Leaf => NodeKind::Leaf(LeafType {
                leaf_type: raw.leaf_type,
                type_schema_node: raw.type_schema_node,
            }),
            NodeType::LeafList => NodeKind::LeafList {
                element: raw
                    .leaf_schema_node
                    .ok_or_else(|| missing("leafSchemaNode"))?,
            },
            NodeType::Rpc => NodeKind::Rpc {
                input: raw.input_schema_node,
                output: raw.output_schema_node,
            },
        };

        Ok(SchemaNode {
            description: raw.description,
            data_sources: raw.data_sources,
            kind,
        })
    }
}
