//! Leaf type information.
//!
//! Leaves carry a plain `leafType` and, for richer kinds, a nested
//! `typeSchemaNode` descriptor. Descriptors are deserialized leniently: a
//! descriptor missing the fields its kind needs is only an error once
//! something asks for them.

use indexmap::IndexMap;
use serde::Deserialize;

/// Leaf type of an enumeration descriptor.
pub const ENUMERATION: &str = "ENUMERATION";

/// Leaf type of a union descriptor.
pub const UNION: &str = "UNION";

/// Validator type carrying the allowed enumeration names.
pub const ENUMERATION_VALIDATOR: &str = "ENUMERATION_VALIDATOR";

/// Type information of a LEAF node or of a LEAF_LIST element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafType {
    /// Primitive or compound kind, e.g. "STRING" or "ENUMERATION"
    pub leaf_type: Option<String>,

    /// Nested descriptor with enumeration/union details
    pub type_schema_node: Option<TypeDescriptor>,
}

impl LeafType {
    /// Create a leaf type with only a plain kind.
    pub fn plain(leaf_type: impl Into<String>) -> Self {
        Self {
            leaf_type: Some(leaf_type.into()),
            type_schema_node: None,
        }
    }

    /// Create a leaf type described by a nested descriptor.
    pub fn described(descriptor: TypeDescriptor) -> Self {
        Self {
            leaf_type: descriptor.leaf_type.clone(),
            type_schema_node: Some(descriptor),
        }
    }
}

/// A `typeSchemaNode` descriptor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeDescriptor {
    /// Type name (used for union members)
    pub name: Option<String>,

    /// Kind of the described type
    pub leaf_type: Option<String>,

    /// Constraints on the type's values
    pub type_validator: Vec<TypeValidator>,

    /// Member types of a union
    pub type_schema_nodes: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Find the first validator of the given type.
    pub fn validator(&self, validator_type: &str) -> Option<&TypeValidator> {
        self.type_validator
            .iter()
            .find(|v| v.validator_type == validator_type)
    }
}

/// One entry of a descriptor's `typeValidator` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypeValidator {
    #[serde(rename = "type", default)]
    pub validator_type: String,

    /// Enumeration names mapped to their values, in document order
    pub names: Option<IndexMap<String, serde_json::Value>>,
}
