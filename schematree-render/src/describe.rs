//! Short human-readable labels for leaf types.

use schematree_model::{ENUMERATION, ENUMERATION_VALIDATOR, LeafType, TypeDescriptor, UNION};

use crate::error::TypeError;

/// Enum names shown before truncating (unless verbose).
pub const ENUM_PREVIEW_LEN: usize = 4;

/// Marker appended to a truncated enum name list.
pub const ELLIPSIS: &str = "...";

/// Describe a leaf type, e.g. `string`, `enum { up, down }` or
/// `union { ipv4-address, ipv6-address }`.
///
/// Without a nested descriptor the plain `leafType` is used. Enumerations
/// with more than [`ENUM_PREVIEW_LEN`] names are truncated unless `verbose`.
pub fn describe_type(leaf: &LeafType, verbose: bool) -> Result<String, TypeError> {
    match &leaf.type_schema_node {
        None => plain_label(leaf.leaf_type.as_deref()),
        Some(descriptor) => describe_descriptor(descriptor, verbose),
    }
}

fn describe_descriptor(descriptor: &TypeDescriptor, verbose: bool) -> Result<String, TypeError> {
    match descriptor.leaf_type.as_deref() {
        Some(ENUMERATION) => {
            let mut names = enum_names(descriptor)?;
            if !verbose && names.len() > ENUM_PREVIEW_LEN {
                names.truncate(ENUM_PREVIEW_LEN);
                names.push(ELLIPSIS);
            }
            Ok(braced("enum", &names))
        }
        Some(UNION) => {
            let members = descriptor
                .type_schema_nodes
                .iter()
                .enumerate()
                .map(|(index, member)| {
                    member
                        .name
                        .as_deref()
                        .ok_or(TypeError::MissingUnionMemberName { index })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(braced("union", &members))
        }
        other => plain_label(other),
    }
}

fn enum_names(descriptor: &TypeDescriptor) -> Result<Vec<&str>, TypeError> {
    let validator = descriptor
        .validator(ENUMERATION_VALIDATOR)
        .ok_or(TypeError::MissingEnumValidator)?;
    let names = validator
        .names
        .as_ref()
        .ok_or(TypeError::MissingEnumNames)?;
    Ok(names.keys().map(String::as_str).collect())
}

fn plain_label(leaf_type: Option<&str>) -> Result<String, TypeError> {
    leaf_type
        .map(str::to_lowercase)
        .ok_or(TypeError::MissingLeafType)
}

fn braced(keyword: &str, items: &[&str]) -> String {
    format!("{} {{ {} }}", keyword, items.join(", "))
}
