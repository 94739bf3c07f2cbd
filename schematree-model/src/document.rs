//! Loading schema documents from files and strings.

use std::{path::Path, str::FromStr};

use serde::{Serialize, ser::Error as _};
use serde_json::{Value, ser::PrettyFormatter};

use crate::{Error, Result, SchemaNode, error::SourceContext};

/// Origin name used when parsing from a bare string.
const DEFAULT_ORIGIN: &str = "schema.json";

/// A loaded JSON document.
///
/// Loading only checks that the text is JSON. The typed root node is built
/// on demand by [`SchemaDocument::root`], so a document whose nodes do not
/// match the schema node shape can still be dumped as-is.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    origin: String,
    content: String,
    raw: Value,
}

impl FromStr for SchemaDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_origin(s, DEFAULT_ORIGIN)
    }
}

impl SchemaDocument {
    /// Open and parse a schema document from a JSON file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read schema file");
        Self::from_str_with_origin(&content, &path.display().to_string())
    }

    /// Parse a JSON document, naming its origin for error reporting.
    pub fn from_str_with_origin(content: &str, origin: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(content)
            .map_err(|e| SourceContext::new(content, origin).parse_error(e))?;

        Ok(Self {
            origin: origin.to_string(),
            content: content.to_string(),
            raw,
        })
    }

    /// Get the name the document was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Get the document exactly as loaded.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Build the typed root node.
    ///
    /// Fails with a parse error pointing into the document when a node has an
    /// unknown `nodeType` or lacks a field its type requires.
    pub fn root(&self) -> Result<SchemaNode> {
        let source_ctx = SourceContext::new(self.content.as_str(), self.origin.as_str());
        serde_json::from_str(&self.content).map_err(|e| source_ctx.parse_error(e))
    }

    /// Serialize the document as JSON indented by four spaces, keys in
    /// document order.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.raw.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::NodeType;

    const SWITCH: &str = r#"{
        "nodeType": "CONTAINER",
        "description": "Switch state",
        "childNodes": {
            "name": {"nodeType": "LEAF", "leafType": "STRING", "extra": [1, 2]},
            "dpid": {"nodeType": "LEAF", "leafType": "STRING"}
        }
    }"#;

    #[test]
    fn test_from_str() {
        let doc: SchemaDocument = SWITCH.parse().unwrap();
        assert_eq!(doc.origin(), "schema.json");
        assert_eq!(doc.root().unwrap().node_type(), NodeType::Container);
        assert_eq!(doc.raw()["description"], "Switch state");
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SWITCH.as_bytes()).unwrap();

        let doc = SchemaDocument::open(file.path()).unwrap();
        assert_eq!(doc.origin(), file.path().display().to_string());
        assert_eq!(doc.root().unwrap().children().unwrap().len(), 2);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaDocument::open(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_invalid_json_has_span() {
        let err = "{\n  \"nodeType\": \n}"
            .parse::<SchemaDocument>()
            .unwrap_err();
        let Error::Parse { span, .. } = *err else {
            panic!("expected parse error");
        };
        assert!(span.is_some());
    }

    #[test]
    fn test_unknown_node_type_is_parse_error() {
        let doc: SchemaDocument = r#"{"nodeType": "NOTIFICATION"}"#.parse().unwrap();
        let err = doc.root().unwrap_err();
        let Error::Parse { source, .. } = *err else {
            panic!("expected parse error");
        };
        assert!(source.to_string().contains("unknown node type `NOTIFICATION`"));
    }

    #[test]
    fn test_pretty_json_uses_four_spaces_and_keeps_order() {
        let doc: SchemaDocument =
            r#"{"nodeType": "CONTAINER", "childNodes": {"b": {"nodeType": "CONTAINER"}, "a": {"nodeType": "CONTAINER"}}}"#
                .parse()
                .unwrap();

        let pretty = doc.to_pretty_json().unwrap();
        assert_eq!(
            pretty,
            r#"{
    "nodeType": "CONTAINER",
    "childNodes": {
        "b": {
            "nodeType": "CONTAINER"
        },
        "a": {
            "nodeType": "CONTAINER"
        }
    }
}"#
        );
    }

    #[test]
    fn test_pretty_json_reproduces_document() {
        let doc: SchemaDocument = SWITCH.parse().unwrap();
        let reparsed: Value = serde_json::from_str(&doc.to_pretty_json().unwrap()).unwrap();
        assert_eq!(&reparsed, doc.raw());
    }

    #[test]
    fn test_unknown_node_type_still_dumps() {
        let doc: SchemaDocument = r#"{"nodeType":"CHOICE","childNodes":{}}"#.parse().unwrap();
        assert!(doc.root().is_err());
        assert_eq!(
            doc.to_pretty_json().unwrap(),
            "{\n    \"nodeType\": \"CHOICE\",\n    \"childNodes\": {}\n}"
        );
    }
}
