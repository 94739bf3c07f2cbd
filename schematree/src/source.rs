//! Where the schema document comes from.

use std::path::PathBuf;

use eyre::{Result, WrapErr};
use schematree_client::{ControllerClient, ControllerConfig};
use schematree_model::{SchemaDocument, SchemaPath};

use crate::commands::UnwrapOrExit;

/// Exactly one origin of the root schema node.
#[derive(Debug)]
pub enum SchemaSource {
    /// A JSON document saved earlier (e.g. with `--raw`).
    File(PathBuf),

    /// A live controller.
    Controller(ControllerConfig),
}

impl SchemaSource {
    /// Load the schema document rooted at `path`.
    ///
    /// Text that is not JSON is reported with a diagnostic pointing into the
    /// document, and the process exits. Node shapes are not checked here.
    pub fn load(&self, path: &SchemaPath) -> Result<SchemaDocument> {
        match self {
            SchemaSource::File(file) => {
                tracing::info!(file = %file.display(), "loading schema from file");
                Ok(SchemaDocument::open(file).unwrap_or_exit())
            }
            SchemaSource::Controller(config) => {
                tracing::info!(host = %config.host, path = %path, "fetching schema from controller");
                let client = ControllerClient::connect(config)
                    .wrap_err_with(|| format!("failed to connect to '{}'", config.host))?;
                let fetched = client
                    .schema(path)
                    .wrap_err_with(|| format!("failed to fetch schema for '{}'", path))?;
                Ok(SchemaDocument::from_str_with_origin(&fetched.body, &fetched.url).unwrap_or_exit())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use schematree_model::NodeType;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"nodeType": "CONTAINER", "childNodes": {{}}}}"#).unwrap();

        let source = SchemaSource::File(file.path().to_path_buf());
        let doc = source.load(&SchemaPath::default()).unwrap();
        assert_eq!(doc.root().unwrap().node_type(), NodeType::Container);
    }

    #[test]
    fn test_load_unknown_node_type_for_raw_dump() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"nodeType":"CHOICE"}}"#).unwrap();

        let source = SchemaSource::File(file.path().to_path_buf());
        let doc = source.load(&SchemaPath::default()).unwrap();
        assert_eq!(doc.to_pretty_json().unwrap(), "{\n    \"nodeType\": \"CHOICE\"\n}");
        assert!(doc.root().is_err());
    }
}
