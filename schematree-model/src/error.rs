use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schematree-model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw document text and the name it was loaded from (a file path
/// or the controller URL) so parse failures can point into the document.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    origin: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            origin: origin.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.origin, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span_for(&self.src, source.line(), source.column());
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert serde_json's 1-based line/column into a byte span.
///
/// serde_json reports line 0 when the error is not tied to a position
/// (e.g. an I/O failure), in which case there is nothing to label.
fn span_for(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    Some(SourceSpan::from((offset, 0)))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the path given to --file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema document")]
    #[diagnostic(
        code(schematree::parse_error),
        help("the document must be a schema node object with a known `nodeType`")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}
