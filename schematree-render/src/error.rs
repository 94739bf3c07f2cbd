use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// A type descriptor that lacks what its kind requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("no `leafType` to describe")]
    MissingLeafType,

    #[error("enumeration has no ENUMERATION_VALIDATOR")]
    MissingEnumValidator,

    #[error("enumeration validator has no `names`")]
    MissingEnumNames,

    #[error("union member {index} has no `name`")]
    MissingUnionMemberName { index: usize },
}

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("cannot describe the type of '{path}'")]
    #[diagnostic(
        code(schematree::schema_shape),
        help("the schema does not match the shape its nodeType implies; check the controller version")
    )]
    Type {
        path: String,
        #[source]
        source: TypeError,
    },

    #[error("failed to write output")]
    #[diagnostic(code(schematree::output))]
    Output(#[from] std::io::Error),
}

impl RenderError {
    /// Returns true if the reader went away (e.g. output piped into `head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, RenderError::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
