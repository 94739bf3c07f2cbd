//! Schema paths.

use std::{convert::Infallible, fmt, str::FromStr};

/// Path used when none is given.
pub const DEFAULT_PATH: &str = "controller";

/// A schema path in the controller's slash/hyphen addressing form.
///
/// Users type dotted paths with underscores (`controller.core.switch_config`);
/// the controller addresses the same node as `controller/core/switch-config`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaPath(String);

impl SchemaPath {
    /// Normalize a dotted path: every `.` becomes `/` and every `_` becomes `-`.
    pub fn from_dotted(path: &str) -> Self {
        Self(
            path.chars()
                .map(|c| match c {
                    '.' => '/',
                    '_' => '-',
                    c => c,
                })
                .collect(),
        )
    }

    /// Get the normalized path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SchemaPath {
    fn default() -> Self {
        Self::from_dotted(DEFAULT_PATH)
    }
}

impl FromStr for SchemaPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_dotted(s))
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SchemaPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
