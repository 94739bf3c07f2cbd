/// Options fixed for a whole rendering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest level rendered (inclusive); `None` renders everything
    pub max_depth: Option<usize>,

    /// Show descriptions and config markers, and list every enum name
    pub verbose: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum depth.
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set verbose mode.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns true if nodes at `depth` are rendered.
    pub fn includes(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_depth() {
        let options = RenderOptions::new();
        assert!(options.includes(0));
        assert!(options.includes(1000));
    }

    #[test]
    fn test_max_depth_is_inclusive() {
        let options = RenderOptions::new().max_depth(Some(2));
        assert!(options.includes(2));
        assert!(!options.includes(3));
    }

    #[test]
    fn test_zero_depth_keeps_root() {
        let options = RenderOptions::new().max_depth(Some(0));
        assert!(options.includes(0));
        assert!(!options.includes(1));
    }
}
