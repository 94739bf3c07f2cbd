//! Indented tree rendering of schema nodes.
//!
//! # Example
//!
//! ```ignore
//! use schematree_render::{SchemaTreeDisplay, TerminalOutput};
//!
//! SchemaTreeDisplay::new(&document.root()?, "controller/core")
//!     .max_depth(Some(2))
//!     .verbose(true)
//!     .render_to(&mut TerminalOutput::new())?;
//! ```
//!
//! ```text
//! controller/core
//!   switch (list)
//!     dpid : string (config)
//!       # Datapath id
//!     admin-state : enum { up, down }
//!   clear-stats
//!     # Reset port counters (RPC)
//!     in (NONE)
//!     out (NONE)
//! ```

use schematree_model::{ChildNodes, LeafType, NodeKind, SchemaNode};

use crate::{
    Output, RenderOptions,
    describe::describe_type,
    error::{RenderError, Result},
    wrap::{INDENT, description_lines},
};

/// Depth-first schema tree formatter.
#[derive(Debug, Clone)]
pub struct SchemaTreeDisplay<'a> {
    root: &'a SchemaNode,
    name: &'a str,
    options: RenderOptions,
}

impl<'a> SchemaTreeDisplay<'a> {
    /// Create a formatter for `root`, displayed as `name`.
    pub fn new(root: &'a SchemaNode, name: &'a str) -> Self {
        Self {
            root,
            name,
            options: RenderOptions::default(),
        }
    }

    /// Replace all render options.
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the maximum depth (inclusive).
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.options = self.options.max_depth(max_depth);
        self
    }

    /// Set verbose mode.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.options = self.options.verbose(verbose);
        self
    }

    /// Render the tree to an output, one call per line.
    pub fn render_to(&self, out: &mut dyn Output) -> Result<()> {
        tracing::debug!(root = self.name, options = ?self.options, "rendering schema tree");
        render_node(out, self.root, 0, self.name, self.name, &self.options)
    }

    /// Render the tree into a list of lines.
    pub fn render_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.render_to(&mut lines)?;
        Ok(lines)
    }

    /// Render the tree into a string, each line terminated by a newline.
    pub fn render(&self) -> Result<String> {
        Ok(self
            .render_lines()?
            .into_iter()
            .map(|line| line + "\n")
            .collect())
    }
}

/// Render one node and its descendants.
///
/// `name` is what the node is displayed as; `path` is the slash-joined
/// location used in error messages.
fn render_node(
    out: &mut dyn Output,
    node: &SchemaNode,
    depth: usize,
    name: &str,
    path: &str,
    options: &RenderOptions,
) -> Result<()> {
    if !options.includes(depth) {
        return Ok(());
    }

    let indent = INDENT.repeat(depth);

    match &node.kind {
        NodeKind::Container { children } => {
            out.line(&format!("{}{}", indent, name))?;
            render_description(out, node, depth, options)?;
            render_children(out, children, depth + 1, path, options)
        }
        // The element's own line is folded into its list's line.
        NodeKind::ListElement { children } => {
            render_children(out, children, depth + 1, path, options)
        }
        NodeKind::List { element } => {
            out.line(&format!("{}{} (list)", indent, name))?;
            render_description(out, node, depth, options)?;
            render_node(out, element, depth, name, path, options)
        }
        NodeKind::Leaf(leaf) => {
            let mut line = format!("{}{} : {}", indent, name, type_label(leaf, path, options)?);
            if options.verbose && node.is_config() {
                line.push_str(" (config)");
            }
            out.line(&line)?;
            render_description(out, node, depth, options)
        }
        NodeKind::LeafList { element } => {
            let label = type_label(element, path, options)?;
            out.line(&format!("{}{} : list of {}", indent, name, label))?;
            Ok(())
        }
        NodeKind::Rpc { input, output } => {
            // The marker closes the description block when there is one.
            let mut lines = vec![format!("{}{}", indent, name)];
            if let Some(description) = node.description.as_ref().filter(|_| options.verbose) {
                lines.extend(description_lines(description, depth));
            }
            for (i, line) in lines.iter().enumerate() {
                if i + 1 == lines.len() {
                    out.line(&format!("{} (RPC)", line))?;
                } else {
                    out.line(line)?;
                }
            }

            for (label, child) in [("in", input), ("out", output)] {
                match child {
                    Some(child) => render_node(
                        out,
                        child,
                        depth + 1,
                        label,
                        &format!("{}/{}", path, label),
                        options,
                    )?,
                    // Placeholders bypass the depth cutoff.
                    None => out.line(&format!("{}{} (NONE)", INDENT.repeat(depth + 1), label))?,
                }
            }
            Ok(())
        }
    }
}

fn render_children(
    out: &mut dyn Output,
    children: &ChildNodes,
    depth: usize,
    parent_path: &str,
    options: &RenderOptions,
) -> Result<()> {
    for (name, child) in children {
        let path = format!("{}/{}", parent_path, name);
        render_node(out, child, depth, name, &path, options)?;
    }
    Ok(())
}

fn render_description(
    out: &mut dyn Output,
    node: &SchemaNode,
    depth: usize,
    options: &RenderOptions,
) -> Result<()> {
    if !options.verbose {
        return Ok(());
    }
    if let Some(description) = &node.description {
        for line in description_lines(description, depth) {
            out.line(&line)?;
        }
    }
    Ok(())
}

fn type_label(leaf: &LeafType, path: &str, options: &RenderOptions) -> Result<String> {
    describe_type(leaf, options.verbose).map_err(|source| RenderError::Type {
        path: path.to_string(),
        source,
    })
}
