//! Text rendering for the `(depth, value)` walks the trees produce.
//!
//! None of the trees print anything themselves. Feed any of their `traverse` iterators to
//! [`Outline`] to get an indented listing instead.
//!
//! ```
//! use trees::general::GeneralTree;
//! use trees::render::Outline;
//!
//! let mut tree = GeneralTree::new("Company");
//! let it = tree.add_child(tree.root(), "IT").unwrap();
//! tree.add_child(it, "Diya").unwrap();
//!
//! assert_eq!(
//!     Outline::new(tree.traverse()).to_string(),
//!     " -Company\n     -IT\n         -Diya\n"
//! );
//! ```

use std::fmt::{self, Display, Formatter};

/// Spaces per level unless [`Outline::with_indent`] says otherwise.
pub const DEFAULT_INDENT: usize = 4;

/// One line per value: `depth * indent` spaces, then ` -` and the value.
#[derive(Clone, Debug)]
pub struct Outline<V> {
    lines: Vec<(usize, V)>,
    indent: usize,
}

impl<V> Outline<V> {
    /// Collects a `(depth, value)` walk for display.
    pub fn new<I>(walk: I) -> Self
    where
        I: IntoIterator<Item = (usize, V)>,
    {
        Self {
            lines: walk.into_iter().collect(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Uses `indent` spaces per level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl<V: Display> Display for Outline<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (depth, value) in &self.lines {
            writeln!(f, "{:width$} -{value}", "", width = depth * self.indent)?;
        }
        Ok(())
    }
}
