//! Markdown document writer.
//!
//! The document is a title line followed by one section per exported file:
//!
//! ````text
//! # Full Code Export (.js, .ts, .tsx)
//!
//!
//!
//! ## File: ./src/App.tsx
//! ```tsx
//! <file contents>
//! ```
//! ````
//!
//! Sections are appended in the order they are written; nothing is buffered beyond
//! the underlying writer.

use crate::filter::ExtensionFilter;
use std::io::{self, Write};
use std::path::Path;

pub struct MarkdownWriter<W: Write> {
    inner: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes the document title listing the exported extensions.
    pub fn write_title(&mut self, filter: &ExtensionFilter) -> io::Result<()> {
        write!(self.inner, "# Full Code Export ({})\n\n", filter)
    }

    /// Writes one file section. `ext` may carry its leading `.`; the fence tag never does.
    pub fn write_section(&mut self, path: &Path, ext: &str, content: &str) -> io::Result<()> {
        let tag = ext.strip_prefix('.').unwrap_or(ext);
        write!(self.inner, "\n\n## File: {}\n", path.display())?;
        writeln!(self.inner, "```{}", tag)?;
        self.inner.write_all(content.as_bytes())?;
        self.inner.write_all(b"\n```\n")
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
