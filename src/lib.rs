//! # Codexport
//!
//! `codexport` walks a directory tree, keeps the files whose extension is in an allow-set
//! (`.js`, `.ts` and `.tsx` by default), and concatenates them into one Markdown document
//! with a fenced, language-tagged code block per file.
//!
//! Files are read as UTF-8 with lossy replacement. A file that cannot be read is skipped
//! and reported in the returned [`ExportSummary`] instead of aborting the run. Symbolic
//! links can be followed; every directory is visited at most once.
//!
//! # Features
//!
//! - `logging`: Enables debug and warning events via the `tracing` crate (on by default).
//!
//! # Example
//!
//! ```no_run
//! use codexport::{ExportBuilder, export};
//!
//! let options = ExportBuilder::new("./web")
//!     .extensions([".ts", ".tsx"])
//!     .exclude_patterns(vec!["node_modules".into()])
//!     .output_path("code.md")
//!     .build();
//!
//! let summary = export(&options).expect("export failed");
//! println!("Exported {} files", summary.exported);
//! for failure in &summary.failures {
//!     eprintln!("skipped: {}", failure.message);
//! }
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;
mod walk;

pub use engine::{export, export_to_writer};
pub use error::ExportError;
pub use filter::{ExtensionFilter, extension_of};
pub use options::{DEFAULT_EXTENSIONS, DEFAULT_OUTPUT, ExportBuilder, ExportOptions};
pub use types::{ExportSummary, FileFailure};
