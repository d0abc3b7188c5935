use serde::Serialize;
use std::path::PathBuf;

/// A file that could not be exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// The path of the failing entry, if the error carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Human-readable cause.
    pub message: String,
}

/// The tally of a completed export run.
#[derive(Debug, Default, Serialize)]
pub struct ExportSummary {
    /// Where the document was written.
    ///
    /// Empty when the export targeted an arbitrary writer.
    pub output_path: PathBuf,
    /// The number of sections written.
    pub exported: usize,
    /// Files whose bytes were not valid UTF-8 and were decoded with replacement characters.
    pub lossy: Vec<PathBuf>,
    /// Files or directory entries that failed and were skipped.
    pub failures: Vec<FileFailure>,
    /// Directories skipped because they had already been visited through another path.
    pub skipped_cycles: usize,
}

impl ExportSummary {
    /// True when every matching file was exported.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
