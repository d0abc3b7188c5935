use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSIONS: [&str; 3] = [".js", ".ts", ".tsx"];
pub const DEFAULT_OUTPUT: &str = "code.md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub output_path: PathBuf,
    pub exclude_patterns: Vec<String>,
    pub follow_links: bool,
    pub sort: bool,
}
impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            exclude_patterns: Vec::new(),
            follow_links: false,
            sort: true,
        }
    }
}
impl ExportOptions {
    /// Loads options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        serde_json::from_str(&raw)
            .map_err(|e| ExportError::Config(format!("{}: {}", path.display(), e)))
    }
}
#[derive(Debug, Default)]
pub struct ExportBuilder {
    options: ExportOptions,
}
impl ExportBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ExportOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: ExportOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_path = path.into();
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn sort(mut self, yes: bool) -> Self {
        self.options.sort = yes;
        self
    }
    pub fn build(self) -> ExportOptions {
        self.options
    }
}
