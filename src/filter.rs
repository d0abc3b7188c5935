//! Extension allow-set used to decide which files are exported.

use crate::error::ExportError;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// A normalised set of file extensions, each stored lower-cased with one leading `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Builds the set, normalising `"TS"`, `"ts"` and `".ts"` to `.ts`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] for an empty entry.
    pub fn new<I, S>(extensions: I) -> Result<Self, ExportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for raw in extensions {
            let trimmed = raw.as_ref().trim().trim_start_matches('.');
            if trimmed.is_empty() {
                return Err(ExportError::Config(format!(
                    "empty extension in allow-set: {:?}",
                    raw.as_ref()
                )));
            }
            set.insert(format!(".{}", trimmed.to_lowercase()));
        }
        Ok(Self { extensions: set })
    }

    /// Returns the extension of `path` when it is in the set.
    pub fn accepts(&self, path: &Path) -> Option<String> {
        let name = path.file_name()?.to_string_lossy();
        let ext = extension_of(&name);
        if !ext.is_empty() && self.extensions.contains(&ext) {
            Some(ext)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// Lower-cased extension of a file name, from the last `.` to the end.
///
/// Names without a `.` and dotfiles whose only `.` is the first character
/// (`.bashrc`, `.ts`) have no extension.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) if file_name[..idx].trim_start_matches('.').is_empty() => String::new(),
        Some(idx) => file_name[idx..].to_lowercase(),
        None => String::new(),
    }
}
