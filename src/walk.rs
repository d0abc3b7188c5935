//! Recursive traversal yielding every regular file under a root, each at most once.

use crate::error::ExportError;
use crate::options::ExportOptions;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub(crate) struct Walker {
    inner: ignore::Walk,
    follow_links: bool,
    skipped_cycles: Arc<AtomicUsize>,
}

impl Walker {
    pub(crate) fn new(options: &ExportOptions) -> Result<Self, ExportError> {
        let root = &options.root;
        let metadata = fs::metadata(root)
            .map_err(|e| ExportError::InvalidPath(format!("{}: {}", root.display(), e)))?;
        if !metadata.is_dir() {
            return Err(ExportError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        let canonical_root = fs::canonicalize(root).map_err(|e| ExportError::io(root, e))?;
        let matcher = build_matcher(&options.exclude_patterns)?;

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        if options.sort {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        let visited = Arc::new(Mutex::new(HashSet::from([canonical_root])));
        let skipped_cycles = Arc::new(AtomicUsize::new(0));
        let skipped = Arc::clone(&skipped_cycles);
        let walk_root = root.clone();
        builder.filter_entry(move |entry| {
            if let Some(ref matcher) = matcher {
                if is_excluded(matcher, &walk_root, entry.path()) {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Excluded: {}", entry.path().display());
                    return false;
                }
            }
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                let Ok(canonical) = fs::canonicalize(entry.path()) else {
                    return true;
                };
                let mut visited = match visited.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                if !visited.insert(canonical) {
                    #[cfg(feature = "logging")]
                    tracing::debug!(
                        "Directory already visited, skipping: {}",
                        entry.path().display()
                    );
                    skipped.fetch_add(1, Ordering::Relaxed);
                    return false;
                }
            }
            true
        });

        Ok(Self {
            inner: builder.build(),
            follow_links: options.follow_links,
            skipped_cycles,
        })
    }

    /// Directories skipped because their canonical path was already visited.
    pub(crate) fn skipped_cycles(&self) -> usize {
        self.skipped_cycles.load(Ordering::Relaxed)
    }

    fn is_regular_file(&self, entry: &ignore::DirEntry) -> bool {
        match entry.file_type() {
            Some(ft) if ft.is_file() => true,
            // Unfollowed links are yielded unless they point at a directory; a dangling
            // target then fails on read and is reported.
            Some(ft) if ft.is_symlink() && !self.follow_links => {
                !fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
            }
            _ => false,
        }
    }
}

impl Iterator for Walker {
    type Item = Result<PathBuf, ExportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if self.is_regular_file(&entry) => {
                    return Some(Ok(entry.into_path()));
                }
                Ok(_) => continue,
                Err(err) if is_loop(&err) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Symbolic link cycle, skipping: {}", err);
                    self.skipped_cycles.fetch_add(1, Ordering::Relaxed);
                    continue;
                }
                Err(err) => {
                    return Some(Err(ExportError::Walk {
                        path: error_path(&err).map(Path::to_path_buf),
                        message: err.to_string(),
                    }));
                }
            }
        }
    }
}

fn build_matcher(patterns: &[String]) -> Result<Option<GlobSet>, ExportError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut glob_builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| ExportError::Pattern(format!("'{}': {}", pattern, e)))?;
        glob_builder.add(glob);
    }
    glob_builder
        .build()
        .map(Some)
        .map_err(|e| ExportError::Pattern(format!("failed to build glob set: {}", e)))
}

/// Patterns match either the path relative to the root or the bare file name.
fn is_excluded(matcher: &GlobSet, root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    matcher.is_match(relative) || path.file_name().is_some_and(|name| matcher.is_match(name))
}

fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        _ => false,
    }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
