use crate::error::ExportError;
use crate::filter::ExtensionFilter;
use crate::options::ExportOptions;
use crate::output::MarkdownWriter;
use crate::types::{ExportSummary, FileFailure};
use crate::walk::Walker;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Exports every matching file under `options.root` into `options.output_path`.
///
/// The output file is truncated first. Files that cannot be read are recorded in the
/// returned summary and skipped; failures writing the output abort the run.
pub fn export(options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    // Validate before the output is truncated.
    let filter = ExtensionFilter::new(&options.extensions)?;
    let walker = Walker::new(options)?;

    let output_path = &options.output_path;
    let file = File::create(output_path).map_err(|e| ExportError::io(output_path, e))?;
    let own_output = fs::canonicalize(output_path).ok();

    let mut summary = run(
        walker,
        &filter,
        BufWriter::new(file),
        output_path,
        own_output.as_deref(),
    )?;
    summary.output_path = output_path.clone();
    Ok(summary)
}

/// Same as [`export`], but writes the document to `writer` instead of `options.output_path`.
pub fn export_to_writer<W: Write>(
    options: &ExportOptions,
    writer: W,
) -> Result<ExportSummary, ExportError> {
    let filter = ExtensionFilter::new(&options.extensions)?;
    let walker = Walker::new(options)?;
    run(walker, &filter, writer, Path::new("<writer>"), None)
}

fn run<W: Write>(
    mut walker: Walker,
    filter: &ExtensionFilter,
    writer: W,
    sink: &Path,
    skip: Option<&Path>,
) -> Result<ExportSummary, ExportError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Exporting [{}] to {}", filter, sink.display());
    let mut out = MarkdownWriter::new(writer);
    out.write_title(filter).map_err(|e| ExportError::io(sink, e))?;

    let mut summary = ExportSummary::default();
    for entry in walker.by_ref() {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                record_failure(&mut summary, e);
                continue;
            }
        };
        let Some(ext) = filter.accepts(&path) else {
            continue;
        };
        if skip.is_some_and(|own| is_same_file(&path, own)) {
            continue;
        }
        let (content, lossy) = match read_lossy(&path) {
            Ok(read) => read,
            Err(e) => {
                record_failure(&mut summary, e);
                continue;
            }
        };
        out.write_section(&path, &ext, &content)
            .map_err(|e| ExportError::io(sink, e))?;
        if lossy {
            #[cfg(feature = "logging")]
            tracing::debug!("Replaced invalid UTF-8 in {}", path.display());
            summary.lossy.push(path);
        }
        summary.exported += 1;
    }
    out.finish().map_err(|e| ExportError::io(sink, e))?;
    summary.skipped_cycles = walker.skipped_cycles();
    Ok(summary)
}

/// Reads `path` as UTF-8, replacing invalid sequences. The flag reports whether any were replaced.
fn read_lossy(path: &Path) -> Result<(String, bool), ExportError> {
    let bytes = fs::read(path).map_err(|e| ExportError::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => (text, false),
        Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
    })
}

fn record_failure(summary: &mut ExportSummary, err: ExportError) {
    #[cfg(feature = "logging")]
    tracing::warn!("Skipping: {}", err);
    summary.failures.push(FileFailure {
        path: err.path().map(PathBuf::from),
        message: err.to_string(),
    });
}

fn is_same_file(path: &Path, own: &Path) -> bool {
    path.file_name() == own.file_name() && fs::canonicalize(path).is_ok_and(|p| p == own)
}
