use crate::document::{self, PdfDocument};
use crate::{keys, MetadataConfig, Result};
use chrono::Local;
use lopdf::Object;
use log::debug;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Merge `entries` into the metadata of the PDF at `path`, replacing the file
/// atomically.
///
/// Existing entries, standard or custom, are kept; an entry whose key is
/// already present is overwritten. Keys are given without the `/` of PDF name
/// syntax. An empty `entries` rewrites the document with its metadata
/// unchanged.
///
/// The new document is written to a temporary file in the same directory and
/// renamed over `path`. On any error `path` is left untouched and the
/// temporary file is removed.
///
/// # Example
///
/// ```no_run
/// use std::collections::HashMap;
///
/// let entries = HashMap::from([("Reviewer", "jdoe")]);
/// pdfmeta::write_metadata("report.pdf", &entries).unwrap();
/// ```
pub fn write_metadata<P, I, K, V>(path: P, entries: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    write_metadata_with_config(path, entries, &MetadataConfig::default())
}

/// Like [`write_metadata`], with explicit [`MetadataConfig`] options.
pub fn write_metadata_with_config<P, I, K, V>(
    path: P,
    entries: I,
    config: &MetadataConfig,
) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let path = path.as_ref();
    let entries = prepare_entries(entries)?;

    let source = document::open(path)?;
    let permissions = source.metadata()?.permissions();

    let mut temp = NamedTempFile::new_in(parent_dir(path))?;
    {
        let mut out = BufWriter::new(temp.as_file_mut());
        merge(BufReader::new(source), &mut out, entries, config)?;
        out.flush()?;
    }
    temp.as_file().set_permissions(permissions)?;
    if config.sync_before_replace {
        temp.as_file().sync_all()?;
    }

    // Dropping `temp` on any early return above deletes it.
    temp.persist(path).map_err(|e| e.error)?;
    debug!("replaced {}", path.display());
    Ok(())
}

/// Merge `entries` into the metadata of the PDF read from `source` and write
/// the result to `target`. Nothing touches the filesystem.
pub fn write_metadata_to<R, W, I, K, V>(
    source: R,
    target: &mut W,
    entries: I,
    config: &MetadataConfig,
) -> Result<()>
where
    R: Read,
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let entries = prepare_entries(entries)?;
    merge(source, target, entries, config)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Check every key and encode every value before anything is read or written.
fn prepare_entries<I, K, V>(entries: I) -> Result<Vec<(Vec<u8>, Object)>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(key, value)| {
            let name = keys::to_name(key.as_ref())?;
            Ok((name, lopdf::text_string(value.as_ref())))
        })
        .collect()
}

fn merge<R: Read, W: Write>(
    source: R,
    target: &mut W,
    entries: Vec<(Vec<u8>, Object)>,
    config: &MetadataConfig,
) -> Result<()> {
    let mut document = PdfDocument::parse(source)?;
    let mut info = document.info()?;
    debug!(
        "merging {} entries into {} existing ({} pages)",
        entries.len(),
        info.len(),
        document.page_count()
    );

    for (name, value) in entries {
        info.set(name, value);
    }
    if config.update_mod_date {
        info.set("ModDate", lopdf::text_string(&pdf_date_now()));
    }

    document.set_info(info);
    document.write(target)
}

/// The directory the temporary file goes in: the target's own directory, so
/// the final rename never crosses filesystems.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Current local time as a PDF date, `D:YYYYMMDDHHmmSS+HH'mm'`.
fn pdf_date_now() -> String {
    let now = Local::now();
    let offset = now.offset().local_minus_utc();
    let sign = if offset >= 0 { '+' } else { '-' };
    let offset = offset.abs();
    format!(
        "D:{}{}{:02}'{:02}'",
        now.format("%Y%m%d%H%M%S"),
        sign,
        offset / 3600,
        (offset % 3600) / 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetadataError;

    #[test]
    fn bare_filename_uses_current_directory() {
        assert_eq!(parent_dir(Path::new("report.pdf")), Path::new("."));
        assert_eq!(parent_dir(Path::new("out/report.pdf")), Path::new("out"));
    }

    #[test]
    fn pdf_date_has_expected_shape() {
        let date = pdf_date_now();
        assert!(date.starts_with("D:"));
        // D: + 14 digits + sign + HH'mm'
        assert_eq!(date.len(), 2 + 14 + 1 + 6);
        assert!(date.ends_with('\''));
    }

    #[test]
    fn invalid_key_is_reported_before_parsing() {
        let mut out = Vec::new();
        let err = write_metadata_to(
            &b"not a pdf"[..],
            &mut out,
            [("/Bad", "x")],
            &MetadataConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MetadataError::InvalidKey(..)));
        assert!(out.is_empty());
    }
}
