use crate::document::{self, PdfDocument};
use crate::{keys, pdf_utils, MetadataMap, Result};
use log::{debug, warn};
use std::io::{BufReader, Read};
use std::path::Path;

/// Read the metadata of the PDF at `path`.
///
/// With `exclude_standard`, the eight keys in [`crate::STANDARD_KEYS`] are
/// left out, so only custom metadata is returned. A document without any
/// (remaining) metadata yields an empty map.
///
/// # Example
///
/// ```no_run
/// let all = pdfmeta::read_metadata("report.pdf", false).unwrap();
/// println!("Title: {:?}", all.get("Title"));
/// ```
pub fn read_metadata<P: AsRef<Path>>(path: P, exclude_standard: bool) -> Result<MetadataMap> {
    let path = path.as_ref();
    let file = document::open(path)?;
    debug!("reading metadata from {}", path.display());
    read_metadata_from(BufReader::new(file), exclude_standard)
}

/// Read only the custom metadata of the PDF at `path`; shorthand for
/// `read_metadata(path, true)`.
pub fn read_custom_metadata<P: AsRef<Path>>(path: P) -> Result<MetadataMap> {
    read_metadata(path, true)
}

/// Read metadata from a PDF supplied as a byte stream.
pub fn read_metadata_from<R: Read>(source: R, exclude_standard: bool) -> Result<MetadataMap> {
    collect(&PdfDocument::parse(source)?, exclude_standard)
}

/// Read metadata from a PDF held in memory.
pub fn read_metadata_from_bytes(data: &[u8], exclude_standard: bool) -> Result<MetadataMap> {
    collect(&PdfDocument::from_bytes(data)?, exclude_standard)
}

fn collect(document: &PdfDocument, exclude_standard: bool) -> Result<MetadataMap> {
    let info = document.info()?;
    let mut metadata = MetadataMap::new();

    for (name, value) in info.iter() {
        let key = keys::from_name(name);
        if exclude_standard && keys::is_standard_key(&key) {
            continue;
        }
        match document.resolve(value).and_then(pdf_utils::value_to_string) {
            Some(text) => {
                metadata.insert(key, text);
            }
            None => warn!("skipping metadata entry '{key}': value has no text form"),
        }
    }

    Ok(metadata)
}
