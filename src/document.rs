use crate::{MetadataError, Result};
use lopdf::{Dictionary, Document, Object};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

/// Open the PDF at `path` for reading, reporting a missing file as
/// [`MetadataError::NotFound`].
pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MetadataError::NotFound(path.to_path_buf()),
        _ => MetadataError::IoError(e),
    })
}

// ── PdfDocument ───────────────────────────────────────────────────────────────
//
// The only place that touches the lopdf object graph. Everything above works
// in terms of "parse (pages + info)" and "write (pages + info)".

pub(crate) struct PdfDocument {
    document: Document,
}

impl PdfDocument {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Parse a complete PDF from `source`.
    pub(crate) fn parse<R: Read>(source: R) -> Result<Self> {
        Ok(Self {
            document: Document::load_from(source)?,
        })
    }

    /// Parse a complete PDF held in memory.
    pub(crate) fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self {
            document: Document::load_mem(data)?,
        })
    }

    // ── Metadata ──────────────────────────────────────────────────────────────

    /// Returns a copy of the `/Info` dictionary.
    ///
    /// A trailer without `/Info`, or whose `/Info` references an object that
    /// does not exist (null), yields an empty dictionary. `/Info` may be an
    /// indirect reference (the usual case) or an inline dictionary; anything
    /// else is a malformed document.
    pub(crate) fn info(&self) -> Result<Dictionary> {
        let Ok(entry) = self.document.trailer.get(b"Info") else {
            return Ok(Dictionary::new());
        };
        let dict = match entry {
            Object::Reference(id) if !self.document.objects.contains_key(id) => {
                return Ok(Dictionary::new());
            }
            Object::Reference(id) => self.document.get_object(*id)?.as_dict()?,
            inline => inline.as_dict()?,
        };
        Ok(dict.clone())
    }

    /// Replace the `/Info` dictionary, reusing its object number when the
    /// trailer already points at an existing object.
    pub(crate) fn set_info(&mut self, info: Dictionary) {
        match self
            .document
            .trailer
            .get(b"Info")
            .and_then(Object::as_reference)
        {
            Ok(id) if self.document.objects.contains_key(&id) => {
                self.document.objects.insert(id, Object::Dictionary(info));
            }
            _ => {
                let id = self.document.add_object(info);
                self.document.trailer.set("Info", id);
            }
        }
    }

    /// Follow `value` if it is an indirect reference. Returns `None` when the
    /// referenced object does not exist.
    pub(crate) fn resolve<'a>(&'a self, value: &'a Object) -> Option<&'a Object> {
        match value {
            Object::Reference(id) => self.document.get_object(*id).ok(),
            direct => Some(direct),
        }
    }

    // ── Pages & output ────────────────────────────────────────────────────────

    pub(crate) fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Serialize the whole document, pages and metadata, to `target`.
    pub(crate) fn write<W: Write>(&mut self, target: &mut W) -> Result<()> {
        self.document.save_to(target)?;
        Ok(())
    }
}
