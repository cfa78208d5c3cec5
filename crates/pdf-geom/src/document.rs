//! PDF Document wrapper

use crate::{PageGeometry, PdfError, Rect, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::Path;

/// Read-only wrapper over a parsed PDF document
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
}

/// Entries of the trailer Info dictionary, where present
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
}

impl DocumentInfo {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.creator.is_none()
            && self.producer.is_none()
    }
}

impl PdfDocument {
    /// Open a PDF document from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner = Document::load(path).map_err(|e| PdfError::OpenError(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Open a PDF document from bytes
    pub fn open_from_bytes(data: &[u8]) -> Result<Self> {
        let inner = Document::load_mem(data).map_err(|e| PdfError::OpenError(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Get a reference to the underlying lopdf document
    pub fn inner(&self) -> &Document {
        &self.inner
    }

    /// Get the geometry of a page (1-indexed)
    ///
    /// The media box is read from the page dictionary, following the
    /// Parent inheritance chain. A page that declares only a CropBox uses
    /// that as its media box. A page tree with neither is an error; the
    /// analyzer does not invent dimensions.
    pub fn page_geometry(&self, page: usize) -> Result<PageGeometry> {
        let pages = self.inner.get_pages();
        let page_id = *pages
            .get(&(page as u32))
            .ok_or(PdfError::InvalidPage(page, pages.len()))?;

        let crop_box = match self.inherited_entry(page_id, b"CropBox")? {
            Some(obj) => Some(self.rect_from_object(&obj)?),
            None => None,
        };
        let media_box = match self.inherited_entry(page_id, b"MediaBox")? {
            Some(obj) => self.rect_from_object(&obj)?,
            None => crop_box.ok_or(PdfError::MissingPageBox(page))?,
        };

        Ok(PageGeometry {
            media_box,
            crop_box,
            rotation: self.page_rotation(page_id)?,
        })
    }

    /// Read the trailer Info dictionary, best-effort
    ///
    /// Absent or malformed entries come back as `None`; this never fails.
    pub fn metadata(&self) -> DocumentInfo {
        let Some(dict) = self.info_dict() else {
            return DocumentInfo::default();
        };

        DocumentInfo {
            title: self.string_entry(dict, b"Title"),
            author: self.string_entry(dict, b"Author"),
            subject: self.string_entry(dict, b"Subject"),
            creator: self.string_entry(dict, b"Creator"),
            producer: self.string_entry(dict, b"Producer"),
        }
    }

    /// Look up a dictionary entry, following the Parent inheritance chain
    fn inherited_entry(&self, page_id: ObjectId, key: &[u8]) -> Result<Option<Object>> {
        let mut current_id = page_id;

        // Parent chains are shallow in practice; bound the walk
        for _ in 0..10 {
            let dict = self
                .inner
                .get_object(current_id)?
                .as_dict()
                .map_err(|_| PdfError::ParseError("Page object is not a dictionary".to_string()))?;

            if let Ok(obj) = dict.get(key) {
                return Ok(Some(obj.clone()));
            }

            match dict.get(b"Parent") {
                Ok(Object::Reference(parent_id)) => current_id = *parent_id,
                _ => break,
            }
        }

        Ok(None)
    }

    /// Convert a page box object (direct array or reference) into a Rect
    fn rect_from_object(&self, obj: &Object) -> Result<Rect> {
        let arr = match obj {
            Object::Array(arr) => arr.clone(),
            Object::Reference(ref_id) => self
                .inner
                .get_object(*ref_id)?
                .as_array()
                .map_err(|_| {
                    PdfError::ParseError("Page box reference is not an array".to_string())
                })?
                .clone(),
            _ => return Err(PdfError::ParseError("Page box is not an array".to_string())),
        };

        if arr.len() < 4 {
            return Err(PdfError::ParseError(
                "Page box array has fewer than 4 elements".to_string(),
            ));
        }

        let mut coords = [0.0f64; 4];
        for (i, slot) in coords.iter_mut().enumerate() {
            *slot = number_from_object(&arr[i]).ok_or_else(|| {
                PdfError::ParseError(format!("Invalid page box coordinate at index {i}"))
            })?;
        }

        Ok(Rect::new(coords[0], coords[1], coords[2], coords[3]))
    }

    /// Read the page rotation (Rotate is inheritable), normalized into 0..360
    fn page_rotation(&self, page_id: ObjectId) -> Result<i64> {
        let raw = match self.inherited_entry(page_id, b"Rotate")? {
            Some(Object::Integer(v)) => v,
            Some(Object::Reference(ref_id)) => self
                .inner
                .get_object(ref_id)?
                .as_i64()
                .map_err(|_| PdfError::ParseError("Rotate is not an integer".to_string()))?,
            Some(_) => {
                return Err(PdfError::ParseError("Rotate is not an integer".to_string()));
            }
            None => 0,
        };

        Ok(raw.rem_euclid(360))
    }

    fn info_dict(&self) -> Option<&Dictionary> {
        match self.inner.trailer.get(b"Info").ok()? {
            Object::Reference(id) => self.inner.get_object(*id).ok()?.as_dict().ok(),
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    fn string_entry(&self, dict: &Dictionary, key: &[u8]) -> Option<String> {
        let obj = match dict.get(key).ok()? {
            Object::Reference(id) => self.inner.get_object(*id).ok()?,
            other => other,
        };
        match obj {
            Object::String(bytes, _) => Some(decode_pdf_text(bytes)),
            _ => None,
        }
    }
}

/// Extract a number from an Integer or Real object
fn number_from_object(obj: &Object) -> Option<f64> {
    obj.as_f32()
        .map(|v| v as f64)
        .ok()
        .or_else(|| obj.as_i64().ok().map(|v| v as f64))
}

/// Decode a PDF text string: UTF-16BE when BOM-prefixed, PDFDocEncoding
/// treated as Latin-1 otherwise
fn decode_pdf_text(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&utf16)
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
