//! PDF engine abstraction.
//!
//! The analyzer only needs metadata, a page list, per-page text and a
//! per-page image flag. [`PdfEngine`] captures exactly that, keeping the
//! concrete PDF library (lopdf) out of the rest of the crate.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

use crate::detect::parse_header;
use crate::error::{Error, Result};
use crate::model::DocumentMetadata;

/// Form XObjects may nest; stop looking for images past this depth.
const MAX_XOBJECT_DEPTH: usize = 4;

/// Read access to a loaded PDF document.
pub trait PdfEngine {
    /// Info-dictionary metadata and page count. File size is left at 0;
    /// callers that know the file fill it in.
    fn metadata(&self) -> Result<DocumentMetadata>;

    /// Page numbers (1-indexed) in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Total number of pages.
    fn page_count(&self) -> u32 {
        self.page_numbers().len() as u32
    }

    /// Extracted plain text of a page.
    fn page_text(&self, page: u32) -> Result<String>;

    /// Whether a page draws at least one image.
    fn page_has_images(&self, page: u32) -> Result<bool>;
}

/// [`PdfEngine`] backed by `lopdf::Document`.
pub struct LopdfEngine {
    doc: LopdfDocument,
    /// Page number to page object, walked once at load time
    pages: BTreeMap<u32, ObjectId>,
}

impl LopdfEngine {
    /// Load from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        crate::detect::read_header(path)?;
        let doc = LopdfDocument::load(path)?;
        Ok(Self::from_document(doc))
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        parse_header(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc))
    }

    /// Load from a reader.
    pub fn load_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load_bytes(&data)
    }

    /// Wrap an already loaded document.
    pub fn from_document(doc: LopdfDocument) -> Self {
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; text extraction may fail");
        }
        let pages = doc.get_pages();
        Self { doc, pages }
    }

    fn page_id(&self, page: u32) -> Result<ObjectId> {
        self.pages
            .get(&page)
            .copied()
            .ok_or(Error::PageOutOfRange(page, self.pages.len() as u32))
    }

    /// Follow a reference, if `obj` is one.
    fn resolve<'a>(&'a self, obj: &'a Object) -> Option<&'a Object> {
        match obj {
            Object::Reference(id) => self.doc.get_object(*id).ok(),
            other => Some(other),
        }
    }

    fn resolve_dict<'a>(&'a self, obj: &'a Object) -> Option<&'a Dictionary> {
        match self.resolve(obj)? {
            Object::Dictionary(dict) => Some(dict),
            Object::Stream(stream) => Some(&stream.dict),
            _ => None,
        }
    }

    /// Page resources, walking up the page tree for inherited ones.
    fn page_resources(&self, page_id: ObjectId) -> Option<&Dictionary> {
        let mut node = self.doc.get_dictionary(page_id).ok()?;
        // Page trees are shallow; the bound guards against Parent cycles.
        for _ in 0..32 {
            if let Some(resources) = node.get(b"Resources").ok().and_then(|r| self.resolve_dict(r))
            {
                return Some(resources);
            }
            let parent = node.get(b"Parent").ok()?.as_reference().ok()?;
            node = self.doc.get_dictionary(parent).ok()?;
        }
        None
    }

    fn resources_have_images(&self, resources: &Dictionary, depth: usize) -> bool {
        let Some(xobjects) = resources
            .get(b"XObject")
            .ok()
            .and_then(|x| self.resolve_dict(x))
        else {
            return false;
        };

        xobjects.iter().any(|(_, obj)| {
            let Some(Object::Stream(stream)) = self.resolve(obj) else {
                return false;
            };
            match stream
                .dict
                .get(b"Subtype")
                .ok()
                .and_then(|s| s.as_name_str().ok())
            {
                Some("Image") => true,
                Some("Form") if depth < MAX_XOBJECT_DEPTH => stream
                    .dict
                    .get(b"Resources")
                    .ok()
                    .and_then(|r| self.resolve_dict(r))
                    .map(|r| self.resources_have_images(r, depth + 1))
                    .unwrap_or(false),
                _ => false,
            }
        })
    }

    fn has_inline_image(&self, page_id: ObjectId) -> bool {
        self.doc
            .get_page_content(page_id)
            .ok()
            .and_then(|data| lopdf::content::Content::decode(&data).ok())
            .map(|content| content.operations.iter().any(|op| op.operator == "BI"))
            .unwrap_or(false)
    }

    fn info_dictionary(&self) -> Option<&Dictionary> {
        self.doc
            .trailer
            .get(b"Info")
            .ok()
            .and_then(|info| self.resolve_dict(info))
    }
}

impl PdfEngine for LopdfEngine {
    fn metadata(&self) -> Result<DocumentMetadata> {
        let mut metadata = DocumentMetadata::with_page_count(self.page_count());

        if let Some(info) = self.info_dictionary() {
            let field = |key: &[u8]| get_string_from_dict(info, key).unwrap_or_default();
            metadata.title = field(b"Title");
            metadata.author = field(b"Author");
            metadata.subject = field(b"Subject");
            metadata.creator = field(b"Creator");
            metadata.producer = field(b"Producer");
            metadata.creation_date = format_pdf_date(&field(b"CreationDate"));
            metadata.modification_date = format_pdf_date(&field(b"ModDate"));
        }

        Ok(metadata)
    }

    fn page_numbers(&self) -> Vec<u32> {
        self.pages.keys().copied().collect()
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.page_id(page)?;
        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page, e)))
    }

    fn page_has_images(&self, page: u32) -> Result<bool> {
        let page_id = self.page_id(page)?;
        let from_resources = self
            .page_resources(page_id)
            .map(|r| self.resources_have_images(r, 0))
            .unwrap_or(false);
        Ok(from_resources || self.has_inline_image(page_id))
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, UTF-8, then Latin-1.
pub fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Helper to get a trimmed string from a PDF dictionary.
fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    let text = match dict.get(key).ok()? {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        Object::Name(bytes) => String::from_utf8_lossy(bytes).to_string(),
        _ => return None,
    };
    Some(text.trim().to_string())
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
pub fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let part = |range: std::ops::Range<usize>, default: u32| {
        s.get(range).and_then(|p| p.parse().ok()).unwrap_or(default)
    };
    let month = part(4..6, 1);
    let day = part(6..8, 1);
    let hour = part(8..10, 0);
    let minute = part(10..12, 0);
    let second = part(12..14, 0);

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}

/// RFC 3339 rendering of a PDF date, or the input unchanged when it does
/// not parse.
fn format_pdf_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    parse_pdf_date(raw)
        .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
        .unwrap_or_else(|| raw.to_string())
}
