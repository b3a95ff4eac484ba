//! DOCX document loader
//!
//! A `.docx` file is a ZIP archive whose body lives in `word/document.xml`.
//! [`DocxLoader`] streams that XML with `quick-xml`, collecting the text of
//! `<w:t>` runs paragraph by paragraph, and starts a new page at every
//! explicit page break (`<w:br w:type="page"/>`).
//!
//! | Element | Effect |
//! |---------|--------|
//! | `w:t` | text appended to the current paragraph |
//! | `w:tab` (in a run) | `\t` |
//! | `w:br`, `w:cr` (in a run) | `\n` (or a page break when `w:type="page"`) |
//! | `w:delText`, `mc:Fallback` | ignored |
//! | `w:p` end | paragraph closed; empty paragraphs are dropped |
//!
//! Loading never fails: any error is turned into the single page produced by
//! [`Page::load_error`].

use async_trait::async_trait;
use quick_xml::events::{BytesStart, Event};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toolhost_application::DocumentLoaderPort;
use toolhost_domain::document::Page;
use tracing::{debug, warn};

/// Default upper bound on the size of a DOCX file (50 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

const DOCUMENT_XML: &str = "word/document.xml";

/// Reasons a DOCX file could not be turned into pages
#[derive(Error, Debug)]
pub enum DocumentLoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is {size} bytes, larger than the {max} byte limit")]
    TooLarge { size: u64, max: u64 },

    #[error("not a valid DOCX archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("invalid DOCX: missing word/document.xml")]
    MissingDocumentXml,

    #[error("failed to read word/document.xml: {0}")]
    Read(#[source] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("background task failed: {0}")]
    Task(String),
}

/// Loader for Word `.docx` files.
#[derive(Debug, Clone)]
pub struct DocxLoader {
    max_file_size: u64,
}

impl DocxLoader {
    pub fn new() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Read the page texts of the document at `path`.
    pub fn read_page_texts(&self, path: &Path) -> Result<Vec<String>, DocumentLoadError> {
        let open_error = |source| DocumentLoadError::Open {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(open_error)?.len();
        if size > self.max_file_size {
            return Err(DocumentLoadError::TooLarge {
                size,
                max: self.max_file_size,
            });
        }

        let file = std::fs::File::open(path).map_err(open_error)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut xml = String::new();
        {
            let mut entry = archive.by_name(DOCUMENT_XML).map_err(|e| match e {
                zip::result::ZipError::FileNotFound => DocumentLoadError::MissingDocumentXml,
                other => DocumentLoadError::Archive(other),
            })?;
            entry
                .read_to_string(&mut xml)
                .map_err(DocumentLoadError::Read)?;
        }

        split_pages(&xml)
    }
}

impl Default for DocxLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentLoaderPort for DocxLoader {
    async fn load_pages(&self, path: &Path) -> Vec<Page> {
        let loader = self.clone();
        let owned = path.to_path_buf();
        let outcome = tokio::task::spawn_blocking(move || loader.read_page_texts(&owned))
            .await
            .unwrap_or_else(|e| Err(DocumentLoadError::Task(e.to_string())));

        let source = path.display().to_string();
        match outcome {
            Ok(texts) => {
                let total = texts.len() as u32;
                debug!("Loaded {} page(s) from {}", total, source);
                texts
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| {
                        Page::new(text, i as u32 + 1)
                            .with_total_pages(total)
                            .with_source(&source)
                    })
                    .collect()
            }
            Err(e) => {
                warn!("Failed to load DOCX file {}: {}", source, e);
                vec![Page::load_error(e).with_source(source)]
            }
        }
    }
}

/// Split `word/document.xml` into page texts. Always yields at least one page.
///
/// `w:tab`, `w:br` and `w:cr` only count inside a run (`w:r`); the same names
/// also appear in paragraph properties as tab-stop definitions. Content under
/// `mc:Fallback` repeats the preceding `mc:Choice` and is skipped.
fn split_pages(xml: &str) -> Result<Vec<String>, DocumentLoadError> {
    let mut reader = quick_xml::Reader::from_str(xml);

    let mut pages: Vec<String> = Vec::new();
    let mut lines: Vec<String> = Vec::new();
    let mut paragraph = String::new();
    let mut in_text = false;
    let mut in_run = false;
    let mut fallback_depth = 0usize;

    loop {
        let event = reader.read_event()?;
        if fallback_depth > 0 {
            match &event {
                Event::Start(e) if e.local_name().as_ref() == b"Fallback" => fallback_depth += 1,
                Event::End(e) if e.local_name().as_ref() == b"Fallback" => fallback_depth -= 1,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"t" => in_text = in_run,
                b"r" => in_run = true,
                b"p" => paragraph.clear(),
                b"Fallback" => fallback_depth = 1,
                _ => {}
            },
            Event::Empty(e) if in_run => match e.local_name().as_ref() {
                b"br" if is_page_break(&e) => {
                    if !paragraph.is_empty() {
                        lines.push(std::mem::take(&mut paragraph));
                    }
                    pages.push(lines.join("\n"));
                    lines.clear();
                }
                b"br" | b"cr" => paragraph.push('\n'),
                b"tab" => paragraph.push('\t'),
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => in_run = false,
                b"p" => {
                    if !paragraph.is_empty() {
                        lines.push(std::mem::take(&mut paragraph));
                    }
                }
                _ => {}
            },
            Event::Text(e) if in_text => {
                paragraph.push_str(&e.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !paragraph.is_empty() {
        lines.push(paragraph);
    }
    // A trailing page break does not open a new page
    if pages.is_empty() || !lines.is_empty() {
        pages.push(lines.join("\n"));
    }

    Ok(pages)
}

fn is_page_break(element: &BytesStart<'_>) -> bool {
    element.attributes().flatten().any(|attr| {
        attr.key.local_name().as_ref() == b"type" && attr.value.as_ref() == b"page"
    })
}
