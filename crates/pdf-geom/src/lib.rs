//! PDF Geometry - read-only document inspection
//!
//! This crate provides functionality for:
//! - Opening PDF documents from a path or from bytes
//! - Counting pages
//! - Extracting page geometry (MediaBox/CropBox, rotation)
//! - Reading document metadata
//!
//! # Example
//!
//! ```ignore
//! use pdf_geom::PdfDocument;
//!
//! let doc = PdfDocument::open("template.pdf")?;
//! let geom = doc.page_geometry(1)?;
//! println!("{:.2} x {:.2}", geom.width(), geom.height());
//! ```

mod document;
mod geometry;

pub use document::{DocumentInfo, PdfDocument};
pub use geometry::{PageGeometry, Rect};

use thiserror::Error;

/// Errors that can occur while inspecting a PDF
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to open PDF: {0}")]
    OpenError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Page {0} has no MediaBox or CropBox")]
    MissingPageBox(usize),

    #[error("PDF parsing error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF inspection
pub type Result<T> = std::result::Result<T, PdfError>;
