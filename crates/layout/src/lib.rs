//! Layout profiles - named text anchors over page geometry
//!
//! This crate provides:
//! - Profile schema types (labeled anchors with vertical offsets)
//! - Profile parsing and validation from JSON
//! - Resolution of anchors into page coordinates
//!
//! # Example
//!
//! ```ignore
//! use layout::{resolve, LayoutProfile, PageSize};
//!
//! let profile = LayoutProfile::certificate();
//! let anchors = resolve(&profile, PageSize::new(612.0, 792.0))?;
//! for anchor in &anchors {
//!     println!("{}: ({:.2}, {:.2})", anchor.label, anchor.x, anchor.y);
//! }
//! ```

pub mod parser;
mod resolver;
mod schema;

pub use parser::{parse_profile, profile_from_file, validate};
pub use resolver::{resolve, PlacedAnchor, SIDE_MARGIN};
pub use schema::*;

use thiserror::Error;

/// Errors that can occur during profile processing
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to parse profile: {0}")]
    ParseError(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, LayoutError>;
