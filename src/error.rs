//! Error types for unlayout library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while exporting analyzed pages.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested output format is not recognized.
    #[error("Unsupported output format: {0} (expected json, csv, html, markdown or md)")]
    UnsupportedFormat(String),

    /// Figure export was requested but no page image was supplied.
    #[error("Figure export requires the page image")]
    MissingImage,

    /// A directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// An image could not be encoded, decoded or saved.
    #[error("Image error ({}): {source}", path.display())]
    Image {
        /// File involved
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error during rendering (HTML, Markdown, CSV).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Exporting a single page failed.
    #[error("Page {page}: {source}")]
    Page {
        /// Page number (1-indexed)
        page: u32,
        /// What went wrong on this page
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error with the page it happened on.
    pub fn on_page(self, page: u32) -> Self {
        match self {
            Error::Page { .. } => self,
            other => Error::Page {
                page,
                source: Box::new(other),
            },
        }
    }

    /// Check if this is a configuration error (reported before any file is touched).
    pub fn is_config(&self) -> bool {
        match self {
            Error::UnsupportedFormat(_) | Error::MissingImage => true,
            Error::Page { source, .. } => source.is_config(),
            _ => false,
        }
    }
}
