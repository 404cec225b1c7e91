//! Writing analyzer debug overlays next to the exported documents.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Kind of overlay image produced by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visualization {
    /// Text detection and recognition overlay
    Ocr,
    /// Layout analysis overlay
    Layout,
}

impl Visualization {
    /// File name suffix.
    pub fn suffix(&self) -> &'static str {
        match self {
            Visualization::Ocr => "ocr",
            Visualization::Layout => "layout",
        }
    }
}

/// `<out_dir>/<stem>_p<page>_<kind>.jpg`
pub fn visualization_path(out_dir: &Path, stem: &str, page: u32, kind: Visualization) -> PathBuf {
    out_dir.join(format!("{}_p{}_{}.jpg", stem, page, kind.suffix()))
}

/// Write an overlay image as JPEG and return its path.
pub fn write_visualization(
    out_dir: &Path,
    stem: &str,
    page: u32,
    kind: Visualization,
    image: &DynamicImage,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|source| Error::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = visualization_path(out_dir, stem, page, kind);
    // JPEG has no alpha channel
    DynamicImage::ImageRgb8(image.to_rgb8())
        .save_with_format(&path, ImageFormat::Jpeg)
        .map_err(|source| Error::Image {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_visualization_path() {
        let path = visualization_path(Path::new("results"), "scan", 2, Visualization::Layout);
        assert_eq!(path, Path::new("results").join("scan_p2_layout.jpg"));
    }

    #[test]
    fn test_write_visualization() {
        let dir = tempfile::tempdir().unwrap();
        let overlay = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0, 255, 0, 128])));

        let path =
            write_visualization(dir.path(), "scan", 1, Visualization::Ocr, &overlay).unwrap();
        assert!(path.ends_with("scan_p1_ocr.jpg"));
        assert!(path.exists());
    }
}
