//! Figure cropping and image file output.
//!
//! Cropping and naming are pure; [`FigureExtractor::extract`] is the only
//! place that touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};
use crate::model::{BBox, Figure};

/// Crop a figure region out of the page image.
///
/// Returns `None` when the region has no pixels inside the image.
pub fn crop_figure(image: &DynamicImage, bbox: &BBox) -> Option<DynamicImage> {
    let rect = bbox.pixel_rect(image.width(), image.height())?;
    Some(image.crop_imm(rect.x, rect.y, rect.width, rect.height))
}

/// File name of the `index`-th figure extracted for `base`.
pub fn figure_file_name(base: &str, index: usize) -> String {
    format!("{}_figure_{}.png", base, index)
}

/// Encode an image as PNG at `path`, replacing any existing file.
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Where one figure goes and whether its image was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFigure {
    /// Position of the figure in iteration order
    pub index: usize,
    /// Reading order of the figure
    pub order: i64,
    /// Reference used in the rendered document (`<figure_dir>/<file name>`)
    pub src: String,
    /// Location of the image file
    pub path: PathBuf,
    /// False when the region was degenerate and nothing was written
    pub written: bool,
}

/// Writes figure crops next to an export output file.
#[derive(Debug, Clone)]
pub struct FigureExtractor {
    output_dir: PathBuf,
    base_name: String,
    figure_dir: String,
}

impl FigureExtractor {
    /// Create an extractor for the document written to `out_path`.
    pub fn new(out_path: &Path, figure_dir: impl Into<String>) -> Self {
        let output_dir = out_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let base_name = out_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            output_dir,
            base_name,
            figure_dir: figure_dir.into(),
        }
    }

    /// Directory receiving the figure images.
    pub fn figure_dir_path(&self) -> PathBuf {
        self.output_dir.join(&self.figure_dir)
    }

    /// Name, reference and path of the `index`-th figure.
    pub fn target(&self, index: usize, figure: &Figure) -> ExtractedFigure {
        let file_name = figure_file_name(&self.base_name, index);
        ExtractedFigure {
            index,
            order: figure.order,
            src: format!("{}/{}", self.figure_dir, file_name),
            path: self.figure_dir_path().join(&file_name),
            written: false,
        }
    }

    /// Crop every figure and write it as PNG.
    ///
    /// Degenerate regions are skipped with a warning; the returned entry
    /// has `written == false`.
    pub fn extract(&self, figures: &[Figure], image: &DynamicImage) -> Result<Vec<ExtractedFigure>> {
        if figures.is_empty() {
            return Ok(Vec::new());
        }

        let dir = self.figure_dir_path();
        fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let mut extracted = Vec::with_capacity(figures.len());
        for (index, figure) in figures.iter().enumerate() {
            let mut target = self.target(index, figure);

            match crop_figure(image, &figure.bbox) {
                Some(crop) => {
                    write_png(&crop, &target.path)?;
                    target.written = true;
                }
                None => {
                    log::warn!(
                        "Skipping figure {} with empty region {:?}",
                        index,
                        <[f64; 4]>::from(figure.bbox)
                    );
                }
            }

            extracted.push(target);
        }

        Ok(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, (x + y) as u8])
        }))
    }

    #[test]
    fn test_crop_figure() {
        let image = gradient(64, 48);
        let crop = crop_figure(&image, &BBox::new(10.6, 4.2, 30.0, 20.9)).unwrap();
        assert_eq!((crop.width(), crop.height()), (20, 16));
        assert_eq!(crop.to_rgb8().get_pixel(0, 0), &Rgb([10, 4, 14]));
    }

    #[test]
    fn test_crop_degenerate() {
        let image = gradient(64, 48);
        assert!(crop_figure(&image, &BBox::new(10.0, 10.0, 10.0, 30.0)).is_none());
    }

    #[test]
    fn test_target_naming() {
        let extractor = FigureExtractor::new(Path::new("out/scan_p2.md"), "figures");
        let target = extractor.target(3, &Figure::new(BBox::default(), 9));

        assert_eq!(target.src, "figures/scan_p2_figure_3.png");
        assert_eq!(
            target.path,
            Path::new("out").join("figures").join("scan_p2_figure_3.png")
        );
        assert_eq!(target.order, 9);
        assert!(!target.written);
    }

    #[test]
    fn test_extract_writes_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("page.html");
        let extractor = FigureExtractor::new(&out_path, "crops");
        let figures = vec![
            Figure::new(BBox::new(0.0, 0.0, 8.0, 8.0), 1),
            Figure::new(BBox::new(5.0, 5.0, 5.0, 5.0), 2),
        ];

        let extracted = extractor.extract(&figures, &gradient(16, 16)).unwrap();
        assert_eq!(extracted.len(), 2);
        assert!(extracted[0].written);
        assert!(!extracted[1].written);
        assert!(dir.path().join("crops/page_figure_0.png").exists());
        assert!(!dir.path().join("crops/page_figure_1.png").exists());
    }

    #[test]
    fn test_extract_no_figures_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = FigureExtractor::new(&dir.path().join("page.md"), "figures");
        let extracted = extractor.extract(&[], &gradient(4, 4)).unwrap();
        assert!(extracted.is_empty());
        assert!(!dir.path().join("figures").exists());
    }
}
