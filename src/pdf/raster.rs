//! Decoding card illustrations into raw samples for PDF image XObjects.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// 8-bit RGB samples plus an optional alpha plane.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

impl RasterImage {
    pub fn open(path: &Path) -> Result<Self, ImageError> {
        if !path.is_file() {
            return Err(ImageError::NotFound(path.to_path_buf()));
        }
        let decoded = image::open(path).map_err(|source| ImageError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_dynamic(&decoded))
    }

    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let alpha = image.color().has_alpha().then(|| {
            image
                .to_rgba8()
                .pixels()
                .map(|pixel| pixel.0[3])
                .collect()
        });
        let rgb = image.to_rgb8();
        Self {
            width: rgb.width(),
            height: rgb.height(),
            rgb: rgb.into_raw(),
            alpha,
        }
    }
}

/// Largest box with the image's aspect ratio that fits inside
/// `(x, y, width, height)`, centered. Returns `(x, y, width, height)`.
pub fn fit_centered(
    image_width: u32,
    image_height: u32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> (f32, f32, f32, f32) {
    if image_width == 0 || image_height == 0 {
        return (x, y, width, height);
    }
    let scale = (width / image_width as f32).min(height / image_height as f32);
    let fitted_w = image_width as f32 * scale;
    let fitted_h = image_height as f32 * scale;
    (
        x + (width - fitted_w) / 2.0,
        y + (height - fitted_h) / 2.0,
        fitted_w,
        fitted_h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage, RgbImage};
    use pretty_assertions::assert_eq;

    #[test]
    fn wide_image_is_letterboxed() {
        let (x, y, w, h) = fit_centered(200, 100, 10.0, 20.0, 100.0, 100.0);
        assert_eq!((x, y, w, h), (10.0, 45.0, 100.0, 50.0));
    }

    #[test]
    fn tall_image_is_pillarboxed() {
        let (x, y, w, h) = fit_centered(50, 100, 0.0, 0.0, 100.0, 100.0);
        assert_eq!((x, y, w, h), (25.0, 0.0, 50.0, 100.0));
    }

    #[test]
    fn opaque_image_has_no_alpha_plane() {
        let raster = RasterImage::from_dynamic(&DynamicImage::ImageRgb8(RgbImage::new(3, 2)));
        assert_eq!((raster.width, raster.height), (3, 2));
        assert_eq!(raster.rgb.len(), 18);
        assert!(raster.alpha.is_none());
    }

    #[test]
    fn transparent_image_keeps_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 128]));
        let raster = RasterImage::from_dynamic(&DynamicImage::ImageRgba8(img));
        assert_eq!(raster.alpha, Some(vec![128; 4]));
        assert_eq!(&raster.rgb[..3], &[10, 20, 30]);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = RasterImage::open(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, ImageError::NotFound(_)));
    }

    #[test]
    fn garbage_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        let err = RasterImage::open(&path).unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }
}
