//! Target dimension math and resampling

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ResizeError, Result};

/// Available resize filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor (fastest, lowest quality)
    Nearest,
    /// Triangle (linear interpolation)
    Triangle,
    /// Catmull-Rom cubic spline
    CatmullRom,
    /// Gaussian blur
    Gaussian,
    /// Lanczos with radius 3 (high quality, recommended)
    #[default]
    Lanczos3,
}

impl From<FilterType> for image::imageops::FilterType {
    fn from(filter: FilterType) -> Self {
        match filter {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Triangle => image::imageops::FilterType::Triangle,
            FilterType::CatmullRom => image::imageops::FilterType::CatmullRom,
            FilterType::Gaussian => image::imageops::FilterType::Gaussian,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Scale one dimension by a percentage, rounding down.
///
/// Integer arithmetic keeps the result an exact floor: `100 * 29 / 100` is 29,
/// where `100.0 * 0.29` lands just under it and truncates to 28.
pub fn scale_dimension(value: u32, scale_percent: u8) -> u32 {
    let scaled = u64::from(value) * u64::from(scale_percent) / 100;
    // only percentages above 100 can leave the u32 range
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Target size for an image of `width`x`height` at `scale_percent`.
/// No minimum is applied; a dimension may come out as zero.
pub fn target_dimensions(width: u32, height: u32, scale_percent: u8) -> (u32, u32) {
    (
        scale_dimension(width, scale_percent),
        scale_dimension(height, scale_percent),
    )
}

/// Resample `image` to exactly `width`x`height`.
pub fn resample(
    image: &DynamicImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(ResizeError::invalid_dimensions(width, height, None));
    }

    debug!(
        "Resizing {}x{} -> {}x{} using {:?}",
        image.width(),
        image.height(),
        width,
        height,
        filter
    );

    if width == image.width() && height == image.height() {
        return Ok(image.clone());
    }

    Ok(image.resize_exact(width, height, filter.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            let intensity = ((x + y) % 255) as u8;
            Rgb([intensity, intensity, intensity])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_dimension_floor() {
        assert_eq!(target_dimensions(100, 50, 50), (50, 25));
        assert_eq!(target_dimensions(200, 200, 50), (100, 100));
        assert_eq!(target_dimensions(101, 33, 50), (50, 16));
        assert_eq!(target_dimensions(100, 100, 29), (29, 29));
        assert_eq!(target_dimensions(7, 3, 99), (6, 2));
    }

    #[test]
    fn test_full_scale_is_identity() {
        for (w, h) in [(1, 1), (640, 480), (4000, 3), (u32::MAX, 17)] {
            assert_eq!(target_dimensions(w, h, 100), (w, h));
        }
    }

    #[test]
    fn test_small_images_round_to_zero() {
        assert_eq!(target_dimensions(1, 50, 1), (0, 0));
        assert_eq!(target_dimensions(150, 99, 1), (1, 0));
    }

    #[test]
    fn test_resample_exact_size() {
        let image = create_test_image(100, 50);
        let resized = resample(&image, 33, 17, FilterType::Lanczos3).unwrap();
        assert_eq!((resized.width(), resized.height()), (33, 17));
    }

    #[test]
    fn test_resample_same_size() {
        let image = create_test_image(20, 10);
        let resized = resample(&image, 20, 10, FilterType::Nearest).unwrap();
        assert_eq!(resized.as_bytes(), image.as_bytes());
    }

    #[test]
    fn test_resample_rejects_zero() {
        let image = create_test_image(10, 10);
        let err = resample(&image, 0, 5, FilterType::Triangle).unwrap_err();
        assert!(matches!(
            err,
            ResizeError::InvalidDimensions { width: 0, height: 5, .. }
        ));
    }

    #[test]
    fn test_filter_conversion() {
        let filters = [
            FilterType::Nearest,
            FilterType::Triangle,
            FilterType::CatmullRom,
            FilterType::Gaussian,
            FilterType::Lanczos3,
        ];

        for filter in &filters {
            let _: image::imageops::FilterType = (*filter).into();
        }
        assert_eq!(FilterType::default(), FilterType::Lanczos3);
    }
}
