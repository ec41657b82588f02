//! Image decode, resample and encode

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::{ErrorContext, Result};

pub mod formats;
pub mod resize;

pub use formats::*;
pub use resize::*;

/// Imaging capability consumed by the conversion pipeline
pub trait ImageCodec {
    /// Decode the image stored at `path`
    fn decode(&self, path: &Path) -> Result<DynamicImage>;

    /// Resample `image` to exactly `width`x`height`
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage>;

    /// Encode `image` as `format` and write it to `path`, replacing any existing file
    fn encode(&self, image: &DynamicImage, path: &Path, format: OutputFormat) -> Result<()>;
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        (**self).decode(path)
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
        (**self).resize(image, width, height)
    }

    fn encode(&self, image: &DynamicImage, path: &Path, format: OutputFormat) -> Result<()> {
        (**self).encode(image, path, format)
    }
}

/// [`ImageCodec`] backed by the `image` crate
#[derive(Debug, Clone, Copy)]
pub struct StandardCodec {
    filter: FilterType,
    jpeg_quality: u8,
}

impl StandardCodec {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
            jpeg_quality: 75,
        }
    }

    /// Set the resampling filter
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Set the JPEG quality, clamped to 1-100
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
}

impl Default for StandardCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for StandardCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        debug!("Loading image: {:?}", path);

        let file = File::open(path).with_file_context(path)?;
        let mut reader = image::io::Reader::new(BufReader::new(file))
            .with_guessed_format()
            .with_file_context(path)?;

        // content sniffing failed, fall back to the extension
        if reader.format().is_none() {
            if let Some(format) = input_codec_from_path(path) {
                reader.set_format(format);
            }
        }

        reader.decode().with_file_context(path)
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
        resample(image, width, height, self.filter)
    }

    fn encode(&self, image: &DynamicImage, path: &Path, format: OutputFormat) -> Result<()> {
        let codec = format.codec();
        debug!("Saving image: {:?} as {:?}", path, codec);

        let pixels = prepare_pixels(image, codec);
        let mut writer = BufWriter::new(File::create(path).with_file_context(path)?);

        match codec {
            ImageFormat::Png => {
                let encoder = PngEncoder::new_with_quality(
                    &mut writer,
                    CompressionType::Best,
                    PngFilter::Adaptive,
                );
                pixels.write_with_encoder(encoder).with_file_context(path)?;
            }
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut writer, self.jpeg_quality);
                pixels.write_with_encoder(encoder).with_file_context(path)?;
            }
            other => {
                pixels.write_to(&mut writer, other).with_file_context(path)?;
            }
        }

        writer.flush().with_file_context(path)
    }
}

/// Convert pixel data into a layout the target encoder accepts.
/// JPEG has no alpha channel, GIF frames are RGBA, BMP and TIFF take 8-bit samples.
fn prepare_pixels(image: &DynamicImage, codec: ImageFormat) -> Cow<'_, DynamicImage> {
    match (codec, image) {
        (ImageFormat::Png, _) => Cow::Borrowed(image),
        (ImageFormat::Jpeg, DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_)) => {
            Cow::Borrowed(image)
        }
        (ImageFormat::Jpeg, _) => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        (ImageFormat::Gif, DynamicImage::ImageRgba8(_)) => Cow::Borrowed(image),
        (ImageFormat::Gif, _) => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        (_, DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_)) => Cow::Borrowed(image),
        _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
    }
}
