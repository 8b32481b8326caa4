use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Errors that can occur when loading bitmap resources.
#[derive(thiserror::Error, Debug)]
pub enum BitmapError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded raster image ready for blitting.
///
/// Wraps an RGBA pixel buffer; the draw surface decides how to get it on
/// screen. Laser bitmaps are pre-scaled with [`Bitmap::scale_to_width`] when
/// the layout changes so the per-frame blit stays cheap.
#[derive(Debug, Clone)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    /// Decode PNG or JPEG bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, BitmapError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self { image })
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.image
    }

    /// Uniformly scale so the width matches `target_width`, preserving the
    /// aspect ratio. Non-positive targets return the bitmap unchanged.
    pub fn scale_to_width(&self, target_width: f32) -> Bitmap {
        if target_width <= 0.0 || self.image.width() == 0 {
            return self.clone();
        }
        let ratio = target_width / self.image.width() as f32;
        let width = (self.image.width() as f32 * ratio).round().max(1.0) as u32;
        let height = (self.image.height() as f32 * ratio).round().max(1.0) as u32;
        Bitmap {
            image: imageops::resize(&self.image, width, height, FilterType::Triangle),
        }
    }
}
