use std::io::Cursor;

use image::{ImageFormat, ImageReader, Limits, RgbaImage};

use crate::apply::ApplyError;

/// Raw RGBA8 pixels of a decoded wallpaper.
#[derive(Debug, Clone)]
pub struct DecodedWallpaper {
    pixels: RgbaImage,
}

impl DecodedWallpaper {
    pub fn from_pixels(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

pub fn decode_wallpaper(bytes: &[u8]) -> Result<DecodedWallpaper, ApplyError> {
    // Oversized images fail here instead of exhausting memory.
    decode_wallpaper_with_limits(bytes, Limits::default())
}

pub fn decode_wallpaper_with_limits(
    bytes: &[u8],
    limits: Limits,
) -> Result<DecodedWallpaper, ApplyError> {
    if bytes.is_empty() {
        return Err(ApplyError::Decode("image data is empty".to_string()));
    }

    let Some(format) = detect_format(bytes) else {
        return Err(ApplyError::Decode("unrecognized image format".to_string()));
    };
    let mut reader = ImageReader::with_format(Cursor::new(bytes), format);
    reader.limits(limits);

    let image = reader
        .decode()
        .map_err(|error| ApplyError::Decode(error.to_string()))?;
    if image.width() == 0 || image.height() == 0 {
        return Err(ApplyError::Decode("image has no pixels".to_string()));
    }

    Ok(DecodedWallpaper::from_pixels(image.to_rgba8()))
}
