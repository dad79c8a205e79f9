use image::{imageops, RgbaImage};

/// Downscales so the longer edge is at most `max_edge`, keeping the aspect ratio.
pub fn thumbnail(source: &RgbaImage, max_edge: u32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let longest = width.max(height);
    if max_edge == 0 || longest <= max_edge {
        return source.clone();
    }

    let scale = max_edge as f64 / longest as f64;
    let thumb_width = ((width as f64 * scale).round() as u32).max(1);
    let thumb_height = ((height as f64 * scale).round() as u32).max(1);
    imageops::thumbnail(source, thumb_width, thumb_height)
}
