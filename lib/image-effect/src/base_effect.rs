use crate::ImageEffectResult;
use image::{GrayImage, Luma, Rgb, RgbImage};

/// ITU-R 601 luma in 16-bit fixed point, rounded to nearest.
#[inline]
pub fn luminance(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// ITU-R 601 luma in 14-bit fixed point, the weights OpenCV uses for
/// 8-bit RGB to gray.
#[inline]
pub fn luminance_q14(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + 0x2000) >> 14) as u8
}

/// Single-channel luminance of an RGB image.
pub fn to_luma(image: &RgbImage) -> GrayImage {
    let mut gray = GrayImage::new(image.width(), image.height());
    for (dst, src) in gray.pixels_mut().zip(image.pixels()) {
        *dst = Luma([luminance(src)]);
    }
    gray
}

/// Re-expand a single-channel image to three identical channels.
pub fn from_luma(gray: &GrayImage) -> RgbImage {
    let mut image = RgbImage::new(gray.width(), gray.height());
    for (dst, src) in image.pixels_mut().zip(gray.pixels()) {
        let v = src.0[0];
        *dst = Rgb([v, v, v]);
    }
    image
}

pub fn grayscale(image: &mut RgbImage) -> ImageEffectResult<()> {
    for pixel in image.pixels_mut() {
        let gray = luminance(pixel);
        *pixel = Rgb([gray, gray, gray]);
    }

    Ok(())
}

/// Invert the colors of an image
pub fn invert(image: &mut RgbImage) -> ImageEffectResult<()> {
    for pixel in image.pixels_mut() {
        pixel[0] = 255 - pixel[0];
        pixel[1] = 255 - pixel[1];
        pixel[2] = 255 - pixel[2];
    }

    Ok(())
}
