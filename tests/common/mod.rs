#![allow(dead_code)]

use std::path::Path;

use image::{Rgb, RgbImage};

/// 2x2 RGB image with rows (10,20,30),(40,50,60) / (70,80,90),(100,110,120).
pub fn ramp_rgb() -> RgbImage {
    let samples = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
    RgbImage::from_raw(2, 2, samples).expect("sample count matches 2x2 RGB")
}

/// Solid RGB image of the given size.
pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

pub fn write_png(img: &RgbImage, path: &Path) {
    img.save_with_format(path, image::ImageFormat::Png)
        .expect("write test PNG");
}
