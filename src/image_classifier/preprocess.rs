use crate::image_classifier::interface::ImageTensor;
use image::{imageops, RgbImage};
use tract_onnx::prelude::tract_ndarray;

/// Stretches the image to `size`x`size` (no letterboxing), scales channels
/// to `[0, 1]` and adds the batch axis.
pub fn preprocess(image: &RgbImage, size: u32) -> ImageTensor {
    let resized = imageops::resize(image, size, size, imageops::FilterType::CatmullRom);

    tract_ndarray::Array4::from_shape_fn(
        (1, size as usize, size as usize, 3),
        |(_, y, x, c)| {
            let pixel = resized.get_pixel(x as u32, y as u32);
            pixel[c] as f32 / 255.0
        },
    )
}

pub fn blank_tensor(size: u32) -> ImageTensor {
    tract_ndarray::Array4::zeros((1, size as usize, size as usize, 3))
}
