//! Image preprocessing
//!
//! Turns any raster image into the fixed-shape NCHW tensor the network
//! expects: 224x224 RGB, scaled to [0,1] and normalized with the ImageNet
//! channel statistics the network was trained against.

use crate::ClassifierError;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::Path;
use tract_onnx::prelude::*;

/// Network input edge length (pixels)
pub const INPUT_SIZE: u32 = 224;

const CHANNEL_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const CHANNEL_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Decode an image file for classification
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage, ClassifierError> {
    image::open(path).map_err(|e| ClassifierError::InvalidImage(e.to_string()))
}

/// Convert a decoded image into the network's input tensor
pub fn image_to_tensor(image: &DynamicImage) -> Tensor {
    let resized = image::imageops::resize(
        &image.to_rgb8(),
        INPUT_SIZE,
        INPUT_SIZE,
        FilterType::Triangle,
    );

    let side = INPUT_SIZE as usize;
    tract_ndarray::Array4::from_shape_fn((1, 3, side, side), |(_, c, y, x)| {
        let value = f32::from(resized[(x as u32, y as u32)][c]) / 255.0;
        (value - CHANNEL_MEAN[c]) / CHANNEL_STD[c]
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_shape() {
        let image = DynamicImage::new_rgb8(64, 48);
        let tensor = image_to_tensor(&image);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
        assert_eq!(tensor.datum_type(), f32::datum_type());
    }

    #[test]
    fn test_black_image_normalization() {
        // A zero pixel scales to 0.0 and normalizes to -mean/std per channel.
        let image = DynamicImage::new_rgb8(8, 8);
        let tensor = image_to_tensor(&image);
        let view = tensor.to_array_view::<f32>().unwrap();
        let red = view[[0, 0, 0, 0]];
        assert!((red - (-CHANNEL_MEAN[0] / CHANNEL_STD[0])).abs() < 1e-5);
    }

    #[test]
    fn test_missing_image_file() {
        let err = load_image("no/such/panel.jpg").unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidImage(_)));
    }
}
