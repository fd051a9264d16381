// Copyright (C) 2024 Bellande Artificial Intelligence Computer Vision Research Innovation Center, Ronaldson Bellande

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::core::{error::BellandeError, random, tensor::Tensor};
use image::imageops::{self, FilterType};
use image::RgbImage;

/// Resamples `image` to exactly `(width, height)` with bilinear filtering.
pub fn resize(image: &RgbImage, (width, height): (u32, u32)) -> RgbImage {
    imageops::resize(image, width, height, FilterType::Triangle)
}

/// Converts an RGB image to a `(3, H, W)` tensor scaled to [0, 1].
pub fn to_tensor(image: &RgbImage) -> Tensor {
    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);
    let plane = width * height;
    let mut data = vec![0.0f32; 3 * plane];

    for (x, y, pixel) in image.enumerate_pixels() {
        let base = y as usize * width + x as usize;
        for channel in 0..3 {
            data[channel * plane + base] = f32::from(pixel[channel]) / 255.0;
        }
    }

    Tensor::new(data, vec![3, height, width])
}

pub fn normalize_value(x: f32) -> f32 {
    x * 2.0 - 1.0
}

/// Maps [0, 1] to [-1, 1].
pub fn normalize(tensor: &Tensor) -> Tensor {
    tensor.map(normalize_value)
}

/// Splits a `(C, H, W)` tensor at `W / 2` into its left (A) and right (B)
/// halves. With an odd width B is one column wider.
pub fn split_ab(tensor: &Tensor) -> Result<(Tensor, Tensor), BellandeError> {
    let (_, _, width) = tensor.chw()?;
    let mid = width / 2;

    let a = tensor.narrow(2, 0, mid)?;
    let b = tensor.narrow(2, mid, width - mid)?;
    Ok((a, b))
}

/// Extracts the `(height, width)` window whose top-left corner is
/// `(top, left)`.
pub fn crop(
    tensor: &Tensor,
    top: usize,
    left: usize,
    (height, width): (usize, usize),
) -> Result<Tensor, BellandeError> {
    tensor.narrow(1, top, height)?.narrow(2, left, width)
}

/// Crops a `(height, width)` window at a uniformly random offset.
pub fn random_crop(tensor: &Tensor, size: (usize, usize)) -> Result<Tensor, BellandeError> {
    let (_, in_height, in_width) = tensor.chw()?;
    let (height, width) = size;

    if in_height < height || in_width < width {
        return Err(BellandeError::InvalidOperation(format!(
            "Crop size {}x{} larger than input size {}x{}",
            height, width, in_height, in_width
        )));
    }

    let x1 = random::randint(0, in_width - width);
    let y1 = random::randint(0, in_height - height);
    crop(tensor, y1, x1, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn ramp(channels: usize, height: usize, width: usize) -> Tensor {
        let n = channels * height * width;
        Tensor::new((0..n).map(|v| v as f32).collect(), vec![channels, height, width])
    }

    #[test]
    fn normalize_is_affine() {
        assert_eq!(normalize_value(0.0), -1.0);
        assert_eq!(normalize_value(1.0), 1.0);
        assert_eq!(normalize_value(0.5), 0.0);

        let t = Tensor::new(vec![0.0, 0.25, 1.0], vec![1, 1, 3]);
        assert_eq!(normalize(&t).data(), &[-1.0, -0.5, 1.0]);
    }

    #[test]
    fn to_tensor_is_channel_major() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 51]));

        let t = to_tensor(&img);
        assert_eq!(t.shape(), &[3, 1, 2]);
        assert_eq!(t.data(), &[1.0, 0.0, 0.0, 1.0, 0.0, 0.2]);
    }

    #[test]
    fn to_tensor_indexes_rows_by_width() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([(y * 3 + x) as u8, 0, 0]));
        let t = to_tensor(&img);
        assert_eq!(t.shape(), &[3, 2, 3]);
        let red: Vec<f32> = t.data()[..6].iter().map(|v| (v * 255.0).round()).collect();
        assert_eq!(red, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn resize_hits_exact_dimensions() {
        let img = RgbImage::from_pixel(7, 3, Rgb([10, 20, 30]));
        let out = resize(&img, (572, 286));
        assert_eq!(out.dimensions(), (572, 286));
        assert_eq!(*out.get_pixel(300, 100), Rgb([10, 20, 30]));
    }

    #[test]
    fn split_even_width() {
        let (a, b) = split_ab(&ramp(3, 2, 8)).unwrap();
        assert_eq!(a.shape(), &[3, 2, 4]);
        assert_eq!(b.shape(), &[3, 2, 4]);
        assert_eq!(a.data()[..4], [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(b.data()[..4], [4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn split_odd_width_gives_b_the_extra_column() {
        let (a, b) = split_ab(&ramp(3, 2, 7)).unwrap();
        assert_eq!(a.shape()[2], 3);
        assert_eq!(b.shape()[2], 4);
    }

    #[test]
    fn crop_reads_rows_then_columns() {
        let t = ramp(1, 4, 5);
        let c = crop(&t, 1, 2, (2, 3)).unwrap();
        assert_eq!(c.shape(), &[1, 2, 3]);
        assert_eq!(c.data(), &[7.0, 8.0, 9.0, 12.0, 13.0, 14.0]);
    }

    #[test]
    fn random_crop_stays_in_bounds() {
        let t = ramp(1, 6, 9);
        for _ in 0..200 {
            let c = random_crop(&t, (4, 5)).unwrap();
            assert_eq!(c.shape(), &[1, 4, 5]);
            let first = c.data()[0] as usize;
            let (y1, x1) = (first / 9, first % 9);
            assert!(y1 + 4 <= 6);
            assert!(x1 + 5 <= 9);
        }
    }

    #[test]
    fn random_crop_of_full_size_is_identity() {
        let t = ramp(3, 4, 4);
        assert_eq!(random_crop(&t, (4, 4)).unwrap(), t);
    }

    #[test]
    fn random_crop_rejects_small_input() {
        let err = random_crop(&Tensor::zeros(&[3, 10, 300]), (256, 256)).unwrap_err();
        assert!(matches!(err, BellandeError::InvalidOperation(_)));
    }
}
