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

use crate::core::error::BellandeError;

/// Dense row-major `f32` tensor.
///
/// Image tensors use the `(channels, height, width)` layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    pub data: Vec<f32>,
    pub shape: Vec<usize>,
}

impl Tensor {
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Self {
        let size: usize = shape.iter().product();
        assert_eq!(data.len(), size, "Data size does not match shape");

        Tensor { data, shape }
    }

    pub fn zeros(shape: &[usize]) -> Self {
        let size = shape.iter().product();
        Tensor::new(vec![0.0; size], shape.to_vec())
    }

    // Data access methods
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns `(channels, height, width)` for a 3-D image tensor.
    pub fn chw(&self) -> Result<(usize, usize, usize), BellandeError> {
        match self.shape[..] {
            [c, h, w] => Ok((c, h, w)),
            _ => Err(BellandeError::InvalidShape(format!(
                "Expected (channels, height, width), got {:?}",
                self.shape
            ))),
        }
    }

    /// Applies `f` to every element.
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Tensor {
        Tensor::new(
            self.data.iter().map(|&x| f(x)).collect(),
            self.shape.clone(),
        )
    }

    pub fn mean(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f32>() / self.data.len() as f32
    }

    pub fn min(&self) -> f32 {
        self.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Selects `length` entries starting at `start` along `dim`.
    pub fn narrow(&self, dim: usize, start: usize, length: usize) -> Result<Tensor, BellandeError> {
        if dim >= self.shape.len() {
            return Err(BellandeError::InvalidShape(format!(
                "Dimension {} out of range for tensor with {} dimensions",
                dim,
                self.shape.len()
            )));
        }

        if start + length > self.shape[dim] {
            return Err(BellandeError::InvalidShape(format!(
                "Narrow operation out of bounds: {}..{} on dimension of size {}",
                start,
                start + length,
                self.shape[dim]
            )));
        }

        let outer: usize = self.shape[..dim].iter().product();
        let inner = self.get_stride(dim);
        let extent = self.shape[dim];

        let mut new_data = Vec::with_capacity(outer * length * inner);
        for o in 0..outer {
            let base = (o * extent + start) * inner;
            new_data.extend_from_slice(&self.data[base..base + length * inner]);
        }

        let mut new_shape = self.shape.clone();
        new_shape[dim] = length;

        Ok(Tensor::new(new_data, new_shape))
    }

    fn get_stride(&self, dim: usize) -> usize {
        self.shape[dim + 1..].iter().product()
    }
}
