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

/// Caller-supplied transform applied to a `(C, H, W)` tensor in [0, 1]
/// before normalisation.
pub trait Transform: Send + Sync {
    fn apply(&self, tensor: &Tensor) -> Result<Tensor, BellandeError>;
}

pub struct Compose {
    transforms: Vec<Box<dyn Transform>>,
}

impl Compose {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Compose { transforms }
    }
}

impl Transform for Compose {
    fn apply(&self, tensor: &Tensor) -> Result<Tensor, BellandeError> {
        let mut current = tensor.clone();
        for transform in &self.transforms {
            current = transform.apply(&current)?;
        }
        Ok(current)
    }
}

/// Mirrors the image along the width axis with probability `p`.
///
/// On a side-by-side A|B image this also swaps the two halves.
pub struct RandomHorizontalFlip {
    p: f32,
}

impl RandomHorizontalFlip {
    pub fn new(p: f32) -> Self {
        assert!((0.0..=1.0).contains(&p));
        RandomHorizontalFlip { p }
    }
}

impl Transform for RandomHorizontalFlip {
    fn apply(&self, tensor: &Tensor) -> Result<Tensor, BellandeError> {
        let (channels, height, width) = tensor.chw()?;

        if !random::bernoulli(self.p) {
            return Ok(tensor.clone());
        }

        let mut flipped_data = vec![0.0; tensor.data.len()];
        for c in 0..channels {
            for h in 0..height {
                let row = (c * height + h) * width;
                for w in 0..width {
                    flipped_data[row + (width - 1 - w)] = tensor.data[row + w];
                }
            }
        }

        Ok(Tensor::new(flipped_data, tensor.shape.clone()))
    }
}
