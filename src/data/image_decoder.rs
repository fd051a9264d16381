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
use image::RgbImage;
use std::path::Path;

/// Reads an image file from disk into 8-bit RGB.
///
/// Datasets take a loader at construction instead of reaching for a shared
/// default, so tests and callers can substitute their own decoding.
pub trait ImageLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<RgbImage, BellandeError>;
}

/// Decodes any format the `image` crate recognises and converts it to RGB,
/// dropping alpha and expanding grayscale.
#[derive(Debug, Default, Clone, Copy)]
pub struct RgbLoader;

impl RgbLoader {
    pub fn new() -> Self {
        RgbLoader
    }
}

impl ImageLoader for RgbLoader {
    fn load(&self, path: &Path) -> Result<RgbImage, BellandeError> {
        let decoded = image::open(path).map_err(|e| {
            BellandeError::ImageError(format!("Failed to decode {}: {}", path.display(), e))
        })?;
        Ok(decoded.to_rgb8())
    }
}
