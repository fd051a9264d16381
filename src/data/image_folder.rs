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
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Raster extensions treated as images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "ppm", "pgm", "bmp", "tif", "tiff", "webp",
];

/// Checks if a path names an image file based on its extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Lists the images directly inside `folder` (no recursion).
///
/// Matches `folder/*.*`, skipping dotfiles such as `._x.png` resource forks,
/// keeps regular files with an image extension and returns them sorted so
/// indices are stable across runs and platforms.
pub fn find_images<P: AsRef<Path>>(folder: P) -> Result<Vec<PathBuf>, BellandeError> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
        return Err(BellandeError::IOError(format!(
            "Invalid image directory: {}",
            folder.display()
        )));
    }

    let pattern = format!("{}/*.*", Pattern::escape(&folder.to_string_lossy()));

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut images = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() && is_image_file(&path) {
            images.push(path);
        }
    }
    images.sort();

    Ok(images)
}
