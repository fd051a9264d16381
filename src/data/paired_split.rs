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

use crate::core::{error::BellandeError, tensor::Tensor};
use crate::data::augmentation::Transform;
use crate::data::dataset::Dataset;
use crate::data::image_decoder::ImageLoader;
use crate::data::image_folder::find_images;
use crate::data::preprocessing::{normalize, random_crop, resize, split_ab, to_tensor};
use crate::utilities::config::PipelineConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Dataset over a single directory of side-by-side A|B images.
///
/// Each image is resized to `2 * load_size` by `load_size`, split down the
/// middle, and each half is randomly cropped to `fine_size` square.
pub struct PairedSplitDataset {
    root: PathBuf,
    images: Vec<PathBuf>,
    transform: Option<Box<dyn Transform>>,
    loader: Box<dyn ImageLoader>,
    pipeline: PipelineConfig,
}

impl PairedSplitDataset {
    /// Creates a dataset with the default 286 load size and 256 crop.
    pub fn new(
        root: PathBuf,
        transform: Option<Box<dyn Transform>>,
        loader: Box<dyn ImageLoader>,
    ) -> Result<Self, BellandeError> {
        Self::with_config(root, transform, loader, PipelineConfig::default())
    }

    pub fn with_config(
        root: PathBuf,
        transform: Option<Box<dyn Transform>>,
        loader: Box<dyn ImageLoader>,
        pipeline: PipelineConfig,
    ) -> Result<Self, BellandeError> {
        pipeline
            .validate()
            .map_err(BellandeError::InvalidConfiguration)?;

        let images = find_images(&root)?;
        if images.is_empty() {
            warn!(root = %root.display(), "no images found");
        }
        info!(root = %root.display(), count = images.len(), "Found A|B images");

        Ok(PairedSplitDataset {
            root,
            images,
            transform,
            loader,
            pipeline,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, index: usize) -> Option<&Path> {
        self.images.get(index).map(PathBuf::as_path)
    }

    fn load(&self, path: &Path) -> Result<(Tensor, Tensor), BellandeError> {
        let load_size = self.pipeline.load_size;
        let fine_size = self.pipeline.fine_size as usize;

        let image = self.loader.load(path)?;
        let image = resize(&image, (load_size * 2, load_size));

        let mut tensor = to_tensor(&image);
        if let Some(transform) = &self.transform {
            tensor = transform.apply(&tensor)?;
        }
        let tensor = normalize(&tensor);

        let (a, b) = split_ab(&tensor)?;

        // Offsets are drawn separately, so A and B need not stay aligned.
        let a = random_crop(&a, (fine_size, fine_size))?;
        let b = random_crop(&b, (fine_size, fine_size))?;

        Ok((a, b))
    }
}

impl Dataset for PairedSplitDataset {
    fn len(&self) -> usize {
        self.images.len()
    }

    fn get(&self, index: usize) -> Result<(Tensor, Tensor), BellandeError> {
        let path = self
            .images
            .get(index)
            .ok_or(BellandeError::IndexOutOfBounds)?;
        debug!(index, path = %path.display(), "loading A|B image");
        self.load(path)
    }
}
