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
use crate::data::preprocessing::{normalize, random_crop, resize, to_tensor};
use crate::utilities::config::PipelineConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Dataset pairing two directories by position: the i-th image of `root_a`
/// goes with the i-th image of `root_b`, whatever their file names.
pub struct PairedDirectoryDataset {
    root_a: PathBuf,
    root_b: PathBuf,
    images_a: Vec<PathBuf>,
    images_b: Vec<PathBuf>,
    transform: Option<Box<dyn Transform>>,
    loader: Box<dyn ImageLoader>,
    pipeline: PipelineConfig,
}

impl PairedDirectoryDataset {
    pub fn new(
        root_a: PathBuf,
        root_b: PathBuf,
        transform: Option<Box<dyn Transform>>,
        loader: Box<dyn ImageLoader>,
    ) -> Result<Self, BellandeError> {
        Self::with_config(root_a, root_b, transform, loader, PipelineConfig::default())
    }

    /// Fails with `PairCountMismatch` when the two directories hold a
    /// different number of images.
    pub fn with_config(
        root_a: PathBuf,
        root_b: PathBuf,
        transform: Option<Box<dyn Transform>>,
        loader: Box<dyn ImageLoader>,
        pipeline: PipelineConfig,
    ) -> Result<Self, BellandeError> {
        pipeline
            .validate()
            .map_err(BellandeError::InvalidConfiguration)?;

        let images_a = find_images(&root_a)?;
        let images_b = find_images(&root_b)?;

        if images_a.len() != images_b.len() {
            return Err(BellandeError::PairCountMismatch(
                images_a.len(),
                images_b.len(),
            ));
        }
        info!("Found A and B pairs: {}", images_a.len());

        Ok(PairedDirectoryDataset {
            root_a,
            root_b,
            images_a,
            images_b,
            transform,
            loader,
            pipeline,
        })
    }

    pub fn roots(&self) -> (&Path, &Path) {
        (&self.root_a, &self.root_b)
    }

    pub fn paths(&self, index: usize) -> Option<(&Path, &Path)> {
        Some((
            self.images_a.get(index)?.as_path(),
            self.images_b.get(index)?.as_path(),
        ))
    }

    fn load(&self, path: &Path) -> Result<Tensor, BellandeError> {
        let load_size = self.pipeline.load_size;
        let fine_size = self.pipeline.fine_size as usize;

        let image = self.loader.load(path)?;
        let image = resize(&image, (load_size, load_size));

        let mut tensor = to_tensor(&image);
        if let Some(transform) = &self.transform {
            tensor = transform.apply(&tensor)?;
        }
        let tensor = normalize(&tensor);

        random_crop(&tensor, (fine_size, fine_size))
    }
}

impl Dataset for PairedDirectoryDataset {
    fn len(&self) -> usize {
        self.images_a.len()
    }

    fn get(&self, index: usize) -> Result<(Tensor, Tensor), BellandeError> {
        let (path_a, path_b) = self.paths(index).ok_or(BellandeError::IndexOutOfBounds)?;
        debug!(index, a = %path_a.display(), b = %path_b.display(), "loading A/B pair");

        let a = self.load(path_a)?;
        let b = self.load(path_b)?;
        Ok((a, b))
    }
}
