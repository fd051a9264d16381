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
use crate::data::augmentation::Transform;
use crate::data::dataset::Dataset;
use crate::data::image_decoder::ImageLoader;
use crate::data::paired_directory::PairedDirectoryDataset;
use crate::data::paired_split::PairedSplitDataset;
use crate::utilities::config::{Configuration, DataConfig};
use std::error::Error;
use std::path::{Path, PathBuf};

pub mod core;
pub mod data;
pub mod utilities;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const FRAMEWORK_NAME: &str = "Bellande Pix2Pix Dataset";

pub struct Framework {
    config: Configuration,
    initialized: bool,
}

impl Framework {
    pub fn new(config: Configuration) -> Self {
        Framework {
            config,
            initialized: false,
        }
    }

    pub fn with_config<P: AsRef<Path>>(config_path: P) -> Result<Self, Box<dyn Error>> {
        let config = Configuration::from_file(config_path)?;
        Ok(Framework::new(config))
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Seeds the random generator of the calling thread when a seed is
    /// configured. Crops drawn on other threads (e.g. loader workers) keep
    /// their own entropy-seeded generators and are not reproducible.
    pub fn initialize(&mut self) -> Result<(), Box<dyn Error>> {
        if self.initialized {
            return Ok(());
        }

        // Set random seed if specified
        if let Some(seed) = self.config.system.seed {
            crate::core::random::set_seed(seed);
        }

        self.initialized = true;
        Ok(())
    }

    /// Builds the dataset described by the `data` section of the configuration.
    pub fn build_dataset(
        &self,
        transform: Option<Box<dyn Transform>>,
        loader: Box<dyn ImageLoader>,
    ) -> Result<Box<dyn Dataset>, BellandeError> {
        let pipeline = self.config.pipeline;
        let dataset: Box<dyn Dataset> = match &self.config.data {
            DataConfig::Split { root } => Box::new(PairedSplitDataset::with_config(
                PathBuf::from(root),
                transform,
                loader,
                pipeline,
            )?),
            DataConfig::Directory { root_a, root_b } => {
                Box::new(PairedDirectoryDataset::with_config(
                    PathBuf::from(root_a),
                    PathBuf::from(root_b),
                    transform,
                    loader,
                    pipeline,
                )?)
            }
        };
        Ok(dataset)
    }

    pub fn get_version() -> &'static str {
        VERSION
    }

    pub fn get_name() -> &'static str {
        FRAMEWORK_NAME
    }
}
