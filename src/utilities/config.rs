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

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Configuration {
    // Where the images live and how they are paired
    pub data: DataConfig,

    // Resize / crop sizes
    #[serde(default)]
    pub pipeline: PipelineConfig,

    // System configuration
    #[serde(default)]
    pub system: SystemConfig,
}

/// Dataset layout on disk.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum DataConfig {
    /// One directory of side-by-side A|B images.
    Split { root: String },
    /// Two directories paired by position.
    Directory { root_a: String, root_b: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Side length each A or B image is resized to before cropping.
    pub load_size: u32,
    /// Side length of the random crop handed to the model.
    pub fine_size: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SystemConfig {
    pub seed: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig::Split {
            root: "datasets/facades/train".to_string(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            load_size: 286,
            fine_size: 256,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            data: DataConfig::default(),
            pipeline: PipelineConfig::default(),
            system: SystemConfig::default(),
        }
    }
}

/// Largest accepted `load_size`; split images are resized to twice this width.
pub const MAX_LOAD_SIZE: u32 = 16_384;

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.load_size > MAX_LOAD_SIZE {
            return Err(format!(
                "Load size {} exceeds maximum {}",
                self.load_size, MAX_LOAD_SIZE
            ));
        }

        if self.fine_size == 0 {
            return Err("Crop size must be greater than 0".to_string());
        }

        if self.fine_size > self.load_size {
            return Err(format!(
                "Crop size {} exceeds load size {}",
                self.fine_size, self.load_size
            ));
        }

        Ok(())
    }
}

impl Configuration {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let config: Configuration = serde_yaml::from_str(&content)?;

        if let Err(validation_error) = config.validate() {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                validation_error,
            )));
        }

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pipeline.validate()?;

        // Validate data paths
        match &self.data {
            DataConfig::Split { root } => {
                if !Path::new(root).is_dir() {
                    return Err(format!("Image directory does not exist: {}", root));
                }
            }
            DataConfig::Directory { root_a, root_b } => {
                if !Path::new(root_a).is_dir() {
                    return Err(format!("A image directory does not exist: {}", root_a));
                }
                if !Path::new(root_b).is_dir() {
                    return Err(format!("B image directory does not exist: {}", root_b));
                }
            }
        }

        Ok(())
    }
}
