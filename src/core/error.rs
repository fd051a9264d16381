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

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BellandeError {
    InvalidShape(String),
    IndexOutOfBounds,
    IOError(String),
    ImageError(String),
    InvalidOperation(String),
    InvalidConfiguration(String),
    PairCountMismatch(usize, usize),
}

impl Error for BellandeError {}

impl fmt::Display for BellandeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BellandeError::InvalidShape(msg) => write!(f, "Invalid tensor shape: {}", msg),
            BellandeError::IndexOutOfBounds => write!(f, "Index out of bounds"),
            BellandeError::IOError(err) => write!(f, "IO error: {}", err),
            BellandeError::ImageError(msg) => write!(f, "Image error: {}", msg),
            BellandeError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            BellandeError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            BellandeError::PairCountMismatch(a, b) => write!(
                f,
                "A and B directories must hold the same number of images: found {} and {}",
                a, b
            ),
        }
    }
}

impl From<std::io::Error> for BellandeError {
    fn from(error: std::io::Error) -> Self {
        BellandeError::IOError(error.to_string())
    }
}

impl From<image::ImageError> for BellandeError {
    fn from(error: image::ImageError) -> Self {
        BellandeError::ImageError(error.to_string())
    }
}

impl From<glob::PatternError> for BellandeError {
    fn from(error: glob::PatternError) -> Self {
        BellandeError::IOError(format!("Invalid glob pattern: {}", error))
    }
}

impl From<glob::GlobError> for BellandeError {
    fn from(error: glob::GlobError) -> Self {
        BellandeError::IOError(error.to_string())
    }
}
