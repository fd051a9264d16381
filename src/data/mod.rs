pub mod augmentation;
pub mod dataset;
pub mod image_decoder;
pub mod image_folder;
pub mod paired_directory;
pub mod paired_split;
pub mod preprocessing;
