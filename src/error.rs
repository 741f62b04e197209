use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or writing icons.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid icon size {0}: must be between 1 and {max} pixels", max = i32::MAX)]
    InvalidSize(u32),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
