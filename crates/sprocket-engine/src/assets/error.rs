use std::fmt;

/// Error returned by [`AssetLoader::load_image`](super::AssetLoader::load_image).
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// No path was given.
    EmptyPath,
    /// The asset could not be read.
    Io { path: String, message: String },
    /// The bytes were read but are not a supported image.
    Decode { path: String, message: String },
}

impl AssetError {
    pub(crate) fn from_image(path: &str, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => AssetError::Io {
                path: path.to_string(),
                message: e.to_string(),
            },
            other => AssetError::Decode {
                path: path.to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::EmptyPath => write!(f, "asset path is empty"),
            AssetError::Io { path, message } => write!(f, "unable to read {path}: {message}"),
            AssetError::Decode { path, message } => write!(f, "unable to decode {path}: {message}"),
        }
    }
}

impl std::error::Error for AssetError {}
