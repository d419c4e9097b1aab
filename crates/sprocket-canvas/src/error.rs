use std::fmt;

/// Error raised when building sprites.
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteError {
    /// Sprites can only live on a canvas.
    NotACanvas { container: String },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::NotACanvas { container } => {
                write!(f, "sprite constructor called with container {container}")
            }
        }
    }
}

impl std::error::Error for SpriteError {}
