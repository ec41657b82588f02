//! Error types and handling for the batch resizer

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for batch resizer operations
pub type Result<T> = std::result::Result<T, ResizeError>;

/// Coarse error taxonomy reported to the user interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required job field is missing or out of range
    Configuration,
    /// Listing, creating, opening or writing failed
    FileSystem,
    /// Decoding, resampling or encoding failed
    Codec,
}

/// Main error type for batch resizer operations
#[derive(Debug, Error)]
pub enum ResizeError {
    /// Missing or invalid job configuration
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Filesystem access failed
    #[error("I/O error: {source} (file: {file:?})")]
    IoError {
        #[source]
        source: std::io::Error,
        file: Option<PathBuf>,
    },

    /// Image could not be decoded or encoded
    #[error("Image processing error: {source} (file: {file:?})")]
    ImageError {
        #[source]
        source: image::ImageError,
        file: Option<PathBuf>,
    },

    /// Scaling produced a dimension the codec cannot represent
    #[error("Invalid target dimensions: {width}x{height} (file: {file:?})")]
    InvalidDimensions {
        width: u32,
        height: u32,
        file: Option<PathBuf>,
    },

    /// Settings file could not be parsed
    #[error("Serialization error: {0}")]
    SerdeError(String),
}

impl ResizeError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new I/O error tied to a file
    pub fn io(source: std::io::Error, file: impl Into<PathBuf>) -> Self {
        Self::IoError {
            source,
            file: Some(file.into()),
        }
    }

    /// Create a new codec error tied to a file
    pub fn image(source: image::ImageError, file: impl Into<PathBuf>) -> Self {
        Self::ImageError {
            source,
            file: Some(file.into()),
        }
    }

    /// Create a new invalid dimensions error
    pub fn invalid_dimensions(width: u32, height: u32, file: Option<PathBuf>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            file,
        }
    }

    /// Which part of the taxonomy this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigError { .. } | Self::SerdeError(_) => ErrorKind::Configuration,
            Self::IoError { .. } => ErrorKind::FileSystem,
            // the image crate reports read/write failures through its own IoError variant
            Self::ImageError {
                source: image::ImageError::IoError(_),
                ..
            } => ErrorKind::FileSystem,
            Self::ImageError { .. } | Self::InvalidDimensions { .. } => ErrorKind::Codec,
        }
    }

    /// Get the associated file path if available
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::IoError { file, .. }
            | Self::ImageError { file, .. }
            | Self::InvalidDimensions { file, .. } => file.as_deref(),
            Self::ConfigError { .. } | Self::SerdeError(_) => None,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        let name = self
            .file_path()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());

        match (self, name) {
            (Self::ConfigError { message }, _) => message.clone(),
            (Self::IoError { source, .. }, Some(name)) => {
                format!("File system error on {}: {}", name, source)
            }
            (Self::ImageError { source, .. }, Some(name)) => {
                format!("Image processing failed for {}: {}", name, source)
            }
            (Self::InvalidDimensions { width, height, .. }, Some(name)) => format!(
                "Cannot scale {} to {}x{} pixels. Try a larger scaling factor.",
                name, width, height
            ),
            (other, _) => other.to_string(),
        }
    }
}

impl From<toml::de::Error> for ResizeError {
    fn from(err: toml::de::Error) -> Self {
        Self::SerdeError(format!("TOML parsing error: {}", err))
    }
}

impl From<serde_yaml::Error> for ResizeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerdeError(format!("YAML parsing error: {}", err))
    }
}

/// Error context extension for attaching the file an operation touched
pub trait ErrorContext<T> {
    /// Add file context to an error
    fn with_file_context(self, file: &Path) -> Result<T>;
}

impl<T> ErrorContext<T> for std::result::Result<T, std::io::Error> {
    fn with_file_context(self, file: &Path) -> Result<T> {
        self.map_err(|e| ResizeError::io(e, file))
    }
}

impl<T> ErrorContext<T> for std::result::Result<T, image::ImageError> {
    fn with_file_context(self, file: &Path) -> Result<T> {
        self.map_err(|e| ResizeError::image(e, file))
    }
}

impl<T> ErrorContext<T> for Result<T> {
    fn with_file_context(self, file: &Path) -> Result<T> {
        self.map_err(|mut error| {
            match &mut error {
                ResizeError::IoError { file: f, .. }
                | ResizeError::ImageError { file: f, .. }
                | ResizeError::InvalidDimensions { file: f, .. } => {
                    if f.is_none() {
                        *f = Some(file.to_path_buf());
                    }
                }
                ResizeError::ConfigError { .. } | ResizeError::SerdeError(_) => {}
            }

            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::error::{DecodingError, ImageFormatHint};

    fn decode_error() -> image::ImageError {
        image::ImageError::Decoding(DecodingError::new(
            ImageFormatHint::Exact(image::ImageFormat::Png),
            "invalid signature",
        ))
    }

    #[test]
    fn test_error_creation() {
        let err = ResizeError::config("test message");
        assert!(matches!(err, ResizeError::ConfigError { .. }));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_error_kinds() {
        let io = ResizeError::io(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "out/a.png",
        );
        assert_eq!(io.kind(), ErrorKind::FileSystem);

        let codec = ResizeError::image(decode_error(), "a.png");
        assert_eq!(codec.kind(), ErrorKind::Codec);

        let wrapped_io = ResizeError::image(
            image::ImageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
            "a.png",
        );
        assert_eq!(wrapped_io.kind(), ErrorKind::FileSystem);

        assert_eq!(
            ResizeError::invalid_dimensions(0, 3, None).kind(),
            ErrorKind::Codec
        );
    }

    #[test]
    fn test_user_messages() {
        let err = ResizeError::image(decode_error(), "/photos/broken.png");
        let msg = err.user_message();
        assert!(msg.contains("broken.png"));
        assert!(msg.contains("invalid signature"));

        let err = ResizeError::invalid_dimensions(0, 1, Some(PathBuf::from("tiny.gif")));
        assert!(err.user_message().contains("0x1"));

        let err = ResizeError::config("Please select an input folder");
        assert_eq!(err.user_message(), "Please select an input folder");
    }

    #[test]
    fn test_file_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.with_file_context(Path::new("test.jpg")).unwrap_err();

        assert_eq!(err.file_path(), Some(Path::new("test.jpg")));
        assert_eq!(err.kind(), ErrorKind::FileSystem);
    }

    #[test]
    fn test_file_context_keeps_existing_path() {
        let result: Result<()> = Err(ResizeError::invalid_dimensions(0, 0, None));
        let err = result.with_file_context(Path::new("a.png")).unwrap_err();
        assert_eq!(err.file_path(), Some(Path::new("a.png")));

        let result: Result<()> = Err(err);
        let err = result.with_file_context(Path::new("b.png")).unwrap_err();
        assert_eq!(err.file_path(), Some(Path::new("a.png")));
    }
}
