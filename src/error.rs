use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrCipherError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Geometry error: {0}")]
    GeometryError(String),

    #[error("Font load error: {0}")]
    FontLoadError(String),

    #[error("OCR error: {0}")]
    OcrError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Generates factory methods for [`OcrCipherError`] variants that wrap a `String`.
macro_rules! error_constructors {
    ($(
        $(#[doc = $doc:expr])*
        $method:ident => $variant:ident
    ),* $(,)?) => {
        impl OcrCipherError {
            $(
                $(#[doc = $doc])*
                pub fn $method(msg: impl Into<String>) -> Self {
                    Self::$variant(msg.into())
                }
            )*
        }
    };
}

error_constructors! {
    /// Create a validation error.
    validation => ValidationError,
    /// Create a geometry error.
    geometry => GeometryError,
    /// Create a font load error.
    font_load => FontLoadError,
    /// Create an OCR error.
    ocr => OcrError,
    /// Create a configuration error.
    config => ConfigError,
    /// Create an output error.
    output => OutputError,
}

impl From<serde_yml::Error> for OcrCipherError {
    fn from(e: serde_yml::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<image::ImageError> for OcrCipherError {
    fn from(e: image::ImageError) -> Self {
        Self::OutputError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OcrCipherError>;
