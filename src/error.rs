use rollprint_device::DeviceError;
use rollprint_layout::LayoutError;
use rollprint_render_core::RenderError;
use rollprint_types::ModelError;
use std::fmt;
use thiserror::Error;

/// Every way a print job can fail, as reported to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrintError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported document type: '{0}'")]
    UnsupportedDocumentType(String),

    #[error("Device unavailable: {0}")]
    DeviceUnavailable(#[from] DeviceError),

    #[error("Rendering failed: {0}")]
    RenderingFailure(#[from] RenderError),

    #[error("Invalid printer profile: {0}")]
    InvalidProfile(#[from] LayoutError),
}

impl From<ModelError> for PrintError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::MalformedInput(message) => PrintError::MalformedInput(message),
            ModelError::UnsupportedDocumentType(kind) => {
                PrintError::UnsupportedDocumentType(kind)
            }
        }
    }
}

/// Stable classification of a [`PrintError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedInput,
    UnsupportedDocumentType,
    DeviceUnavailable,
    RenderingFailure,
    InvalidProfile,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MalformedInput => "malformed_input",
            ErrorKind::UnsupportedDocumentType => "unsupported_document_type",
            ErrorKind::DeviceUnavailable => "device_unavailable",
            ErrorKind::RenderingFailure => "rendering_failure",
            ErrorKind::InvalidProfile => "invalid_profile",
        }
    }

    /// HTTP status the kind is reported with.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::MalformedInput | ErrorKind::UnsupportedDocumentType => 400,
            ErrorKind::DeviceUnavailable => 503,
            ErrorKind::RenderingFailure | ErrorKind::InvalidProfile => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PrintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrintError::MalformedInput(_) => ErrorKind::MalformedInput,
            PrintError::UnsupportedDocumentType(_) => ErrorKind::UnsupportedDocumentType,
            PrintError::DeviceUnavailable(_) => ErrorKind::DeviceUnavailable,
            PrintError::RenderingFailure(_) => ErrorKind::RenderingFailure,
            PrintError::InvalidProfile(_) => ErrorKind::InvalidProfile,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}
