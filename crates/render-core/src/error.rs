use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Drawing primitive '{primitive}' failed: {message}")]
    Primitive {
        primitive: &'static str,
        message: String,
    },
    #[error("Surface used after release")]
    Released,
    /// The finished job could not be written out.
    #[error("Spool output error: {0}")]
    Spool(String),
}

impl RenderError {
    pub fn primitive(primitive: &'static str, message: impl Into<String>) -> Self {
        RenderError::Primitive {
            primitive,
            message: message.into(),
        }
    }
}
