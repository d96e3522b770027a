use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeviceError {
    #[error("Printer '{device}' is unavailable: {reason}")]
    Unavailable { device: String, reason: String },
    #[error("Could not read or write the configuration of printer '{device}': {reason}")]
    Configuration { device: String, reason: String },
    #[error("Invalid resolution: {0} dpi")]
    InvalidResolution(u32),
}

impl DeviceError {
    pub fn unavailable(device: &str, reason: impl ToString) -> Self {
        DeviceError::Unavailable {
            device: device.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn configuration(device: &str, reason: impl ToString) -> Self {
        DeviceError::Configuration {
            device: device.to_string(),
            reason: reason.to_string(),
        }
    }
}
