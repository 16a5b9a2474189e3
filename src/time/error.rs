use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Unrecognised UTC offset or timezone: {0}")]
    InvalidOffset(String),

    #[error("No timezone found for coordinate ({latitude}, {longitude})")]
    NoTimezoneForLocation { latitude: String, longitude: String },
}
