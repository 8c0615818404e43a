use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    NdviBounds,
    EmissivityRange(&'static str),
    NonFinite(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NdviBounds => {
                write!(f, "ndvi_min must be strictly less than ndvi_max")
            }
            ConfigError::EmissivityRange(field) => {
                write!(f, "{} must be within (0, 1]", field)
            }
            ConfigError::NonFinite(field) => write!(f, "{} must be finite", field),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}
