use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration error
    ConfigError(String),
    /// Non-positive quantity reached the pricing engine
    InvalidInput(String),
    /// Selection references a tier missing from the price book
    UnknownTier(String),
    /// Output format conversion error
    ConversionError(String),
    /// Table snapshot export error
    ExportError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::UnknownTier(name) => write!(f, "Unknown tier: {}", name),
            Self::ConversionError(msg) => write!(f, "Conversion error: {}", msg),
            Self::ExportError(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConversionError(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::ExportError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::UnknownTier("Enterprise".to_string());
        assert_eq!(error.to_string(), "Unknown tier: Enterprise");
    }

    #[test]
    fn test_invalid_input_display() {
        let error = AppError::InvalidInput("user count must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid input: user count must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: AppError = io_err.into();
        assert!(matches!(error, AppError::ExportError(_)));
    }
}
