//! Error types for bench file loading and validation.

use tbgen_diagnostics::{Category, Diagnostic, DiagnosticCode};

/// Errors that can occur when loading or validating a bench description.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the bench file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Test values were given before any input signal was declared.
    #[error("test values supplied but no input signals are declared")]
    ValuesWithoutInputs,

    /// Explicit mode was selected without any test values.
    #[error("explicit vector mode requires at least one test value")]
    NoValues,

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// The `E2xx` code this error is reported under.
    pub fn code(&self) -> DiagnosticCode {
        let number = match self {
            ConfigError::IoError(_) => 201,
            ConfigError::ParseError(_) => 202,
            ConfigError::MissingField(_) => 203,
            ConfigError::ValuesWithoutInputs => 204,
            ConfigError::NoValues => 205,
            ConfigError::ValidationError(_) => 206,
        };
        DiagnosticCode::new(Category::Error, number)
    }

    /// Describes this error as an error-severity [`Diagnostic`].
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag =
            Diagnostic::error(self.code(), self.to_string()).with_context("bench configuration");
        match self {
            ConfigError::ValuesWithoutInputs => {
                diag.with_help("declare the input signals before listing test values")
            }
            ConfigError::NoValues => {
                diag.with_help("list test values, or select exhaustive mode")
            }
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_codes() {
        assert_eq!(ConfigError::ValuesWithoutInputs.code().to_string(), "E204");
        let diag = ConfigError::NoValues.to_diagnostic();
        assert!(diag.severity.is_error());
        assert_eq!(diag.code.to_string(), "E205");
        assert_eq!(diag.context.as_deref(), Some("bench configuration"));
        assert_eq!(diag.help, ["list test values, or select exhaustive mode"]);
    }

    #[test]
    fn display_missing_field() {
        let err = ConfigError::MissingField("testbench.name".to_string());
        assert_eq!(format!("{err}"), "missing required field: testbench.name");
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse configuration: expected '=' at line 3"
        );
    }

    #[test]
    fn display_values_without_inputs() {
        assert_eq!(
            ConfigError::ValuesWithoutInputs.to_string(),
            "test values supplied but no input signals are declared"
        );
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(format!("{err}").starts_with("failed to read configuration:"));
    }
}
