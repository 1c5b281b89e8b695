pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("invalid config {path}: {message}")]
    Config { path: String, message: String },
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn io_error_keeps_context_and_source() {
        let err = AppError::io_with_context(
            std::io::Error::other("disk gone"),
            "failed to open log file",
        );
        assert_eq!(err.to_string(), "I/O error: failed to open log file");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_error_names_the_file() {
        let err = AppError::config("/tmp/tvw.toml", "expected a table");
        assert_eq!(
            err.to_string(),
            "invalid config /tmp/tvw.toml: expected a table"
        );
    }
}
