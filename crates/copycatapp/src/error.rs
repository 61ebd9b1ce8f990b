use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyCatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CopyCatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: CopyCatError = io_err.into();
        assert!(matches!(err, CopyCatError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn api_error_display() {
        let err = CopyCatError::Api("No card at b4".to_string());
        assert_eq!(err.to_string(), "Api Error: No card at b4");
    }
}
