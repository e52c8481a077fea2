use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Personal access token not found. Set the 'pat' environment variable or run 'wit-outline auth'.")]
    TokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Duplicate ID found: {0}. Exiting the program.")]
    DuplicateWorkItem(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Interrupted before the outline was written")]
    Interrupted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type OutlineResult<T> = Result<T, OutlineError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> OutlineResult<T>;
    fn with_context<F>(self, f: F) -> OutlineResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> OutlineResult<T> {
        self.map_err(|e| OutlineError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> OutlineResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| OutlineError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> OutlineResult<T> {
        self.ok_or_else(|| OutlineError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> OutlineResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| OutlineError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! outline_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::OutlineError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::OutlineError::$error_type(format!($fmt, $($arg)*))
    };
}
