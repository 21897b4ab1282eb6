use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Csv(csv::Error),
    Io(std::io::Error),
    NotFound(String),
    ParseCommand(String),
    Regex(regex::Error),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::Io(e) => {
                write!(f, "{}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Invalid option '{}'. Please try again.", cmd)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Csv(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Regex(e) => Some(e),
            _ => None,
        }
    }
}
