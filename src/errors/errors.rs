use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileNotFound { .. } => "FileNotFound",
            ErrorImpl::PermissionDenied { .. } => "PermissionDenied",
            ErrorImpl::Unexpected { .. } => "Unexpected",
            ErrorImpl::PromptError { .. } => "PromptError",
            ErrorImpl::RenderError { .. } => "RenderError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileNotFound { .. } => ErrorTip::Suggestion(String::from(
                "Relative paths are resolved from the current directory",
            )),
            ErrorImpl::PermissionDenied { .. } => ErrorTip::Suggestion(String::from(
                "Check that the file is readable by the current user",
            )),
            ErrorImpl::Unexpected { .. } => ErrorTip::None,
            ErrorImpl::PromptError { .. } => ErrorTip::Suggestion(String::from(
                "Pass the file path as an argument instead",
            )),
            ErrorImpl::RenderError { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Error: The file '{path}' was not found.")]
    FileNotFound { path: String },
    #[error("Error: Permission denied to read the file '{path}'.")]
    PermissionDenied { path: String },
    #[error("An unexpected error occurred while reading '{path}': {message}")]
    Unexpected { path: String, message: String },
    #[error("Error: failed to read file name: {message}")]
    PromptError { message: String },
    #[error("Error: failed to render tokens: {message}")]
    RenderError { message: String },
}
