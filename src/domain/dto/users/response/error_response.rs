//! 에러 응답 DTO

use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// 표준 에러 응답
///
/// ```json
/// { "error": "Not Found", "details": "The requested resource was not found." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

impl ErrorResponse {
    /// 상세 정보 없는 에러 응답
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// 상세 정보를 포함한 에러 응답
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self::with_details(error.category(), error.message())
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from(&error)
    }
}
