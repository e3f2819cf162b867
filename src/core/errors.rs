//! # Application Error Handling System
//!
//! 사용자 프로필 스키마 계층의 통합 에러 처리 시스템입니다.
//! 모든 검증 실패는 `AppError` 하나로 모이며, 호스트 프레임워크(Actix-Web)가
//! 그대로 반환할 수 있도록 `ResponseError`를 구현합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 의미 | HTTP 상태 |
//! |------|------|-----------|
//! | `ValidationError` | 필드/교차 필드 검증 실패, 잘못된 JSON | 400 |
//! | `ConflictError` | 고유 닉네임 생성 실패 | 409 |
//! | `InternalError` | 입출력 등 예상하지 못한 오류 | 500 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use user_profile_schemas::core::errors::{AppError, AppResult};
//!
//! fn check(payload: &UpdateUserRequest) -> AppResult<()> {
//!     if !payload.has_any_value() {
//!         return Err(AppError::ValidationError(
//!             "At least one field must be provided for update".to_string()
//!         ));
//!     }
//!     payload.validate()?;   // ValidationErrors → AppError 자동 변환
//!     Ok(())
//! }
//! ```
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Validation error",
//!   "details": "bio: Bio must not exceed 250 characters. Please provide a concise description."
//! }
//! ```

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::domain::dto::users::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// # 발생 시나리오
    /// - 필수 필드 누락 또는 JSON 구문 오류
    /// - 이메일/닉네임/URL 형식 오류
    /// - 자기소개 길이 초과
    /// - 빈 부분 수정 요청
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌 에러 (409 Conflict)
    ///
    /// 제한된 시도 횟수 안에 고유한 닉네임을 찾지 못한 경우 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 응답의 `error` 필드에 들어갈 분류 이름
    pub fn category(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "Validation error",
            AppError::ConflictError(_) => "Conflict",
            AppError::InternalError(_) => "Internal server error",
        }
    }

    /// 변형에 담긴 사람이 읽을 수 있는 메시지
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::ConflictError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl From<ValidationErrors> for AppError {
    /// `validator`의 필드 에러들을 하나의 메시지로 평탄화합니다.
    ///
    /// 형식은 `"<field>: <message>"`이며 `"; "`로 이어 붙입니다.
    /// 중첩 구조는 `items[0].email`처럼 경로로 표현하고, 필드 이름 순으로 정렬합니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_messages(&errors, "", &mut messages);
        messages.sort();
        AppError::ValidationError(messages.join("; "))
    }
}

fn collect_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let text = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(format!("{}: {}", path, text));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 본문은 항상 [`ErrorResponse`] 형식입니다. 5xx의 경우 상세 메시지는
    /// 서버 로그에만 남기고 클라이언트에는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let body = if status.is_server_error() {
            log::error!("{}", self);
            ErrorResponse::new(self.category())
        } else {
            ErrorResponse::from(self)
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let raw = std::fs::read_to_string(path)
///     .with_context(|| format!("Failed to read {}", path))?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
