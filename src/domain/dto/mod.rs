//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 구성 요소
//!
//! | 구성 요소 | 역할 |
//! |-----------|------|
//! | `users::request` | 요청 본문 매핑 + 입력값 검증 |
//! | `users::response` | 응답 본문 매핑 |
//! | [`ValidateRequest`] | 표현별 검증 진입점 |
//! | [`parse_request`] | JSON 역직렬화 + 검증 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use user_profile_schemas::core::errors::AppError;
//! use user_profile_schemas::domain::dto::{parse_request, ValidateRequest};
//! use user_profile_schemas::domain::dto::users::request::UpdateUserRequest;
//!
//! async fn update_profile(body: String) -> Result<HttpResponse, AppError> {
//!     let update = parse_request::<UpdateUserRequest>(&body)?;
//!     Ok(HttpResponse::Ok().json(update))
//! }
//! ```

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};

pub mod users;

pub use users::*;

/// 표현별 검증 진입점
///
/// 기본 구현은 `validator` 파생 규칙만 실행합니다. 교차 필드 규칙이 있는 표현은
/// 이 메서드를 재정의하여 필드 검증 전후에 규칙을 추가합니다.
pub trait ValidateRequest: Validate {
    fn validate_request(&self) -> AppResult<()> {
        self.validate()?;
        Ok(())
    }
}

/// JSON 문자열을 역직렬화하고 검증합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - JSON 구문 오류, 필수 필드 누락, 타입 불일치,
///   또는 검증 규칙 위반
pub fn parse_request<T>(json: &str) -> AppResult<T>
where
    T: DeserializeOwned + ValidateRequest,
{
    let payload: T = serde_json::from_str(json).map_err(|e| {
        log::debug!("Rejected payload (malformed): {}", e);
        AppError::ValidationError(e.to_string())
    })?;

    if let Err(e) = payload.validate_request() {
        log::debug!("Rejected payload: {}", e);
        return Err(e);
    }

    Ok(payload)
}
