//! 인증 요청관련 DTO
//!
//! 로그인 요청 정보를 매핑합니다. 로그인 시에는 이메일 형식을 검사하지 않고
//! 값의 존재만 확인합니다.
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::ValidateRequest;

/// 로그인 요청 구조체
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl ValidateRequest for LoginRequest {}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
