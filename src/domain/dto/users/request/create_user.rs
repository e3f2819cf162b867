//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 요청 데이터 구조를 정의합니다.
//! 닉네임, 이메일, 비밀번호는 필수이며, 누락되면 역직렬화 단계에서 거절됩니다.
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::ValidateRequest;
use crate::utils::validators::{validate_bio, validate_nickname, validate_url};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,

    /// 닉네임 (3-50자, 단어 문자/하이픈만 허용)
    #[validate(length(
        min = 3,
        max = 50,
        message = "Nickname must be between 3 and 50 characters."
    ))]
    #[validate(custom(function = "validate_nickname"))]
    pub nickname: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// 자기소개 (최대 250자)
    #[validate(custom(function = "validate_bio"))]
    pub bio: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub profile_picture_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub linkedin_profile_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub github_profile_url: Option<String>,

    /// 계정 비밀번호
    pub password: String,
}

impl ValidateRequest for CreateUserRequest {}

// 로그에 비밀번호가 남지 않도록 직접 구현
impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("nickname", &self.nickname)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("bio", &self.bio)
            .field("profile_picture_url", &self.profile_picture_url)
            .field("linkedin_profile_url", &self.linkedin_profile_url)
            .field("github_profile_url", &self.github_profile_url)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
