use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::dto::ValidateRequest;
use crate::domain::entities::users::{UserProfile, UserRole};
use crate::utils::validators::{validate_bio, validate_nickname, validate_url};

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserResponse {
    pub id: Uuid,

    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,

    #[validate(length(min = 3, message = "Nickname must be at least 3 characters."))]
    #[validate(custom(function = "validate_nickname"))]
    pub nickname: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_bio"))]
    pub bio: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub profile_picture_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub linkedin_profile_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub github_profile_url: Option<String>,

    /// 접근 수준 (기본값: `AUTHENTICATED`)
    #[serde(default)]
    pub role: UserRole,

    /// 전문가 여부 (누락 또는 `null`이면 `false`)
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub is_professional: bool,
}

impl ValidateRequest for UserResponse {}

/// `null`을 기본값으로 해석하는 serde deserializer
fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            id,
            email,
            nickname,
            first_name,
            last_name,
            bio,
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
            role,
            is_professional,
        } = profile;

        Self {
            id,
            email,
            nickname,
            first_name,
            last_name,
            bio,
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
            role,
            is_professional,
        }
    }
}

/// 사용자 목록 응답 DTO (페이지네이션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserListResponse {
    /// 현재 페이지의 사용자 목록
    #[validate(nested)]
    pub items: Vec<UserResponse>,
    /// 전체 사용자 수
    pub total: u64,
    /// 현재 페이지 번호
    pub page: u64,
    /// 페이지 크기
    pub size: u64,
}

impl ValidateRequest for UserListResponse {}

impl UserListResponse {
    pub fn new(items: Vec<UserResponse>, total: u64, page: u64, size: u64) -> Self {
        Self {
            items,
            total,
            page,
            size,
        }
    }

    /// 전체 페이지 수 (페이지 크기가 0이면 0)
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(self.size)
    }
}
