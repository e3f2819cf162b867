//! User Profile Entity
//!
//! 사용자 프로필 엔티티입니다. 비밀번호는 엔티티에 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::users::user_role::UserRole;

/// 사용자 프로필 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub nickname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
    /// 기본값: `AUTHENTICATED`
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub is_professional: bool,
}

impl UserProfile {
    /// 생성 요청으로부터 프로필을 만듭니다.
    ///
    /// 역할은 `AUTHENTICATED`, 전문가 여부는 `false`로 시작합니다.
    /// 요청의 비밀번호는 복사되지 않습니다.
    pub fn from_create(id: Uuid, request: &CreateUserRequest) -> Self {
        Self {
            id,
            email: request.email.clone(),
            nickname: Some(request.nickname.clone()),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            bio: request.bio.clone(),
            profile_picture_url: request.profile_picture_url.clone(),
            linkedin_profile_url: request.linkedin_profile_url.clone(),
            github_profile_url: request.github_profile_url.clone(),
            role: UserRole::default(),
            is_professional: false,
        }
    }

    /// 새 UUID를 발급하여 생성 요청으로부터 프로필을 만듭니다.
    pub fn new(request: &CreateUserRequest) -> Self {
        Self::from_create(Uuid::new_v4(), request)
    }

    /// 부분 수정 요청을 적용합니다.
    ///
    /// 요청에 값이 있는(`Some`) 필드만 덮어쓰고 나머지는 유지합니다.
    pub fn apply_update(&mut self, update: UpdateUserRequest) {
        let UpdateUserRequest {
            email,
            nickname,
            first_name,
            last_name,
            bio,
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
        } = update;

        if let Some(email) = email {
            self.email = email;
        }
        if nickname.is_some() {
            self.nickname = nickname;
        }
        if first_name.is_some() {
            self.first_name = first_name;
        }
        if last_name.is_some() {
            self.last_name = last_name;
        }
        if bio.is_some() {
            self.bio = bio;
        }
        if profile_picture_url.is_some() {
            self.profile_picture_url = profile_picture_url;
        }
        if linkedin_profile_url.is_some() {
            self.linkedin_profile_url = linkedin_profile_url;
        }
        if github_profile_url.is_some() {
            self.github_profile_url = github_profile_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateUserRequest {
        serde_json::from_value(serde_json::json!({
            "email": "john.doe@example.com",
            "nickname": "john_doe",
            "first_name": "John",
            "bio": "Experienced developer",
            "password": "Secure*1234"
        }))
        .unwrap()
    }

    #[test]
    fn test_from_create_uses_defaults_and_drops_password() {
        let id = Uuid::new_v4();
        let profile = UserProfile::from_create(id, &create_request());

        assert_eq!(profile.id, id);
        assert_eq!(profile.nickname.as_deref(), Some("john_doe"));
        assert_eq!(profile.role, UserRole::Authenticated);
        assert!(!profile.is_professional);

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_apply_update_only_touches_supplied_fields() {
        let mut profile = UserProfile::new(&create_request());
        let update: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "last_name": "Doe",
            "github_profile_url": "https://github.com/johndoe"
        }))
        .unwrap();

        profile.apply_update(update);

        assert_eq!(profile.first_name.as_deref(), Some("John"));
        assert_eq!(profile.last_name.as_deref(), Some("Doe"));
        assert_eq!(profile.bio.as_deref(), Some("Experienced developer"));
        assert_eq!(
            profile.github_profile_url.as_deref(),
            Some("https://github.com/johndoe")
        );
        assert_eq!(profile.email, "john.doe@example.com");
    }
}
