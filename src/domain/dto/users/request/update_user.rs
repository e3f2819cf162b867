//! 사용자 정보 부분 수정 요청 DTO
//!
//! 모든 필드가 선택사항인 유일한 표현입니다. 최소 하나의 필드에는 값이 있어야 하며,
//! 이 검사는 필드별 검증보다 먼저 수행됩니다.
//!
//! 알 수 없는 JSON 키는 역직렬화 시 무시되므로 값으로 인정되지 않습니다.
//! 따라서 `{"foo": "bar"}`는 빈 수정 요청으로 거절됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::ValidateRequest;
use crate::utils::validators::{validate_bio, validate_strict_nickname, validate_url};

/// 빈 수정 요청에 대한 에러 메시지
pub const EMPTY_UPDATE_MESSAGE: &str = "At least one field must be provided for update";

/// 사용자 정보 부분 수정 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "value is not a valid email address"))]
    pub email: Option<String>,

    /// 닉네임 (3-20자, 영숫자로 시작하고 끝나야 함)
    #[validate(length(
        min = 3,
        max = 20,
        message = "Nickname must be 3-20 characters long and contain only alphanumeric characters, underscores, or hyphens."
    ))]
    #[validate(custom(function = "validate_strict_nickname"))]
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
}

impl UpdateUserRequest {
    /// 비어 있지 않은 값이 하나라도 있는지 확인합니다.
    ///
    /// 빈 문자열은 값이 없는 것으로 취급합니다.
    pub fn has_any_value(&self) -> bool {
        [
            &self.email,
            &self.nickname,
            &self.first_name,
            &self.last_name,
            &self.bio,
            &self.profile_picture_url,
            &self.linkedin_profile_url,
            &self.github_profile_url,
        ]
        .into_iter()
        .any(|value| value.as_deref().is_some_and(|v| !v.is_empty()))
    }

    /// 최소 하나의 필드가 제공되었는지 검증합니다.
    pub fn check_at_least_one_value(&self) -> AppResult<()> {
        if !self.has_any_value() {
            return Err(AppError::ValidationError(EMPTY_UPDATE_MESSAGE.to_string()));
        }
        Ok(())
    }
}

impl ValidateRequest for UpdateUserRequest {
    fn validate_request(&self) -> AppResult<()> {
        self.check_at_least_one_value()?;
        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::parse_request;
    use serde_json::json;

    fn parse(payload: serde_json::Value) -> AppResult<UpdateUserRequest> {
        parse_request::<UpdateUserRequest>(&payload.to_string())
    }

    #[test]
    fn test_empty_update_is_rejected() {
        for payload in [
            json!({}),
            json!({"nickname": null, "bio": null}),
            json!({"first_name": "", "last_name": ""}),
        ] {
            assert_eq!(
                parse(payload).unwrap_err(),
                AppError::ValidationError(EMPTY_UPDATE_MESSAGE.to_string())
            );
        }
    }

    #[test]
    fn test_unknown_keys_do_not_count_as_values() {
        assert_eq!(
            parse(json!({"foo": "bar"})).unwrap_err(),
            AppError::ValidationError(EMPTY_UPDATE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_any_single_field_is_enough() {
        for (field, value) in [
            ("email", "john.doe@example.com"),
            ("nickname", "john_doe123"),
            ("first_name", "John"),
            ("last_name", "Doe"),
            ("bio", "Experienced developer"),
            ("profile_picture_url", "https://example.com/profiles/john.jpg"),
            ("linkedin_profile_url", "https://linkedin.com/in/johndoe"),
            ("github_profile_url", "https://github.com/johndoe"),
        ] {
            let mut payload = serde_json::Map::new();
            payload.insert(field.to_string(), json!(value));
            assert!(parse(payload.into()).is_ok(), "{} alone was rejected", field);
        }
    }

    #[test]
    fn test_presence_check_runs_before_field_validation() {
        // 잘못된 값이지만 비어 있으므로 "최소 하나" 에러가 먼저 반환됨
        let request = UpdateUserRequest {
            nickname: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(
            request.validate_request().unwrap_err(),
            AppError::ValidationError(EMPTY_UPDATE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_empty_field_next_to_real_value_is_still_validated() {
        let err = parse(json!({"first_name": "John", "nickname": ""})).unwrap_err();

        assert!(err.message().starts_with("nickname:"));
    }

    #[test]
    fn test_nickname_uses_strict_grammar() {
        assert!(parse(json!({"nickname": "john-doe"})).is_ok());
        assert!(parse(json!({"nickname": "-john"})).is_err());
        assert!(parse(json!({"nickname": "john_"})).is_err());
        assert!(parse(json!({"nickname": "a".repeat(21)})).is_err());
        assert!(parse(json!({"nickname": "a".repeat(20)})).is_ok());
    }

    #[test]
    fn test_field_rules_apply_to_supplied_values() {
        let err = parse(json!({
            "email": "nope",
            "bio": "b".repeat(300),
            "linkedin_profile_url": "linkedin.com/in/johndoe"
        }))
        .unwrap_err();

        let msg = err.message();
        assert!(msg.contains("email:"));
        assert!(msg.contains("bio:"));
        assert!(msg.contains("linkedin_profile_url:"));
    }
}
