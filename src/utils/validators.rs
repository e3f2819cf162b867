//! # 필드 검증 함수
//!
//! 사용자 표현(Create/Update/Response)들이 공유하는 필드 단위 검증 규칙입니다.
//! `validator`의 `custom(function = ...)` 속성에 그대로 연결할 수 있는 형태로
//! 제공되며, `Option` 필드가 `None`이면 검증기가 호출되지 않으므로
//! 값이 없는 필드는 그대로 통과합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// 자기소개 최대 길이 (문자 수)
pub const BIO_MAX_CHARS: usize = 250;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("valid url regex"));

/// 기본 닉네임 문법: 단어 문자(유니코드 포함) 또는 하이픈
static BASE_NICKNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w-]+$").expect("valid nickname regex"));

/// 엄격한 닉네임 문법: 영숫자로 시작하고 끝나며, 중간에는 영숫자/언더스코어/하이픈
static STRICT_NICKNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9_-]*[a-zA-Z0-9])?$").expect("valid nickname regex")
});

/// `http://` 또는 `https://`로 시작하는 웹 주소인지 확인합니다.
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

/// 기본 닉네임 문법(`^[\w-]+$`)에 맞는지 확인합니다.
pub fn is_base_nickname(nickname: &str) -> bool {
    BASE_NICKNAME_RE.is_match(nickname)
}

/// 앞뒤에 하이픈/언더스코어가 없는 엄격한 닉네임 문법에 맞는지 확인합니다.
pub fn is_strict_nickname(nickname: &str) -> bool {
    STRICT_NICKNAME_RE.is_match(nickname)
}

/// 프로필 URL 검증
///
/// 프로필 사진, LinkedIn, GitHub URL 필드에 적용됩니다.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if !is_valid_url(url) {
        return Err(ValidationError::new("invalid_url").with_message(
            "Invalid URL format. URLs must start with 'http://' or 'https://' and be a valid web address."
                .into(),
        ));
    }
    Ok(())
}

/// 자기소개 길이 검증 (최대 250자)
///
/// 바이트가 아니라 문자 수를 셉니다.
pub fn validate_bio(bio: &str) -> Result<(), ValidationError> {
    if bio.chars().count() > BIO_MAX_CHARS {
        return Err(ValidationError::new("bio_too_long").with_message(
            "Bio must not exceed 250 characters. Please provide a concise description.".into(),
        ));
    }
    Ok(())
}

/// 생성/응답용 닉네임 형식 검증
pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if !is_base_nickname(nickname) {
        return Err(ValidationError::new("invalid_nickname").with_message(
            "Nickname must contain only alphanumeric characters, underscores, or hyphens.".into(),
        ));
    }
    Ok(())
}

/// 수정용 닉네임 형식 검증 (앞뒤 하이픈/언더스코어 금지)
pub fn validate_strict_nickname(nickname: &str) -> Result<(), ValidationError> {
    if !is_strict_nickname(nickname) {
        return Err(ValidationError::new("invalid_nickname").with_message(
            "Nickname must start and end with a letter or digit and contain only alphanumeric characters, underscores, or hyphens."
                .into(),
        ));
    }
    Ok(())
}
