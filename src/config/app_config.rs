//! 실행 환경 및 닉네임 생성 설정 관리 모듈

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 없을 때 사용할 기본 로그 필터
    ///
    /// - Development: `debug` (거절된 페이로드와 닉네임 후보까지 출력)
    /// - 그 외: `info`
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            _ => "info",
        }
    }
}

/// 닉네임 생성 설정
pub struct NicknameConfig;

impl NicknameConfig {
    /// 기본 최대 시도 횟수
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

    /// 허용되는 최대 시도 횟수의 상한
    pub const MAX_ALLOWED_ATTEMPTS: usize = 100_000;

    /// 고유 닉네임 생성 시 최대 시도 횟수를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `NICKNAME_MAX_ATTEMPTS`: 1-100000 범위의 정수. 범위를 벗어나거나
    ///   파싱할 수 없으면 기본값 1000을 사용합니다.
    pub fn max_attempts() -> usize {
        Self::max_attempts_from(env::var("NICKNAME_MAX_ATTEMPTS").ok().as_deref())
    }

    /// 주어진 원시 값에서 최대 시도 횟수를 해석합니다.
    pub fn max_attempts_from(raw: Option<&str>) -> usize {
        if let Some(raw) = raw {
            match raw.trim().parse::<usize>() {
                Ok(attempts) if (1..=Self::MAX_ALLOWED_ATTEMPTS).contains(&attempts) => {
                    return attempts;
                }
                _ => log::warn!(
                    "NICKNAME_MAX_ATTEMPTS 값이 올바르지 않습니다: {}. 기본값 {} 사용",
                    raw,
                    Self::DEFAULT_MAX_ATTEMPTS
                ),
            }
        }

        Self::DEFAULT_MAX_ATTEMPTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(Environment::Development.default_log_filter(), "debug");
        assert_eq!(Environment::Test.default_log_filter(), "info");
        assert_eq!(Environment::Production.default_log_filter(), "info");
    }

    #[test]
    fn test_nickname_max_attempts_parsing() {
        assert_eq!(NicknameConfig::max_attempts_from(None), 1000);
        assert_eq!(NicknameConfig::max_attempts_from(Some("50")), 50);
        assert_eq!(NicknameConfig::max_attempts_from(Some(" 7 ")), 7);
        assert_eq!(NicknameConfig::max_attempts_from(Some("0")), 1000);
        assert_eq!(NicknameConfig::max_attempts_from(Some("100001")), 1000);
        assert_eq!(NicknameConfig::max_attempts_from(Some("many")), 1000);
    }

    #[test]
    fn test_nickname_max_attempts_default() {
        if env::var("NICKNAME_MAX_ATTEMPTS").is_err() {
            assert_eq!(NicknameConfig::max_attempts(), NicknameConfig::DEFAULT_MAX_ATTEMPTS);
        }
    }
}
