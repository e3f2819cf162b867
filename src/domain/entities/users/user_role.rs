//! 사용자 역할 열거형

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// 사용자 접근 수준
///
/// JSON에서는 대문자 이름(`"AUTHENTICATED"` 등)으로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Anonymous,
    #[default]
    Authenticated,
    Manager,
    Admin,
}

impl UserRole {
    /// 정의된 모든 역할
    pub const ALL: [UserRole; 4] = [
        UserRole::Anonymous,
        UserRole::Authenticated,
        UserRole::Manager,
        UserRole::Admin,
    ];

    /// 직렬화에 쓰이는 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Anonymous => "ANONYMOUS",
            UserRole::Authenticated => "AUTHENTICATED",
            UserRole::Manager => "MANAGER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    /// 대소문자를 구분하지 않고 역할 이름을 해석합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::ValidationError(format!("Unknown user role: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_is_authenticated() {
        assert_eq!(UserRole::default(), UserRole::Authenticated);
    }

    #[test]
    fn test_role_serializes_as_uppercase_name() {
        assert_eq!(serde_json::to_string(&UserRole::Manager).unwrap(), r#""MANAGER""#);

        let role: UserRole = serde_json::from_str(r#""ADMIN""#).unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_role_rejects_unknown_wire_name() {
        assert!(serde_json::from_str::<UserRole>(r#""admin""#).is_err());
        assert!(serde_json::from_str::<UserRole>(r#""SUPERUSER""#).is_err());
    }

    #[test]
    fn test_role_from_str_is_case_insensitive() {
        assert_eq!("anonymous".parse::<UserRole>().unwrap(), UserRole::Anonymous);
        assert_eq!(" Manager ".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert!(matches!(
            "root".parse::<UserRole>(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_display_matches_wire_name() {
        for role in UserRole::ALL {
            assert_eq!(
                serde_json::to_string(&role).unwrap(),
                format!("\"{}\"", role)
            );
        }
    }
}
