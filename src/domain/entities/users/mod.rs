//! Users Entity Module
//!
//! 사용자 프로필 엔티티와 역할 열거형을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use user_profile_schemas::domain::entities::users::{UserProfile, UserRole};
//!
//! let mut profile = UserProfile::from_create(uuid::Uuid::new_v4(), &create_request);
//! profile.apply_update(update_request);
//! assert_eq!(profile.role, UserRole::Authenticated);
//! ```

pub mod user_profile;
pub mod user_role;

pub use user_profile::UserProfile;
pub use user_role::UserRole;
