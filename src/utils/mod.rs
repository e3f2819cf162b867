//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`validators`] - URL, 자기소개, 닉네임 필드 검증 함수
//! - [`nickname_gen`] - 무작위 닉네임 생성기
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_profile_schemas::utils::validators::validate_bio;
//! use user_profile_schemas::utils::nickname_gen::generate_nickname;
//!
//! assert!(validate_bio("Experienced developer").is_ok());
//! let nickname = generate_nickname();
//! ```

pub mod nickname_gen;
pub mod validators;
